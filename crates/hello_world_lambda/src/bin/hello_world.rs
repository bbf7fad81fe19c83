use hello_world_lambda::handlers::hello::handle_request;
use lambda_runtime::{service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    lambda_runtime::run(service_fn(handle_request)).await
}
