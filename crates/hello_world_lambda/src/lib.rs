//! Lambda runtime integration for the hello world function.
//!
//! The response contract lives in `hello_world_core`; this crate wires it to
//! `lambda_runtime` and owns the `bootstrap` binary.

pub mod handlers;

pub use hello_world_core::contract::ApiGatewayResponse;
