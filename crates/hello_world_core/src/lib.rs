//! Response contract for the hello world function.
//!
//! This crate owns the fixed greeting and the API Gateway style response
//! shape. It intentionally excludes Lambda runtime concerns.

pub mod contract;
