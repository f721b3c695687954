//! CLI command handlers

pub mod infer;

pub use infer::{InferArgs, handle_infer};
