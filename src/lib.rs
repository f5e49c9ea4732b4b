pub mod config;
pub mod error;
pub mod gemini;
pub mod relay;
pub mod server;

pub use error::{Error, Result};
