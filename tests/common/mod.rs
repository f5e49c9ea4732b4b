pub mod mocks;

pub use mocks::{FailingUpstreamClient, MockUpstreamClient};
