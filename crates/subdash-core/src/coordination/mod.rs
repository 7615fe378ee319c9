//! Pipeline coordination

pub mod processor;

pub use processor::{DashboardProcessor, StatusCollector};
