//! This module provides reusable test utilities:
//! - Mock monitoring backend
//! - Sample backend payloads
//! - Config directory builder

// Allow unused code in test fixtures, not every test binary uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_backend;
pub mod test_config;
pub mod test_data;

// Re-export commonly used items
pub use mock_backend::MockBackend;
pub use test_config::TestConfigDir;
pub use test_data::*;
