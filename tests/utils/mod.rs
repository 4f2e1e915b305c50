pub mod actions;
pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use actions::{get_json, post_json, stat_entry};
#[allow(unused_imports)]
pub use mocks::{FailingStatisticStore, SlowStatisticStore};
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
