//! Testing utilities and harness for PageMenu
//!
//! Headless stand-ins for every host collaborator. Each recorder is cheap to
//! clone and shares its log, so a test keeps one handle and gives the other
//! to the controller.

pub mod assertions;
mod delegate;
mod hosts;
mod providers;

pub use assertions::*;
pub use delegate::RecordingDelegate;
pub use hosts::{HostCall, MenuHostCall, RecordingMenuHost, RecordingPageHost};
pub use providers::{FixedMenuItems, TestMenuItem, TestPage, VecContentProvider};

/// Installs `env_logger` for test output. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .parse_default_env()
        .try_init();
}

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::delegate::RecordingDelegate;
    pub use crate::hosts::{HostCall, MenuHostCall, RecordingMenuHost, RecordingPageHost};
    pub use crate::init_logging;
    pub use crate::providers::{FixedMenuItems, TestMenuItem, TestPage, VecContentProvider};
}
