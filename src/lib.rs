pub mod adb;
pub mod app;
pub mod args;
pub mod report;
pub mod settings;

pub use adb::{AproxError, AproxResult, Bridge};
pub use args::{Action, Args, Invocation};
