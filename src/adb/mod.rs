// ADB module - everything that talks to the device through the adb executable.
// Commands are built as structured argument lists and run through a
// `CommandExecutor`, so the setting commands can be driven by a fake in tests.

pub mod backend;
pub mod error;
pub mod locator;
pub mod shell;
pub mod types;


pub use backend::Bridge;
pub use error::{AproxError, AproxResult};
pub use locator::BridgeLocator;
pub use shell::ProcessExecutor;
pub use types::{CommandExecutor, CommandOutput, DeviceCommand};
