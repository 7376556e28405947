use super::error::{AproxError, AproxResult};
use super::types::{CommandExecutor, CommandOutput, DeviceCommand, parse_default_network};
use log::debug;
use std::path::PathBuf;

pub const WIRELESS_SETTINGS_ACTION: &str = "android.settings.WIRELESS_SETTINGS";
pub const HTTP_PROXY_KEY: &str = "http_proxy";

/// `am start --activity-clear-top -a android.settings.WIRELESS_SETTINGS`
pub fn open_wireless_settings() -> DeviceCommand {
    DeviceCommand::new(["am", "start", "--activity-clear-top", "-a"]).arg(WIRELESS_SETTINGS_ACTION)
}

pub fn get_http_proxy() -> DeviceCommand {
    DeviceCommand::new(["settings", "get", "global", HTTP_PROXY_KEY])
}

pub fn put_http_proxy(value: &str) -> DeviceCommand {
    DeviceCommand::new(["settings", "put", "global", HTTP_PROXY_KEY]).arg(value)
}

pub fn dump_netd() -> DeviceCommand {
    DeviceCommand::new(["dumpsys", "netd"]).privileged()
}

/// `ndc resolver setnetdns <network> '' <server>...` as root. The empty
/// argument is the search domain list.
pub fn set_network_dns<S: AsRef<str>>(network_id: &str, servers: &[S]) -> DeviceCommand {
    servers
        .iter()
        .fold(
            DeviceCommand::new(["ndc", "resolver", "setnetdns", network_id, ""]),
            |cmd, server| cmd.arg(server.as_ref()),
        )
        .privileged()
}

/// A located adb executable together with the means to run it.
pub struct Bridge<E> {
    path: PathBuf,
    executor: E,
}

impl<E: CommandExecutor> Bridge<E> {
    pub fn new(path: impl Into<PathBuf>, executor: E) -> Self {
        Self {
            path: path.into(),
            executor,
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Runs `adb shell <command>` and returns whatever it printed.
    pub async fn shell(&self, command: &DeviceCommand) -> AproxResult<CommandOutput> {
        let output = self
            .executor
            .run(&self.path, &command.bridge_args())
            .await?;
        if output.is_failure() {
            debug!("'{command}' failed: {}", output.error_text());
        } else {
            debug!("'{command}' succeeded");
        }
        Ok(output)
    }

    /// Like [`Bridge::shell`] but turns a failed command into an error.
    pub async fn shell_checked(&self, command: &DeviceCommand) -> AproxResult<CommandOutput> {
        let output = self.shell(command).await?;
        if output.is_failure() {
            return Err(AproxError::CommandFailed {
                command: command.to_string(),
                stderr: output.error_text(),
            });
        }
        Ok(output)
    }

    /// Identifier of the device's default network, read from `dumpsys netd`
    /// as root.
    pub async fn network_id(&self) -> AproxResult<String> {
        let output = self.shell(&dump_netd()).await?;
        if output.is_failure() {
            return Err(AproxError::NetworkResolution {
                message: output.error_text(),
            });
        }
        parse_default_network(&output.stdout).ok_or_else(|| AproxError::NetworkResolution {
            message: "Default network not found in netd dump".to_string(),
        })
    }
}
