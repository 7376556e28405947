//! The four operator commands.
//!
//! Each command is a short fail-fast sequence of device shell commands. A
//! failed step is reported and ends the command with `Ok(())`; only the write
//! steps of [`clear`] raise, which makes the process exit non-zero.

use crate::adb::backend::{
    get_http_proxy, open_wireless_settings, put_http_proxy, set_network_dns,
};
use crate::adb::{AproxResult, Bridge, CommandExecutor};
use crate::report::Reporter;
use log::debug;

/// Value written to `http_proxy` to disable the proxy.
pub const UNSET_PROXY: &str = ":0";
/// Resolvers restored by `clear`.
pub const FALLBACK_DNS: [&str; 2] = ["8.8.8.8", "8.8.4.4"];

pub const PROXY_SET: &str = "Local proxy has been set up";
pub const DNS_SET: &str = "Local DNS has been set up";
pub const PROXY_CLEARED: &str = "Cleared local proxy settings!!";
pub const PROXY_NOT_CONFIGURED: &str = "Local proxy is not configured...";
pub const DNS_CLEARED: &str = "Cleared local DNS settings!!";

/// True when `settings get global http_proxy` printed one of the unset
/// sentinels (`null` or `:0`).
pub fn is_unset_proxy(value: &str) -> bool {
    matches!(value.trim(), "null" | UNSET_PROXY)
}

/// Opens the Wi-Fi settings screen on the device.
pub async fn manual<E: CommandExecutor>(
    bridge: &Bridge<E>,
    out: &mut impl Reporter,
) -> AproxResult<()> {
    let output = bridge.shell(&open_wireless_settings()).await?;
    if output.is_failure() {
        out.error(&output.error_text());
        return Ok(());
    }
    if !output.stdout.is_empty() {
        out.plain(&output.output_text());
    }
    Ok(())
}

/// Sets the global HTTP proxy to `addr` (`host:port`).
pub async fn proxy<E: CommandExecutor>(
    bridge: &Bridge<E>,
    addr: &str,
    out: &mut impl Reporter,
) -> AproxResult<()> {
    let output = bridge.shell(&put_http_proxy(addr)).await?;
    if output.is_failure() {
        out.error(&output.error_text());
        return Ok(());
    }
    out.info(PROXY_SET);
    Ok(())
}

/// Points the default network's resolver at `addr`. Needs root.
pub async fn dns<E: CommandExecutor>(
    bridge: &Bridge<E>,
    addr: &str,
    out: &mut impl Reporter,
) -> AproxResult<()> {
    let network_id = match bridge.network_id().await {
        Ok(id) => id,
        Err(e) => {
            out.error(&e.summary());
            return Ok(());
        }
    };
    let output = bridge.shell(&set_network_dns(&network_id, &[addr])).await?;
    if output.is_failure() {
        out.error(&output.error_text());
        return Ok(());
    }
    if output.stdout.is_empty() {
        out.info(DNS_SET);
    } else {
        out.info(&output.output_text());
    }
    Ok(())
}

/// Unsets the proxy if one is configured, then restores the public DNS
/// resolvers when the network identifier can be read.
///
/// A failure to read the identifier (no root, no device) ends the command
/// quietly. Failing to write either setting is returned as an error.
pub async fn clear<E: CommandExecutor>(
    bridge: &Bridge<E>,
    out: &mut impl Reporter,
) -> AproxResult<()> {
    let current = bridge.shell(&get_http_proxy()).await?;
    if current.is_failure() {
        out.error(&current.error_text());
        return Ok(());
    }

    if is_unset_proxy(&current.stdout) {
        out.error(PROXY_NOT_CONFIGURED);
    } else {
        bridge.shell_checked(&put_http_proxy(UNSET_PROXY)).await?;
        out.info(PROXY_CLEARED);
    }

    let network_id = match bridge.network_id().await {
        Ok(id) => id,
        Err(e) => {
            debug!("Skipping DNS reset: {e}");
            return Ok(());
        }
    };
    bridge
        .shell_checked(&set_network_dns(&network_id, &FALLBACK_DNS))
        .await?;
    out.info(DNS_CLEARED);
    Ok(())
}
