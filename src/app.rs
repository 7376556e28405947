use crate::adb::{AproxResult, Bridge, BridgeLocator, CommandExecutor};
use crate::args::{Action, Invocation};
use crate::report::Reporter;
use crate::settings;

/// Runs one parsed invocation: prints help, or locates adb once and runs the
/// selected setting command through `executor`.
pub async fn execute<E: CommandExecutor>(
    invocation: Invocation,
    executor: E,
    out: &mut impl Reporter,
) -> AproxResult<()> {
    match invocation {
        Invocation::Help(text) => {
            out.plain(text.trim_end());
            Ok(())
        }
        Invocation::Run { action, adb, .. } => {
            let path = BridgeLocator::new(adb).locate()?;
            let bridge = Bridge::new(path, executor);
            dispatch(&action, &bridge, out).await
        }
    }
}

pub async fn dispatch<E: CommandExecutor>(
    action: &Action,
    bridge: &Bridge<E>,
    out: &mut impl Reporter,
) -> AproxResult<()> {
    match action {
        Action::Manual => settings::manual(bridge, out).await,
        Action::Proxy { proxy_addr } => settings::proxy(bridge, proxy_addr, out).await,
        Action::Dns { dns_addr } => settings::dns(bridge, dns_addr, out).await,
        Action::Clear => settings::clear(bridge, out).await,
    }
}
