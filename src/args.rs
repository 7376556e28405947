use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "aprox")]
#[command(version = env!("APROX_VERSION_DISPLAY"))]
#[command(long_version = concat!(
    env!("APROX_VERSION_DISPLAY"),
    "\nCopyright (c) ",
    env!("APROX_BUILD_YEAR"),
    " aprox contributors"
))]
#[command(about = "Android PROXy setting tool", long_about = None)]
pub struct Args {
    /// Path to the adb executable (default: platform-tools of the Android SDK in your home directory)
    #[arg(long, global = true, env = "APROX_ADB", value_name = "PATH")]
    pub adb: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Action {
    /// Access WiFi settings page on GUI
    #[command(visible_alias = "m")]
    Manual,

    /// Set local proxy server
    #[command(visible_alias = "p")]
    Proxy {
        /// local proxy address
        proxy_addr: String,
    },

    /// Set local DNS server (rooted device only)
    #[command(visible_alias = "d")]
    Dns {
        /// local DNS address
        dns_addr: String,
    },

    /// Clear local proxy/DNS setting
    #[command(visible_aliases = ["c", "cl"])]
    Clear,
}

/// What the front end decided to do with the command line.
#[derive(Debug)]
pub enum Invocation {
    /// No usable subcommand: show this help text and exit successfully.
    Help(String),
    Run {
        action: Action,
        adb: Option<PathBuf>,
        debug: bool,
    },
}

impl Invocation {
    pub fn debug(&self) -> bool {
        matches!(self, Invocation::Run { debug: true, .. })
    }
}

impl Args {
    /// Parses `argv`. A missing or unknown subcommand becomes
    /// [`Invocation::Help`]; other problems (missing address, `--help`,
    /// `--version`) are left to clap.
    pub fn invocation<I, T>(argv: I) -> Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(argv) {
            Ok(Args {
                action: Some(action),
                adb,
                debug,
            }) => Ok(Invocation::Run { action, adb, debug }),
            Ok(Args { action: None, .. }) => Ok(Invocation::Help(help_text())),
            Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
                Ok(Invocation::Help(help_text()))
            }
            Err(e) => Err(e),
        }
    }
}

pub fn help_text() -> String {
    Args::command().render_help().to_string()
}
