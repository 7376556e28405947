// Core bridge types: captured output, device commands and the executor seam
use super::error::AproxResult;
use std::fmt;
use std::path::Path;

const DEFAULT_NETWORK_LABEL: &str = "Default network: ";

/// Text captured from one finished bridge invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn from_bytes(stdout: &[u8], stderr: &[u8]) -> Self {
        Self::new(
            String::from_utf8_lossy(stdout),
            String::from_utf8_lossy(stderr),
        )
    }

    /// A command failed iff it wrote anything to stderr. The exit status is
    /// never consulted.
    pub fn is_failure(&self) -> bool {
        !self.stderr.is_empty()
    }

    /// stderr with line breaks removed, as shown to the operator.
    pub fn error_text(&self) -> String {
        strip_line_breaks(&self.stderr)
    }

    /// stdout with line breaks removed, as shown to the operator.
    pub fn output_text(&self) -> String {
        strip_line_breaks(&self.stdout)
    }
}

fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// Argument list for the device shell. Arguments are kept raw and only
/// quoted when handed to the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCommand {
    args: Vec<String>,
}

impl DeviceCommand {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Wraps this command in `su -c '<script>'` so it runs as root.
    pub fn privileged(self) -> Self {
        let script = self.script();
        Self::new(["su", "-c"]).arg(script)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The command line as the device shell parses it.
    pub fn script(&self) -> String {
        self.args
            .iter()
            .map(|a| shell_quote(a))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Arguments for the bridge executable: `shell` followed by one quoted
    /// token per device argument.
    pub fn bridge_args(&self) -> Vec<String> {
        std::iter::once("shell".to_string())
            .chain(self.args.iter().map(|a| shell_quote(a)))
            .collect()
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.script())
    }
}

/// Quotes `s` for a POSIX shell. Strings made only of characters that are
/// never special pass through unchanged; anything else is single-quoted.
pub fn shell_quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    let safe = s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c));
    if safe {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r#"'"'"'"#))
}

/// Pulls the token following `Default network: ` out of `dumpsys netd`
/// output. The token runs to the end of its line.
pub fn parse_default_network(dump: &str) -> Option<String> {
    let start = dump.find(DEFAULT_NETWORK_LABEL)? + DEFAULT_NETWORK_LABEL.len();
    let rest = &dump[start..];
    let end = rest.find('\n').unwrap_or(rest.len());
    let id = rest[..end].trim();
    (!id.is_empty()).then(|| id.to_string())
}

// Spawns an external program and captures its output. Implemented by the real
// process runner and by test doubles.
#[allow(async_fn_in_trait)]
pub trait CommandExecutor {
    async fn run(&self, program: &Path, args: &[String]) -> AproxResult<CommandOutput>;
}

impl<T: CommandExecutor> CommandExecutor for &T {
    async fn run(&self, program: &Path, args: &[String]) -> AproxResult<CommandOutput> {
        (**self).run(program, args).await
    }
}
