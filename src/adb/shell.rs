use super::error::{AproxError, AproxResult};
use super::types::{CommandExecutor, CommandOutput};
use log::debug;
use std::path::Path;
use tokio::process::Command;

/// Runs the bridge as a real child process and waits for it to exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl CommandExecutor for ProcessExecutor {
    async fn run(&self, program: &Path, args: &[String]) -> AproxResult<CommandOutput> {
        debug!("Running {} {}", program.display(), args.join(" "));
        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|source| AproxError::Io {
                program: program.display().to_string(),
                source,
            })?;
        debug!("{} exited with {}", program.display(), output.status);
        Ok(CommandOutput::from_bytes(&output.stdout, &output.stderr))
    }
}
