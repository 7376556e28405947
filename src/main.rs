use aprox::adb::ProcessExecutor;
use aprox::app;
use aprox::args::Args;
use aprox::report::{self, Terminal};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let invocation = match Args::invocation(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(e) => e.exit(),
    };
    init_logging(invocation.debug());

    let mut terminal = Terminal::new();
    match app::execute(invocation, ProcessExecutor, &mut terminal).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            report::fatal(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

// RUST_LOG wins over --debug when both are given.
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
