//! workshop-check CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use workshop_check::cli::{Cli, Command, ValidateCommand};
use workshop_check::probe::resolve_interpreter;
use workshop_check::ui::create_ui;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, keeping the report free of log lines
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("workshop_check=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("workshop_check=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("workshop-check starting with args: {:?}", cli);

    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let interpreter = resolve_interpreter(cli.python.as_deref(), |key: &str| std::env::var(key));

    let mut ui = create_ui(cli.no_color);
    let command = ValidateCommand::new(&project_root, interpreter, cli.env_file.clone());

    let result = command.execute(&mut ui);
    ExitCode::from(result.exit_code as u8)
}
