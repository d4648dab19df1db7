use clap::Parser;
use gadgets::app::application_lifecycle::ApplicationLifecycle;
use gadgets::{config, logger};
use std::path::PathBuf;

/// Terminal dialogs and validated input fields, demonstrated
#[derive(Parser, Debug)]
#[command(name = "gadgets")]
#[command(about = "Demo of reusable terminal dialogs with validated input")]
#[command(version)]
struct Args {
    /// Configuration file (defaults to config.toml in the working directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    config::init_config(args.config);
    let logging = config::get_config_or_default().logging();
    if let Err(e) = logger::setup_logger(logging, args.log_level.as_deref()) {
        eprintln!("Failed to initialize logger: {e}");
    }

    let mut model = ApplicationLifecycle::initialize()?;
    ApplicationLifecycle::setup_terminal(&mut model)?;
    let run_result = ApplicationLifecycle::run_application_loop(&mut model);
    ApplicationLifecycle::shutdown_application(model)?;
    run_result
}
