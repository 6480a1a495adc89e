//! Starts an ocwm session.

use clap::{Parser, ValueEnum};
use ocwm::ConfigFile;
use ocwm_core::{HeadlessDisplayServer, Manager};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// One virtual output, no real clients.
    Headless,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct OcwmCli {
    /// The backend used to run ocwm on.
    #[arg(short, long, value_enum, default_value_t = Backend::Headless)]
    backend: Backend,

    /// Configuration file to use instead of searching the default locations.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = OcwmCli::parse();
    ocwm::utils::log::setup_logging();
    tracing::info!("ocwm {} booting...", ocwm_core::VERSION);

    let config = ConfigFile::new(cli.config);
    let manager = match cli.backend {
        Backend::Headless => {
            tracing::info!("Loading headless backend");
            Manager::<ConfigFile, HeadlessDisplayServer>::new(config)
        }
    };
    let manager = match manager {
        Ok(manager) => manager,
        Err(err) => {
            tracing::error!("Could not acquire the {:?} backend: {}", cli.backend, err);
            return ExitCode::FAILURE;
        }
    };

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(err) => {
            tracing::error!("Couldn't init Tokio runtime: {}", err);
            return ExitCode::FAILURE;
        }
    };

    manager.register_child_hook();
    manager.register_quit_hook();
    match rt.block_on(manager.start_event_loop()) {
        Ok(()) => {
            tracing::info!("Completed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Completed with event loop error: {}", err);
            ExitCode::FAILURE
        }
    }
}
