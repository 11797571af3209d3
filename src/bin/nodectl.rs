//! nodectl CLI Binary
//!
//! Command-line shell for administering a running oracle node.

use clap::Parser;
use nodectl::cli::{map_error, Cli, RunContext};
use nodectl::config::{ConfigLoader, ShellConfig};
use nodectl::error::ApiError;
use nodectl::logging::init_logging;
use nodectl::render::{JsonRenderer, Renderer, TableRenderer};
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => apply_cli_overrides(config, &cli),
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!(remote_node_url = %config.remote_node_url, "nodectl starting");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to start async runtime: {}", e);
            eprintln!("{}", map_error(&ApiError::Io(e)));
            process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run(&cli, &config)) {
        error!("Command failed: {}", e);
        eprintln!("{}", map_error(&e));
        process::exit(1);
    }
}

async fn run(cli: &Cli, config: &ShellConfig) -> Result<(), ApiError> {
    let context = RunContext::new(config)?;
    let mut renderer: Box<dyn Renderer> = if cli.json {
        Box::new(JsonRenderer::new(std::io::stdout()))
    } else {
        Box::new(TableRenderer::new(std::io::stdout()))
    };
    context.execute(&cli.command, renderer.as_mut()).await
}

/// Flags win over every configuration source.
fn apply_cli_overrides(mut config: ShellConfig, cli: &Cli) -> ShellConfig {
    if let Some(ref url) = cli.remote_node_url {
        config.remote_node_url = url.clone();
    }
    if cli.insecure_skip_verify {
        config.insecure_skip_verify = true;
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.logging.format = format.clone();
    }
    config
}
