//! CLI entry point - the composition root.
//!
//! This is the only place where configuration is assembled and handlers
//! are dispatched. All failures end here: launcher errors map to sysexits
//! codes, a failing external tool maps to exit 1, and anything unexpected
//! is logged without crashing the process.

use clap::Parser;

use simplaunch_cli::{Cli, CliError, Commands, build_config, handlers};
use simplaunch_core::ToolInvocation;
use simplaunch_runtime::Outcome;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables before clap reads SIMPLAUNCH_* overrides
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match dispatch(cli).await {
        Ok(Outcome::Success) => 0,
        Ok(_) => 1,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn dispatch(cli: Cli) -> Result<Outcome, CliError> {
    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command()
            .print_help()
            .map_err(|e| CliError::Io(e.to_string()))?;
        return Ok(Outcome::Success);
    };

    match command {
        Commands::Run {
            input,
            output,
            ratio,
            normal_weight,
            uv_weight,
            boundary_weight,
            no_stage,
            config,
        } => {
            let mut launcher_config = build_config(cli.config.as_deref(), &config)?;
            if no_stage {
                launcher_config.stage_dependencies = false;
            }

            let mut builder = ToolInvocation::builder(input, output)
                .ratio(ratio)
                .normal_weight(normal_weight)
                .uv_weight(uv_weight);
            if let Some(weight) = boundary_weight {
                builder = builder.boundary_weight(weight);
            }
            let invocation = builder.build()?;

            handlers::run::execute(launcher_config, invocation).await
        }
        Commands::Stage { config } => {
            let launcher_config = build_config(cli.config.as_deref(), &config)?;
            handlers::stage::execute(launcher_config)?;
            Ok(Outcome::Success)
        }
        Commands::Paths { config } => {
            let launcher_config = build_config(cli.config.as_deref(), &config)?;
            handlers::paths::execute(launcher_config)?;
            Ok(Outcome::Success)
        }
    }
}
