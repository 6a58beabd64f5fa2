use plume_shell::shell::ShellCommand;
use plume_shell::{boot, cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // An explicit --config that fails to load is fatal; the default path
    // falls back to defaults with a warning once logging is up.
    let (config, config_err) = match &args.config {
        Some(path) => match plume_config::load_from_path(path) {
            Ok(config) => (config, None),
            Err(e) => {
                eprintln!("plume: cannot load config: {e}");
                std::process::exit(1);
            }
        },
        None => match plume_config::load_config() {
            Ok(config) => (config, None),
            Err(e) => (plume_config::PlumeConfig::default(), Some(e)),
        },
    };

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "plume=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Plume v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_err {
        tracing::warn!("config load failed, using defaults: {e}");
    }

    // The shell must not continue without a core.
    let core = match boot::locate_core(args.core.as_deref(), &config) {
        Ok(path) => path,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };
    tracing::info!(core = %core.display(), "core binary resolved");

    let booted = match boot::boot(&core, &config, &args.files) {
        Ok(booted) => booted,
        Err(e) => {
            tracing::error!("startup failed: {e}");
            std::process::exit(1);
        }
    };

    // Ctrl-C becomes a regular shutdown command on the coordinator queue.
    let commands = booted.commands.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = commands.send(ShellCommand::Shutdown).await;
        }
    });

    booted.shell.run(booted.inbound, booted.command_rx).await;
    booted.channel.shutdown().await;
    tracing::info!("shutdown complete");
}
