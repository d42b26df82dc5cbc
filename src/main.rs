//! shopdesk — server entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Resolve effective log level (CLI `-v` flags > RUST_LOG > config)
//!   4. Init logger once
//!   5. Build the completion gateway and chat service
//!   6. Spawn Ctrl-C → shutdown signal watcher
//!   7. Serve HTTP until shutdown

use tokio_util::sync::CancellationToken;
use tracing::info;

use shopdesk::bootstrap::logger;
use shopdesk::chat::ChatService;
use shopdesk::llm::CompletionGateway;
use shopdesk::server::{self, AppState};
use shopdesk::{config, error};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), error::AppError> {
    // Load .env if present; the file is optional.
    let _ = dotenvy::dotenv();

    let args = parse_cli_args();

    let config = config::load(args.config_path.as_deref())?;

    let effective_log_level = args.log_level.unwrap_or(config.log_level.as_str());
    logger::init(effective_log_level, args.log_level.is_some())?;

    info!(
        bind = %config.bind,
        profile_path = %config.profile_path.display(),
        provider = %config.llm.provider,
        model = %config.llm.model,
        timeout_seconds = config.llm.timeout_seconds,
        api_key_set = config.llm_api_key.is_some(),
        effective_log_level = %effective_log_level,
        "config loaded"
    );

    if !config.profile_path.exists() {
        info!(
            profile_path = %config.profile_path.display(),
            "profile document not found, serving the built-in demo profile"
        );
    }

    let gateway = CompletionGateway::new(&config.llm, config.llm_api_key.clone())?;
    let state = AppState::new(ChatService::new(config.profile_path.clone(), gateway));

    // Shared shutdown token, cancelled by Ctrl-C.
    let shutdown = CancellationToken::new();
    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received, initiating shutdown");
            ctrlc_token.cancel();
        }
    });

    server::serve(&config.bind, state, shutdown).await
}

struct CliArgs {
    log_level: Option<&'static str>,
    config_path: Option<String>,
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut config_path = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: shopdesk [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -f, --config <PATH>        Path to configuration file (default: config/default.toml)");
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "-f" | "--config" => {
                if let Some(path) = iter.next() {
                    config_path = Some(path);
                } else {
                    eprintln!("error: -f/--config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    //   -v      → warn
    //   -vv     → info
    //   -vvv    → debug  (prompt composition, upstream request summaries)
    //   -vvvv+  → trace  (full upstream payloads)
    let log_level = match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("debug"),
        _ => Some("trace"),
    };

    CliArgs { log_level, config_path }
}
