mod app_state;
mod cli;
mod render;
mod repl;
mod typing;

use std::path::PathBuf;
use std::process::ExitCode;

use tokio::io::BufReader;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use agentchat_client::{AgentClient, ServiceConfig};
use agentchat_common::{ChatError, ConfigError};
use agentchat_config::{ChatConfig, LoadOptions};

use app_state::ChatController;

const DEFAULT_LOG_DIRECTIVE: &str = "agentchat=info";

/// Map the resolved config onto the client's settings.
fn service_config(config: &ChatConfig) -> Result<ServiceConfig, ConfigError> {
    let base_url = config
        .agent
        .base_url()
        .ok_or_else(|| ConfigError::MissingEndpoint(agentchat_config::ENDPOINT_ENV.into()))?;

    Ok(ServiceConfig::new(base_url)
        .with_app_name(&config.agent.app_name)
        .with_user_id(&config.agent.user_id)
        .with_connect_timeout(config.timeouts.connect())
        .with_session_timeout(config.timeouts.session())
        .with_turn_timeout(config.timeouts.turn()))
}

/// `--log-level` wins, then the config file, then the default.
fn log_directive(cli_level: Option<&str>, config: Option<&ChatConfig>) -> String {
    match (cli_level, config) {
        (Some(level), _) => format!("agentchat={level}"),
        (None, Some(config)) => format!("agentchat={}", config.logging.level.as_str()),
        (None, None) => DEFAULT_LOG_DIRECTIVE.to_string(),
    }
}

fn init_logging(directive: &str) {
    let directive: Result<Directive, _> = directive
        .parse()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Log the failure and pick the exit status. Configuration problems
/// exit with 2 before any session is created.
fn report(err: &ChatError) -> ExitCode {
    match err {
        ChatError::Config(e) => {
            tracing::error!("configuration error: {e}");
            eprintln!("error: {e}");
            eprintln!("The chat cannot start until this is fixed.");
            ExitCode::from(2)
        }
        ChatError::Io(e) => {
            tracing::error!("chat loop error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: cli::Args, dotenv: Option<PathBuf>) -> Result<(), ChatError> {
    let loaded = agentchat_config::load_config(&LoadOptions {
        path: args.config.clone(),
        endpoint: args.endpoint.clone(),
    });
    init_logging(&log_directive(args.log_level.as_deref(), loaded.as_ref().ok()));

    tracing::info!("agentchat v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv {
        tracing::debug!("loaded environment from {}", path.display());
    }

    let mut config = loaded?;
    if args.no_typing {
        config.display.typing_effect = false;
    }

    let client = AgentClient::new(service_config(&config)?)?;
    tracing::info!(
        app = %config.agent.app_name,
        user = %config.agent.user_id,
        "agent service at {}",
        config.agent.endpoint.as_deref().unwrap_or_default()
    );

    let mut controller = ChatController::new(client);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    repl::run(&mut controller, &config.display, stdin, &mut stdout).await?;
    tracing::info!("shutdown complete");
    Ok(())
}

fn main() -> ExitCode {
    // Load .env before the runtime spawns its worker threads
    let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let dotenv = agentchat_config::load_dotenv(&agentchat_config::env::dotenv_candidates(
        Some(workspace_root.as_path()),
    ));

    let args = cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to start the async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args, dotenv)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}
