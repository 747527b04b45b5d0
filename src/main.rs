//! campusboard - Entry Point

use campusboard::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides, ConfigError, KeyBindings,
};
use campusboard::logging::LoggingError;
use campusboard::model::{InstitutionRegistry, RegistryError};
use campusboard::source::{ContentFetcher, DirectoryLoader};
use campusboard::state::AppState;
use campusboard::submission::JsonlApplicationSink;
use campusboard::view::{BoardServices, ColorConfig, TuiError};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

/// campusboard - rotating school notice board for the terminal
#[derive(Parser, Debug)]
#[command(name = "campusboard")]
#[command(version)]
#[command(about = "Rotating multi-institution school notice board for the terminal")]
pub struct Args {
    /// Institution code to open (defaults to the first registered)
    #[arg(short, long)]
    pub institution: Option<String>,

    /// Directory holding institutions.toml and per-institution content
    #[arg(long)]
    pub content_dir: Option<PathBuf>,

    /// Open a news article by id once content has loaded
    #[arg(short, long)]
    pub article: Option<String>,

    /// Start with every surface paused
    #[arg(long)]
    pub paused: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("institutions: {0}")]
    Registry(#[from] RegistryError),

    #[error("logging: {0}")]
    Logging(#[from] LoggingError),

    #[error("terminal: {0}")]
    Terminal(#[from] TuiError),
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file);
        let with_env = apply_env_overrides(merged);
        apply_cli_overrides(
            with_env,
            CliOverrides {
                institution: args.institution.clone(),
                content_dir: args.content_dir.clone(),
                paused: args.paused,
                no_color: args.no_color,
            },
        )
    };

    campusboard::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let registry = InstitutionRegistry::load(&config.content_dir)?;
    info!(institutions = registry.len(), "Institution registry loaded");

    let mut app_state = AppState::new(
        registry,
        config.surface_configs(),
        config.institution.as_deref(),
        config.start_paused,
        config.cell_width,
    );
    if let Some(id) = args.article {
        app_state.request_article(id);
    }

    let services = BoardServices {
        fetcher: ContentFetcher::new(Arc::new(DirectoryLoader::new(config.content_dir.clone()))),
        sink: Arc::new(JsonlApplicationSink::new(config.applications_file.clone())),
        key_bindings: KeyBindings::default(),
        color: ColorConfig::from_env_and_args(!config.color),
    };

    campusboard::view::run_board(app_state, services)?;
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("campusboard: {e}");
            ExitCode::FAILURE
        }
    }
}
