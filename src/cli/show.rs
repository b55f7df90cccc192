//! Show command implementation

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::terminal::{TerminalToasts, TerminalView};
use crate::cli::ShowArgs;
use crate::config::{DashboardConfig, LogFormat};
use crate::dashboard::{Dashboard, DashboardDeps, LoadOutcome};
use crate::notify::NotificationManager;
use crate::traces::HttpTraceFetcher;

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(args: &ShowArgs) -> anyhow::Result<DashboardConfig> {
    // Load from file if it exists, otherwise use defaults
    let mut config = if args.config.exists() {
        DashboardConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        DashboardConfig::default()
    };

    config = config.with_env_overrides();

    // CLI overrides (highest priority)
    if let Some(ref url) = args.url {
        config.api.base_url = url.clone();
    }
    if let Some(ref metric) = args.metric {
        config.dashboard.metric = metric.clone();
    }
    if let Some(ref metric) = args.model_metric {
        config.dashboard.model_metric = metric.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

/// Initialize tracing based on configuration. Logs go to stderr.
pub fn init_tracing(config: &crate::config::LoggingConfig) -> anyhow::Result<()> {
    let filter_str = crate::logging::build_filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    match config.format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.compact())
            .try_init()?,
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.pretty())
            .try_init()?,
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json())
            .try_init()?,
    }

    Ok(())
}

/// Build the HTTP trace source from config
pub fn build_fetcher(config: &DashboardConfig) -> HttpTraceFetcher {
    let fetcher = HttpTraceFetcher::new(config.api.base_url.clone());
    match config.api.bearer_token() {
        Some(token) => fetcher.with_bearer_token(token),
        None => fetcher,
    }
}

/// Main show command handler
pub async fn run_show(args: ShowArgs) -> anyhow::Result<()> {
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    init_tracing(&config.logging)?;
    tracing::debug!(?config, "Loaded configuration");

    let limit = args
        .limit
        .clone()
        .unwrap_or_else(|| config.dashboard.default_limit.to_string());

    let view = Arc::new(TerminalView::new(
        limit,
        config.dashboard.metric.clone(),
        config.dashboard.model_metric.clone(),
    ));
    let notifications =
        NotificationManager::new(Arc::new(TerminalToasts), config.notifications.clone());

    let dashboard = Dashboard::new(
        DashboardDeps {
            source: Arc::new(build_fetcher(&config)),
            view: view.clone(),
            charts: Arc::new(view.chart_factory()),
            notifier: Arc::new(notifications.clone()),
        },
        config.dashboard.clone(),
    );

    let outcome = dashboard.load().await;
    if let Some(page) = args.page {
        dashboard.go_to_page(page);
    }

    if args.json {
        let snapshot = dashboard.snapshot();
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize dashboard")?
        );
    } else {
        println!("{}", view.render());
    }

    notifications.dismiss_all();

    match outcome {
        LoadOutcome::Failed(reason) => Err(anyhow::anyhow!("Failed to load traces: {}", reason)),
        LoadOutcome::Loaded(_) | LoadOutcome::Rejected => Ok(()),
    }
}
