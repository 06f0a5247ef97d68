//! CLI entrypoint for termgate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use termgate_application::{
    CategoryCatalog, ConditionConfigStore, ConfigureConditionInput, ConfigureConditionUseCase,
    ContextProvider, ContextSettings, DecisionLogger, EntityStore, EvaluateConditionInput,
    EvaluateConditionUseCase, NoDecisionLog, NoRoute, RouteEntityResolver, RouteMatchPort,
};
use termgate_domain::CategoryId;
use termgate_infrastructure::{
    ConfigLoader, CurrentRoute, FileConfig, FileOutputFormat, FixtureData,
    JsonConditionConfigStore, JsonlDecisionLogger, RouteTable,
};
use termgate_presentation::{Cli, Command, ConsoleFormatter, JsonFormatter, OutputFormat, OutputFormatter};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Adapters shared by every subcommand
struct Site {
    settings: ContextSettings,
    store: Arc<dyn EntityStore>,
    catalog: Arc<dyn CategoryCatalog>,
    routes: RouteTable,
    conditions: Arc<dyn ConditionConfigStore>,
    decisions: Arc<dyn DecisionLogger>,
}

impl Site {
    fn resolver(&self, route_match: Arc<dyn RouteMatchPort>) -> Arc<RouteEntityResolver> {
        Arc::new(
            RouteEntityResolver::new(self.store.clone(), route_match)
                .with_settings(self.settings.clone()),
        )
    }

    fn resolver_for_path(&self, path: &str) -> Arc<RouteEntityResolver> {
        let current = CurrentRoute::from_path(&self.routes, path);
        match current.route() {
            Some(route) => info!("Path {} matched route {}", path, route.name),
            None => info!("Path {} matched no route", path),
        }
        self.resolver(Arc::new(current))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Command::ShowConfig = cli.command {
        for line in ConfigLoader::describe_config_sources() {
            println!("{}", line);
        }
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let formatter: Box<dyn OutputFormatter> = match output_format(&cli, &config) {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    info!("Starting termgate");

    // === Dependency Injection ===
    let site = build_site(&cli, &config)?;

    let output = match cli.command {
        Command::Resolve { path } => {
            let resolver = site.resolver_for_path(&path);
            let name = resolver.settings().name.clone();
            let contexts = resolver.runtime_contexts(&[name.as_str()]);
            let context = contexts
                .get(&name)
                .ok_or_else(|| anyhow!("Context '{}' was not provided", name))?;
            formatter.format_context(context)
        }
        Command::Contexts => {
            let resolver = site.resolver(Arc::new(NoRoute));
            formatter.format_contexts(&resolver.available_contexts())
        }
        Command::Options => {
            let options = site.catalog.options().context("Failed to read category catalog")?;
            formatter.format_options(&options)
        }
        Command::Configure {
            instance,
            bundles,
            negate,
        } => {
            let bundles: Vec<CategoryId> = bundles.into_iter().map(CategoryId::from).collect();
            let input = ConfigureConditionInput::new(instance, bundles).with_negate(negate);
            let result = ConfigureConditionUseCase::new(site.catalog.clone(), site.conditions.clone())
                .execute(input)?;
            formatter.format_configured(&result)
        }
        Command::Evaluate { instance, path } => {
            let provider: Arc<dyn ContextProvider> = site.resolver_for_path(&path);
            let outcome = EvaluateConditionUseCase::new(
                provider,
                site.catalog.clone(),
                site.conditions.clone(),
            )
            .with_settings(site.settings.clone())
            .with_logger(site.decisions.clone())
            .execute(EvaluateConditionInput::new(instance))?;
            formatter.format_outcome(&outcome)
        }
        Command::ShowConfig => bail!("show-config is handled before configuration is loaded"),
    };

    println!("{}", output.trim_end());

    Ok(())
}

/// The command line wins over the config file
fn output_format(cli: &Cli, config: &FileConfig) -> OutputFormat {
    cli.output.unwrap_or(match config.output.format {
        Some(FileOutputFormat::Json) => OutputFormat::Json,
        Some(FileOutputFormat::Text) | None => OutputFormat::Text,
    })
}

fn build_site(cli: &Cli, config: &FileConfig) -> Result<Site> {
    let fixtures = load_fixtures(&config.data.fixtures)?;
    let routes = fixtures
        .route_table()
        .context("Invalid route in fixture data")?;

    let decision_log = cli
        .decision_log
        .as_ref()
        .or(config.logging.decision_log.as_ref());
    let decisions: Arc<dyn DecisionLogger> = match decision_log {
        Some(path) => match JsonlDecisionLogger::new(path) {
            Some(logger) => Arc::new(logger),
            None => Arc::new(NoDecisionLog),
        },
        None => Arc::new(NoDecisionLog),
    };

    Ok(Site {
        settings: config.context_settings(),
        store: Arc::new(fixtures.entity_store()),
        catalog: Arc::new(fixtures.catalog()),
        routes,
        conditions: Arc::new(JsonConditionConfigStore::new(&config.data.conditions)),
        decisions,
    })
}

fn load_fixtures(path: &Path) -> Result<FixtureData> {
    if !path.exists() {
        warn!(
            "Fixture file {} not found, starting with an empty site",
            path.display()
        );
        return Ok(FixtureData::default());
    }
    FixtureData::load(path).with_context(|| format!("Failed to load fixtures from {}", path.display()))
}
