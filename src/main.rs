use std::io;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use officeroute::catalog::LocationCatalog;
use officeroute::cli::{Cli, Command, OutputFormat, RouteArgs};
use officeroute::config::{CatalogConfig, Config};
use officeroute::directions::OrsRouteClient;
use officeroute::geo::GeoPoint;
use officeroute::location::StaticLocationProvider;
use officeroute::logging::init_tracing;
use officeroute::presenter::{present, JsonPresenter, MapPresenter, MapScene, TextPresenter};
use officeroute::workflow::{ErrorKind, OriginSource, RouteWorkflow, Severity};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    let catalog = load_catalog(&config.catalog, cli.strict)?;

    match cli.command {
        Command::Offices => list_offices(&catalog),
        Command::Show { index, format } => {
            if let Some(index) = index {
                if catalog.get(index).is_none() {
                    bail!("No office at index {} ({} offices)", index, catalog.len());
                }
            }
            presenter_for(format).render(&MapScene::catalog(&catalog, index))?;
            Ok(())
        }
        Command::Route(args) => route(&config, &catalog, args).await,
    }
}

fn load_catalog(config: &CatalogConfig, strict: bool) -> Result<LocationCatalog> {
    let result = match &config.path {
        Some(path) => LocationCatalog::from_path(path),
        None => LocationCatalog::bundled(),
    };
    if strict {
        return result.context("Failed to load office catalog");
    }
    Ok(LocationCatalog::load_or_empty(result))
}

fn list_offices(catalog: &LocationCatalog) -> Result<()> {
    if catalog.is_empty() {
        println!("No offices available");
        return Ok(());
    }
    for (index, office) in catalog.locations().iter().enumerate() {
        println!("{:>3}  {:<24} {}", index, office.name, office.point);
    }
    Ok(())
}

fn presenter_for(format: OutputFormat) -> Box<dyn MapPresenter> {
    match format {
        OutputFormat::Text => Box::new(TextPresenter::new(io::stdout())),
        OutputFormat::Json => Box::new(JsonPresenter::new(io::stdout())),
    }
}

async fn route(config: &Config, catalog: &LocationCatalog, args: RouteArgs) -> Result<()> {
    let destination = catalog
        .find(&args.to)
        .ok_or_else(|| anyhow!("Unknown office '{}'", args.to))?
        .point;

    let chosen_origin = match &args.from {
        Some(name) => Some(
            catalog
                .find(name)
                .ok_or_else(|| anyhow!("Unknown office '{}'", name))?
                .point,
        ),
        None => None,
    };

    let position = match args.at {
        Some(point) => Some(point),
        None => config
            .location
            .fixed_position
            .map(GeoPoint::from_lon_lat)
            .transpose()?,
    };
    if chosen_origin.is_none() && args.fixed.is_none() && position.is_none() {
        bail!("No origin: pass --from, --at or --fixed, or set [location].fixed_position");
    }

    let client = OrsRouteClient::from_config(&config.directions)?;
    tracing::debug!(endpoint = %client.endpoint(), "Directions client ready");

    let source = match (chosen_origin, args.fixed) {
        (Some(_), _) => OriginSource::Selected,
        (None, Some(origin)) => OriginSource::Fixed(origin),
        (None, None) => OriginSource::Device,
    };
    let provider = Arc::new(StaticLocationProvider::new(position, config.location.permission()));
    let workflow = RouteWorkflow::start(
        source,
        provider,
        Arc::new(client),
        config.location.poll_interval(),
    )
    .await;

    if let Some(origin) = chosen_origin {
        workflow.select_origin(origin)?;
    }
    workflow.select_destination(destination);

    let mut presenter = presenter_for(args.format);
    if args.watch {
        tokio::select! {
            result = present(workflow.subscribe(), &mut *presenter) => result?,
            signal = tokio::signal::ctrl_c() => signal?,
        }
        workflow.shutdown();
        return Ok(());
    }

    let state = workflow.settled().await;
    workflow.shutdown();
    presenter.render(&MapScene::from_state(&state))?;

    outcome(state.last_error)
}

/// Expected outcomes such as an unreachable office are carried by the notice.
fn outcome(last_error: Option<ErrorKind>) -> Result<()> {
    match last_error {
        Some(error) if error.severity() != Severity::Info => {
            Err(anyhow!(error.details()).context(error.user_message()))
        }
        _ => Ok(()),
    }
}
