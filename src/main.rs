use crate::api::env::UMPIRE_BASE_URL;
use crate::api::{HttpBackend, MapBackend};
use crate::app_context::PageContext;
use crate::cli::{Args, Command, MapOutput};
use crate::controllers::{
    LocationActionController, MapRefreshed, MyLocationController, UploadController,
};
use crate::dom::ids::MAP_CONTAINER;
use crate::dom::{Document, Element, InMemoryDocument, SelectedFile};
use crate::geolocation::{
    Denied, FixedGeolocator, Geolocator, InvalidSpread, JitterGeolocator, Unsupported,
};
use crate::navigation::History;
use crate::notify::AlertLog;
use crate::page::Page;
use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

mod api;
mod app_context;
mod cli;
mod controllers;
mod dom;
mod geolocation;
mod logging;
mod navigation;
mod notify;
mod page;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args);
    warn_if_env_var_is_missing!(UMPIRE_BASE_URL, "Using the `--base-url` value.");

    let alerts = AlertLog::new();
    let outcome = run(args, alerts.clone()).await;
    for message in alerts.messages() {
        eprintln!("alert: {message}");
    }
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "Interaction failed.");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, alerts: AlertLog) -> Result<(), Box<dyn Error>> {
    let backend = HttpBackend::new(args.base_url.clone(), args.request_timeout())?;
    tracing::info!(base_url = %backend.base_url(), "Initialized HTTP backend.");
    let history = History::new();

    let page = match &args.command {
        Command::ShowTerminals(_) | Command::ShowStops(_) => Page::Home,
        Command::LocateMe(_) => Page::Travel,
        Command::Upload { .. } | Command::UploadDb { .. } => Page::Optimize,
    };
    let document = page.skeleton();
    let context = PageContext {
        document: document.clone(),
        backend: Arc::new(backend),
        geolocator: geolocator(&args)?,
        notifier: Arc::new(alerts),
        navigator: Arc::new(history.clone()),
    };

    match &args.command {
        Command::ShowTerminals(output) | Command::ShowStops(output) => {
            let controller = LocationActionController::bind(context)
                .ok_or("The home page is missing its map controls.")?
                .with_position_options(args.position_options());
            let refreshed = if matches!(args.command, Command::ShowTerminals(_)) {
                controller.show_terminals().await?
            } else {
                controller.show_stops().await?
            };
            emit_map(&document, refreshed, output).await?;
        }
        Command::LocateMe(output) => {
            let controller = MyLocationController::bind(context)
                .ok_or("The travel page is missing its map controls.")?
                .with_position_options(args.position_options());
            let refreshed = controller.show_my_location().await?;
            emit_map(&document, refreshed, output).await?;
        }
        Command::Upload { file, vehicles } => {
            select_file(&document, file, vehicles.as_deref()).await?;
            let navigated = UploadController::bind(context)
                .submit_file_upload()
                .await?;
            tracing::info!(filename = %navigated.result.filename, "Upload accepted.");
            println!("{}", navigated.target);
        }
        Command::UploadDb { vehicles } => {
            document
                .insert(dom::ids::DATABASE_VEHICLES_INPUT)
                .set_value(vehicles);
            let navigated = UploadController::bind(context)
                .submit_database_upload()
                .await?;
            tracing::info!(filename = %navigated.result.filename, "Upload accepted.");
            println!("{}", navigated.target);
        }
    }

    if let Some(location) = history.current() {
        tracing::debug!(%location, "Final browser location.");
    }
    Ok(())
}

fn geolocator(args: &Args) -> Result<Arc<dyn Geolocator>, InvalidSpread> {
    if args.no_geolocation {
        return Ok(Arc::new(Unsupported));
    }
    if args.deny_geolocation {
        return Ok(Arc::new(Denied));
    }
    Ok(match args.fixed_position() {
        Some(position) => Arc::new(FixedGeolocator::new(position)),
        None => Arc::new(JitterGeolocator::around_accra().with_spread(args.jitter)?),
    })
}

async fn select_file(
    document: &InMemoryDocument,
    path: &Path,
    vehicles: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    document
        .insert(dom::ids::FILE_INPUT)
        .select_file(SelectedFile::new(name, bytes));
    document
        .insert(dom::ids::UPLOAD_VEHICLES_INPUT)
        .set_value(vehicles.unwrap_or_default());
    Ok(())
}

/// Writes out what the map container shows after the refresh.
async fn emit_map(
    document: &InMemoryDocument,
    refreshed: MapRefreshed,
    output: &MapOutput,
) -> Result<(), Box<dyn Error>> {
    tracing::info!(
        action = %refreshed.action,
        lat = refreshed.position.latitude,
        lng = refreshed.position.longitude,
        terminals = refreshed.response.terminals.len(),
        stops = refreshed.response.stops.len(),
        "Map refreshed.",
    );
    let html = document
        .element(MAP_CONTAINER)
        .map(|map| map.inner_html())
        .ok_or("The map container disappeared.")?;
    match &output.out {
        Some(path) => tokio::fs::write(path, html).await?,
        None => println!("{html}"),
    }
    Ok(())
}
