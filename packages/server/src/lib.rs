#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the callejero map.
//!
//! Serves the street-name engine to the `MapLibre` frontend: name
//! search, street detail (history panel content), and the selection
//! state machine, plus static frontend files. Both datasets are loaded
//! once at startup; if either fails to load the server stays up with
//! an empty catalog and reports the failure on `/api/health` — search
//! returns nothing and selection is a no-op instead of crashing.

mod handlers;

use std::path::Path;
use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use callejero_catalog::StreetCatalog;
use callejero_selection::SelectionController;

/// Shared application state.
///
/// The catalog is immutable after load and shared freely. The
/// selection controller is the only mutable piece; the `Mutex`
/// serializes its transitions across workers.
pub struct AppState {
    /// Street catalog with resolved history.
    pub catalog: Arc<StreetCatalog>,
    /// Selection state machine.
    pub controller: Mutex<SelectionController>,
    /// Load failure message when running degraded with an empty
    /// catalog.
    pub dataset_error: Option<String>,
}

/// Loads the dataset pair, degrading to an empty catalog on failure.
#[must_use]
pub fn load_state(history_path: &Path, geometry_path: &Path) -> AppState {
    let (catalog, dataset_error) =
        match callejero_catalog::load_catalog(history_path, geometry_path) {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                log::error!("Dataset load failed, serving empty catalog: {e}");
                (
                    StreetCatalog::default(),
                    Some(format!("Could not load street data: {e}")),
                )
            }
        };

    AppState {
        catalog: Arc::new(catalog),
        controller: Mutex::new(SelectionController::new()),
        dataset_error,
    }
}

/// Starts the callejero API server.
///
/// Dataset paths come from `HISTORY_PATH` / `GEOMETRY_PATH` and the
/// bind address from `BIND_ADDR` / `PORT`. This is a regular async
/// function — the caller provides the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    let history_path =
        std::env::var("HISTORY_PATH").unwrap_or_else(|_| "data/historical.json".to_string());
    let geometry_path =
        std::env::var("GEOMETRY_PATH").unwrap_or_else(|_| "data/streets.geojson".to_string());

    log::info!("Loading datasets ({history_path}, {geometry_path})...");
    let state = web::Data::new(load_state(
        Path::new(&history_path),
        Path::new(&geometry_path),
    ));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/search", web::get().to(handlers::search))
                    .route("/streets", web::get().to(handlers::streets))
                    .route("/streets/{name}", web::get().to(handlers::street_detail))
                    .route("/selection", web::get().to(handlers::current_selection))
                    .route("/selection", web::post().to(handlers::select))
                    .route("/selection/restore", web::post().to(handlers::restore))
                    .route("/selection", web::delete().to(handlers::clear_selection)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
