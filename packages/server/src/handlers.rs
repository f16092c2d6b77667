//! HTTP handler functions for the callejero API.

use actix_web::{HttpResponse, web};
use callejero_search::{MIN_QUERY_LEN, SEARCH_RESULT_LIMIT};
use callejero_selection::{Command, Outcome, PanelContent};
use callejero_server_models::{
    ApiHealth, ApiName, ApiStreetDetail, CurrentSelection, RestoreRequest, SearchParams,
    SelectRequest, SelectionResponse,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        streets: state.catalog.len(),
        dataset_error: state.dataset_error.clone(),
    })
}

/// `GET /api/search?q=...&limit=...`
///
/// The minimum-query-length gate lives here, not in the engine:
/// queries shorter than [`MIN_QUERY_LEN`] return an empty list.
pub async fn search(state: web::Data<AppState>, params: web::Query<SearchParams>) -> HttpResponse {
    if params.q.chars().count() < MIN_QUERY_LEN {
        return HttpResponse::Ok().json(Vec::<ApiName>::new());
    }

    let limit = params.limit.unwrap_or(SEARCH_RESULT_LIMIT);
    let hits: Vec<ApiName> = callejero_search::search(&params.q, &state.catalog, limit)
        .into_iter()
        .map(|hit| ApiName {
            name: hit.name,
            has_history: hit.has_history,
        })
        .collect();

    HttpResponse::Ok().json(hits)
}

/// `GET /api/streets`
///
/// All catalog names in lexicographic order with history flags.
pub async fn streets(state: web::Data<AppState>) -> HttpResponse {
    let names: Vec<ApiName> = state
        .catalog
        .entries()
        .map(|entry| ApiName {
            name: entry.name.clone(),
            has_history: entry.history.is_some(),
        })
        .collect();

    HttpResponse::Ok().json(names)
}

/// `GET /api/streets/{name}`
pub async fn street_detail(state: web::Data<AppState>, name: web::Path<String>) -> HttpResponse {
    let Some(entry) = state.catalog.get(&name) else {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("unknown street: {}", *name),
        }));
    };

    HttpResponse::Ok().json(ApiStreetDetail {
        name: entry.name.clone(),
        segments: entry.segments.clone(),
        panel: PanelContent::for_entry(entry),
    })
}

/// `GET /api/selection`
pub async fn current_selection(state: web::Data<AppState>) -> HttpResponse {
    // The controller's state is consistent at every point, so a
    // poisoned lock (a worker panicked mid-request) is recoverable.
    let controller = state
        .controller
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    HttpResponse::Ok().json(CurrentSelection {
        selected: controller.selected().map(str::to_string),
    })
}

/// `POST /api/selection`
pub async fn select(state: web::Data<AppState>, body: web::Json<SelectRequest>) -> HttpResponse {
    run_command(
        &state,
        &Command::Select {
            name: body.into_inner().name,
        },
    )
}

/// `POST /api/selection/restore`
pub async fn restore(state: web::Data<AppState>, body: web::Json<RestoreRequest>) -> HttpResponse {
    run_command(
        &state,
        &Command::Restore {
            location: body.into_inner().location,
        },
    )
}

/// `DELETE /api/selection`
pub async fn clear_selection(state: web::Data<AppState>) -> HttpResponse {
    run_command(&state, &Command::ClearSelection)
}

/// Applies a selection command and shapes the outcome. An unknown
/// target is reported as `found: false` with no directives — the
/// no-op stays invisible to the user but loggable for the caller.
fn run_command(state: &AppState, command: &Command) -> HttpResponse {
    let mut controller = state
        .controller
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    let response = match controller.apply(command, &state.catalog) {
        Outcome::Applied(directives) => SelectionResponse {
            found: true,
            directives,
        },
        Outcome::NotFound => {
            log::debug!("Selection command had no target: {command:?}");
            SelectionResponse {
                found: false,
                directives: Vec::new(),
            }
        }
    };

    HttpResponse::Ok().json(response)
}
