// File: src/routes.rs
// Purpose: HTTP routes for the portfolio page and contact submissions

use crate::submission::{accepts_json, is_htmx, parse_contact_form};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use folio::contact::{self, ValidationResult};
use folio::page::CONTACT_ACTION;
use folio::{
    render_contact_section, render_page, ErrorResponse, FormContext, OkResponse, RenderMode,
    Site,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<RwLock<Site>>,
}

impl AppState {
    pub fn new(site: Site) -> Self {
        Self {
            site: Arc::new(RwLock::new(site)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route(CONTACT_ACTION, post(contact_handler))
        .route("/health", get(|| async { "ok" }))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index_handler(State(state): State<AppState>) -> Response {
    let site = state.site.read().await;
    OkResponse::new()
        .html(render_page(&site, &FormContext::empty(), &RenderMode::Server))
        .into_response()
}

/// Render the contact form state: the section alone for htmx, the full page otherwise
fn render_form(site: &Site, ctx: &FormContext, htmx: bool) -> maud::Markup {
    if htmx {
        render_contact_section(site, ctx, &RenderMode::Server)
    } else {
        render_page(site, ctx, &RenderMode::Server)
    }
}

fn rejected_json(result: &ValidationResult) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(result)).into_response()
}

async fn contact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let form = parse_contact_form(&headers, &body);
    let htmx = is_htmx(&headers);
    let json = accepts_json(&headers);
    let site = state.site.read().await;

    let contact = match contact::accept(form.clone()) {
        Ok(contact) => contact,
        Err(result) => {
            info!(fields = ?result.errors().keys().collect::<Vec<_>>(), "contact submission rejected");
            if json {
                return rejected_json(&result);
            }
            // htmx only swaps 2xx responses, so the in-place form keeps 200
            let status = if htmx {
                StatusCode::OK
            } else {
                StatusCode::UNPROCESSABLE_ENTITY
            };
            let ctx = FormContext::rejected(form, result);
            return ErrorResponse::new()
                .html(render_form(&site, &ctx, htmx))
                .status(status)
                .header("cache-control", "no-store")
                .into_response();
        }
    };

    let mailto = match contact::compose_mailto(&site.contact_email, &contact) {
        Ok(link) => link,
        Err(e) => {
            error!(error = %e, "contact_email in site config cannot receive mail");
            return ErrorResponse::new()
                .message("Contact is not available right now.")
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .into_response();
        }
    };

    info!("contact submission accepted");

    if json {
        return Json(serde_json::json!({
            "isValid": true,
            "errors": {},
            "mailto": mailto,
        }))
        .into_response();
    }

    let ctx = FormContext::accepted(mailto.clone());
    let response = OkResponse::new()
        .html(render_form(&site, &ctx, htmx))
        .no_cache();
    if htmx {
        response.hx_redirect(&mailto).into_response()
    } else {
        response.into_response()
    }
}

async fn not_found_handler(uri: Uri) -> Response {
    let markup = maud::html! {
        (maud::DOCTYPE)
        html {
            head { title { "Page Not Found" } }
            body {
                h1 { "404 Page Not Found" }
                p { "Route '" (uri.path()) "' not found" }
                a href="/" { "Go Home" }
            }
        }
    };
    ErrorResponse::new()
        .html(markup)
        .status(StatusCode::NOT_FOUND)
        .into_response()
}
