//! HTTP handlers for the scrape service

use actix_web::{web, HttpResponse};
use serde_json::Value;
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::ScrapeRequest;
use crate::services::scrape_profile;
use crate::AppState;

/// Scrape a profile's recent posts.
///
/// An empty body is treated as a request without a profile id.
pub async fn scrape(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        ScrapeRequest::default()
    } else {
        ScrapeRequest::from_json(serde_json::from_slice::<Value>(&body)?)
    };

    let profile_id = request.profile_id().ok_or(AppError::ProfileIdRequired)?;

    let first = request
        .first_or(state.default_post_count)
        .map_err(AppError::InvalidRequest)?;
    if first < 1 {
        return Err(AppError::InvalidRequest(format!(
            "first must be a positive integer, got {}",
            first
        )));
    }

    info!(profile_id = %profile_id, first, "Scraping Instagram profile");

    let response = scrape_profile(
        &state.instagram,
        &profile_id,
        first,
        state.image_fetch_concurrency,
    )
    .await?;

    info!(
        profile_id = %profile_id,
        returned = response.first,
        total = response.total,
        "Scrape completed"
    );

    Ok(HttpResponse::Ok().json(response))
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

/// Configure routes for the scrape service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .service(web::scope("/api/instagram").route("/scrape", web::post().to(scrape)));
}
