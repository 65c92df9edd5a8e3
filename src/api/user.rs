//! Static user profile endpoint.
//!
//! Ignores the request entirely and returns a fixed payload behind a tiered
//! cache policy: the platform edge cache holds the response longest, the
//! intermediate CDN shorter, the browser shortest, so an update propagates
//! outward-to-inward within one hour while keeping hit rates high.

use actix_web::{web, HttpResponse};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Fixed profile payload plus the generation timestamp.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub name: &'static str,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Static user endpoint.
///
/// ANY /api/user
///
/// Always 200; the method, headers, and body of the request are ignored.
pub async fn user() -> HttpResponse {
    HttpResponse::Ok()
        // Platform edge cache (1 hour).
        .insert_header(("Vercel-CDN-Cache-Control", "max-age=3600"))
        // Other CDN caches (1 minute).
        .insert_header(("CDN-Cache-Control", "max-age=60"))
        // Browser cache (10 seconds).
        .insert_header(("Cache-Control", "max-age=10"))
        .json(UserResponse {
            name: "John Doe",
            updated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
}

/// Configure the user route. Registered for every HTTP method.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/user").route(web::route().to(user)));
}
