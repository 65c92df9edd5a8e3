//! Navigation table mapping URL paths to views.
//!
//! A single route is registered: the root path, resolving to the music
//! player view. The table honors the environment-provided base path prefix
//! for history-mode routing. Paths outside the table resolve to `None`; no
//! fallback route is registered, so unmatched requests fall through to the
//! framework default.

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

/// Views the application can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    MusicPlayer,
}

/// One registered route.
#[derive(Debug, Clone)]
pub struct Route {
    /// Path relative to the base path, starting with `/`.
    pub path: &'static str,
    /// Route name, for logging and lookups.
    pub name: &'static str,
    pub view: View,
}

/// The application's route table.
pub struct RouteTable {
    base_path: String,
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build the table with the standard routes under `base_path`.
    ///
    /// `base_path` is either empty or starts with `/` and carries no
    /// trailing slash; `Config::validate` enforces this at startup.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            routes: vec![Route {
                path: "/",
                name: "MusicPlayer",
                view: View::MusicPlayer,
            }],
        }
    }

    /// Resolve a request path to its registered route, if any.
    pub fn resolve(&self, request_path: &str) -> Option<&Route> {
        let relative = self.strip_base(request_path)?;
        self.routes.iter().find(|route| route.path == relative)
    }

    /// Registered routes, in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Full mount path for a route, with the base path applied.
    pub fn mount_path(&self, route: &Route) -> String {
        if route.path == "/" && !self.base_path.is_empty() {
            self.base_path.clone()
        } else {
            format!("{}{}", self.base_path, route.path)
        }
    }

    /// Register every route as an actix service.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        for route in &self.routes {
            let path = self.mount_path(route);
            tracing::debug!(path = %path, name = route.name, "mounting view route");
            let handler = match route.view {
                View::MusicPlayer => web::get().to(music_player_view),
            };
            cfg.service(web::resource(path).route(handler));
        }
    }

    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base_path.is_empty() {
            return Some(path);
        }
        match path.strip_prefix(self.base_path.as_str()) {
            Some("") => Some("/"),
            other => other,
        }
    }
}

/// Shell page the music player view mounts into.
async fn music_player_view() -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>Lyra</title></head>\n\
         <body><div id=\"music-player\"></div></body>\n\
         </html>\n",
    )
}
