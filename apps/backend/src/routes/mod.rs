use actix_web::web;

pub mod games;
pub mod health;

/// Register every route. `main.rs` adds the middleware stack around this;
/// tests call it directly on a bare `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Game routes, including the WebSocket upgrade: /api/game/**
    cfg.service(web::scope("/api/game").configure(games::configure_routes));
}
