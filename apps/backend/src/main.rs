use actix_web::{web, App, HttpServer};
use backend::config::ServerConfig;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::state::AppState;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        seeded = config.rng_seed.is_some(),
        ws_mailbox = config.ws.mailbox_capacity,
        "starting duet backend"
    );

    // One registry for all workers; each game actor lives on the worker
    // that first touched its code.
    let data = web::Data::new(AppState::new(&config));

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
