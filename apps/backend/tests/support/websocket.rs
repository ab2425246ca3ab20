// WebSocket test utilities

use std::net::TcpListener;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::state::AppState;

pub struct TestServer {
    pub handle: actix_web::dev::ServerHandle,
    pub addr: std::net::SocketAddr,
    pub join: tokio::task::JoinHandle<Result<(), std::io::Error>>,
    pub state: web::Data<AppState>,
}

impl TestServer {
    pub fn ws_url(&self, code: &str) -> String {
        format!("ws://{}/api/game/ws?gameId={}", self.addr, code)
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
        let _ = self.join.await;
    }
}

/// Start a real HTTP server on a random port with production routes.
///
/// One worker keeps every game actor on a single arbiter.
pub async fn start_test_server(state: AppState) -> Result<TestServer, Box<dyn std::error::Error>> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let data = web::Data::new(state);
    let app_data = data.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .configure(routes::configure)
    })
    .workers(1)
    .listen(listener)?
    .run();

    let handle = server.handle();
    let join = tokio::spawn(server);

    Ok(TestServer {
        handle,
        addr,
        join,
        state: data,
    })
}

/// Poll until the registry's game for `code` reports `expected` channels.
pub async fn wait_for_player_count(
    state: &AppState,
    code: &backend::domain::GameCode,
    expected: usize,
    timeout: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = tokio::time::Instant::now();
    loop {
        if let Some(game) = state.registry.get(code) {
            let current = game.send(backend::game::GetState).await?.player_count;
            if current == expected {
                return Ok(());
            }
            if start.elapsed() >= timeout {
                return Err(format!("timeout waiting for player_count == {expected} (got {current})").into());
            }
        } else if start.elapsed() >= timeout {
            return Err(format!("no game registered for {code}").into());
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
