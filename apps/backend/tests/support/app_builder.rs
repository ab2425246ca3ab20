use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::state::AppState;

/// Builder for creating test Actix service instances
pub struct TestAppBuilder {
    state: AppState,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Build the service with production routes and middleware.
    ///
    /// Returns the shared state too, so tests can inspect the registry.
    pub async fn build(
        self,
    ) -> (
        impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
        web::Data<AppState>,
    ) {
        let data = web::Data::new(self.state);

        let service = test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data.clone())
                .configure(routes::configure),
        )
        .await;

        (service, data)
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
