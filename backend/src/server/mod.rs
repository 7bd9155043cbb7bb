//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, build_repository};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use mailinglist::Trace;
#[cfg(debug_assertions)]
use mailinglist::doc::ApiDoc;
use mailinglist::inbound::http::routes::configure_routes;
use mailinglist::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

pub(crate) fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_routes);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server for the given configuration.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, emails } = config;
    let http_state = web::Data::new(HttpState::new(emails));

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr.as_str())?
        .run();
    Ok(server)
}
