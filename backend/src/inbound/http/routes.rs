//! Route table for the mailing-list API.
//!
//! Each path accepts exactly one method. Any other method on a known path is
//! answered with a 405 envelope and an `Allow` header naming the accepted
//! method.

use actix_web::http::header::{ALLOW, HeaderValue};
use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Route, web};
use tracing::warn;

use crate::domain::Error;
use crate::inbound::http::emails::{
    CREATE_PATH, DELETE_PATH, GET_BATCH_PATH, GET_PATH, UPDATE_PATH, create_email, delete_email,
    get_email, get_email_batch, update_email,
};

fn method_not_allowed(req: &HttpRequest, allow: &Method) -> HttpResponse {
    warn!(
        method = %req.method(),
        path = req.path(),
        allow = allow.as_str(),
        "method not allowed"
    );
    let error = Error::method_not_allowed(format!(
        "method {} not allowed; use {}",
        req.method(),
        allow
    ));
    let mut response = error.error_response();
    if let Ok(value) = HeaderValue::from_str(allow.as_str()) {
        response.headers_mut().insert(ALLOW, value);
    }
    response
}

fn single_method_resource(path: &str, method: Method, route: Route) -> actix_web::Resource {
    web::resource(path)
        .route(route.method(method.clone()))
        .default_service(web::to(move |req: HttpRequest| {
            let allow = method.clone();
            async move { method_not_allowed(&req, &allow) }
        }))
}

/// Register the `/email/*` endpoints on an app or scope.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use mailinglist::inbound::http::routes::configure_routes;
/// use mailinglist::inbound::http::state::HttpState;
/// use mailinglist::outbound::memory::InMemoryEmailRepository;
///
/// let state = HttpState::new(Arc::new(InMemoryEmailRepository::new()));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure_routes);
/// ```
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(single_method_resource(
        CREATE_PATH,
        Method::POST,
        web::route().to(create_email),
    ))
    .service(single_method_resource(
        GET_PATH,
        Method::GET,
        web::route().to(get_email),
    ))
    .service(single_method_resource(
        GET_BATCH_PATH,
        Method::GET,
        web::route().to(get_email_batch),
    ))
    .service(single_method_resource(
        UPDATE_PATH,
        Method::PUT,
        web::route().to(update_email),
    ))
    .service(single_method_resource(
        DELETE_PATH,
        Method::POST,
        web::route().to(delete_email),
    ));
}
