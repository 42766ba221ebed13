use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{FromRequest, HttpRequest, HttpResponse, web};
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod categories;
pub mod main;
pub mod videos;

/// Header set by htmx on every request it issues.
pub const HX_REQUEST_HEADER: &str = "HX-Request";

/// Whether the request came from htmx and expects a fragment instead of a
/// full page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmxRequest(pub bool);

impl HtmxRequest {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let is_htmx = headers
            .get(HX_REQUEST_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.eq_ignore_ascii_case("true"));
        Self(is_htmx)
    }

    pub fn is_fragment(self) -> bool {
        self.0
    }
}

impl FromRequest for HtmxRequest {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_headers(req.headers())))
    }
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Map a service failure to its HTTP response.
pub fn service_error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::MalformedInput(message) => HttpResponse::BadRequest().body(message),
        err @ ServiceError::Internal => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn base_context(current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context
}

/// Register every page and fragment route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::home)
        .service(main::about)
        .service(categories::add_video_form)
        .service(categories::add_video_link)
        .service(categories::show_category)
        .service(categories::submit_video)
        .service(videos::play_video)
        .service(videos::feed)
        .service(videos::search);
}
