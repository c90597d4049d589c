//! Actix-web handlers hosting the sign-up page.

use actix_web::HttpResponse;
use tera::{Context, Tera};

pub mod signup;

/// Renders `template` or answers `500` when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
