//! Server-rendered portal pages.

pub mod articles;
pub mod health;
pub mod outputs;
pub mod queue;
pub mod sources;
pub mod subscriptions;
pub mod types;

use actix_web::{get, web, HttpResponse};
use askama::Template;

use crate::api::CollectorApi;
use crate::errors::AppResult;
use types::{IndexTemplate, SettingsIndexTemplate};

/// The collector API handle every page handler pulls from app data.
pub type RqApi = web::Data<dyn CollectorApi>;

pub(crate) fn render<T: Template>(template: &T) -> AppResult<HttpResponse> {
    let html = template.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

#[get("/")]
pub async fn index() -> AppResult<HttpResponse> {
    render(&IndexTemplate {
        title: "Welcome to Newsbot".to_string(),
        subtitle: "Your news, collected in one place.".to_string(),
        errors: Vec::new(),
    })
}

#[get("")]
pub async fn settings_index() -> AppResult<HttpResponse> {
    render(&SettingsIndexTemplate {
        title: "Settings".to_string(),
        subtitle: "Manage sources, outputs and subscriptions.".to_string(),
        errors: Vec::new(),
    })
}

fn settings_routes() -> actix_web::Scope {
    web::scope("/settings")
        .service(settings_index)
        .service(queue::queue_list)
        .service(sources::routes())
        .service(outputs::routes())
        .service(subscriptions::routes())
}

/// Registers every portal page. Static files are mounted separately.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(health::routes())
        .service(articles::routes())
        .service(settings_routes());
}
