use actix_web::{get, post, web, HttpResponse};

use super::types::{IdForm, NewWebHookForm, NewWebHookTemplate, PostedTemplate, WebHookListTemplate};
use super::{render, RqApi};
use crate::api::parse_id;
use crate::errors::{AppError, AppResult};
use crate::log_api_failure;
use crate::security::validation::{validate_name, validate_required, validate_url};

const WEBHOOKS_HREF: &str = "/settings/outputs/discord/webhooks";

#[get("")]
pub async fn webhook_list(api: RqApi) -> AppResult<HttpResponse> {
    let mut errors = Vec::new();
    let items = match api.outputs().discord_web_hook().list().await {
        Ok(items) => items,
        Err(err) => {
            log_api_failure!("outputs.discord_web_hook.list", err);
            errors.push(err.to_string());
            Vec::new()
        }
    };

    render(&WebHookListTemplate {
        title: "Discord Web Hooks".to_string(),
        subtitle: "Channels collected articles get posted to.".to_string(),
        errors,
        items,
    })
}

#[get("/new")]
pub async fn webhook_new_form() -> AppResult<HttpResponse> {
    render(&NewWebHookTemplate {
        title: "New Discord Web Hook".to_string(),
        subtitle: "Create the webhook in Discord first, then paste its URL here.".to_string(),
        errors: Vec::new(),
    })
}

#[post("/new")]
pub async fn webhook_new_submit(api: RqApi, form: web::Form<NewWebHookForm>) -> AppResult<HttpResponse> {
    let server = validate_required(&form.server).map_err(|e| AppError::invalid_input("server", &e))?;
    validate_name(server).map_err(|e| AppError::invalid_input("server", &e))?;
    let channel = validate_required(&form.channel).map_err(|e| AppError::invalid_input("channel", &e))?;
    validate_name(channel).map_err(|e| AppError::invalid_input("channel", &e))?;
    let url = validate_required(&form.url).map_err(|e| AppError::invalid_input("url", &e))?;
    validate_url(url).map_err(|e| AppError::invalid_input("url", &e))?;

    api.outputs().discord_web_hook().new(server, channel, url).await?;

    tracing::info!(server = %server, channel = %channel, "Discord web hook created");
    render(&PostedTemplate::new("New Discord web hook was added", WEBHOOKS_HREF))
}

#[post("/enable")]
pub async fn webhook_enable(api: RqApi, form: web::Form<IdForm>) -> AppResult<HttpResponse> {
    let id = parse_id(&form.id)?;
    api.outputs().discord_web_hook().enable(id).await?;
    tracing::info!(webhook_id = %id, "Discord web hook enabled");
    render(&PostedTemplate::new("Discord web hook was enabled", WEBHOOKS_HREF))
}

#[post("/disable")]
pub async fn webhook_disable(api: RqApi, form: web::Form<IdForm>) -> AppResult<HttpResponse> {
    let id = parse_id(&form.id)?;
    api.outputs().discord_web_hook().disable(id).await?;
    tracing::info!(webhook_id = %id, "Discord web hook disabled");
    render(&PostedTemplate::new("Discord web hook was disabled", WEBHOOKS_HREF))
}

#[post("/delete")]
pub async fn webhook_delete(api: RqApi, form: web::Form<IdForm>) -> AppResult<HttpResponse> {
    let id = parse_id(&form.id)?;
    api.outputs().discord_web_hook().delete(id).await?;
    tracing::info!(webhook_id = %id, "Discord web hook deleted");
    render(&PostedTemplate::new("Discord web hook was deleted", WEBHOOKS_HREF))
}

pub fn routes() -> actix_web::Scope {
    web::scope("/outputs/discord/webhooks")
        .service(webhook_list)
        .service(webhook_new_form)
        .service(webhook_new_submit)
        .service(webhook_enable)
        .service(webhook_disable)
        .service(webhook_delete)
}
