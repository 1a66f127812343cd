use actix_web::{get, post, web, HttpResponse};

use super::types::{
    IdForm, NewSubscriptionForm, NewSubscriptionTemplate, PostedTemplate, SubscriptionListTemplate,
};
use super::{render, RqApi};
use crate::api::parse_id;
use crate::errors::AppResult;
use crate::log_api_failure;

const SUBSCRIPTIONS_HREF: &str = "/settings/subscriptions/discord/webhooks";

#[get("")]
pub async fn subscription_list(api: RqApi) -> AppResult<HttpResponse> {
    let mut errors = Vec::new();
    let items = match api.subscriptions().list_details().await {
        Ok(items) => items,
        Err(err) => {
            log_api_failure!("subscriptions.list_details", err);
            errors.push(err.to_string());
            Vec::new()
        }
    };

    render(&SubscriptionListTemplate {
        title: "Discord Web Hook Subscriptions".to_string(),
        subtitle: "Which sources get posted to which channels.".to_string(),
        errors,
        items,
        new_href: format!("{SUBSCRIPTIONS_HREF}/new"),
    })
}

/// Both pick lists are loaded independently; a failure in one still shows the other.
#[get("/new")]
pub async fn subscription_new_form(api: RqApi) -> AppResult<HttpResponse> {
    let mut errors = Vec::new();

    let outputs = match api.outputs().discord_web_hook().list().await {
        Ok(items) => items,
        Err(err) => {
            log_api_failure!("outputs.discord_web_hook.list", err);
            errors.push(err.to_string());
            Vec::new()
        }
    };
    let sources = match api.sources().list().await {
        Ok(items) => items.into_iter().filter(|source| !source.deleted).collect(),
        Err(err) => {
            log_api_failure!("sources.list", err);
            errors.push(err.to_string());
            Vec::new()
        }
    };

    render(&NewSubscriptionTemplate {
        title: "New Subscription".to_string(),
        subtitle: "Send a source's articles to a Discord channel.".to_string(),
        errors,
        outputs,
        sources,
    })
}

#[post("/new")]
pub async fn subscription_new_submit(
    api: RqApi,
    form: web::Form<NewSubscriptionForm>,
) -> AppResult<HttpResponse> {
    let source_id = parse_id(&form.source_id)?;
    let webhook_id = parse_id(&form.webhook_id)?;

    api.subscriptions().new(webhook_id, source_id).await?;

    tracing::info!(source_id = %source_id, webhook_id = %webhook_id, "Subscription created");
    render(&PostedTemplate::new("New subscription was added", SUBSCRIPTIONS_HREF))
}

#[post("/delete")]
pub async fn subscription_delete(api: RqApi, form: web::Form<IdForm>) -> AppResult<HttpResponse> {
    let id = parse_id(&form.id)?;
    api.subscriptions().delete(id).await?;
    tracing::info!(subscription_id = %id, "Subscription deleted");
    render(&PostedTemplate::new("Subscription was removed", SUBSCRIPTIONS_HREF))
}

pub fn routes() -> actix_web::Scope {
    web::scope("/subscriptions/discord/webhooks")
        .service(subscription_list)
        .service(subscription_new_form)
        .service(subscription_new_submit)
        .service(subscription_delete)
}
