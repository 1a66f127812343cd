use actix_web::{get, HttpResponse};

use super::types::{ArticleRow, QueueTemplate};
use super::{render, RqApi};
use crate::errors::AppResult;
use crate::log_api_failure;

#[get("/queue")]
pub async fn queue_list(api: RqApi) -> AppResult<HttpResponse> {
    let mut errors = Vec::new();
    let items = match api.queue().list_discord_web_hooks().await {
        Ok(details) => details.iter().map(ArticleRow::from).collect(),
        Err(err) => {
            log_api_failure!("queue.list_discord_web_hooks", err);
            errors.push(err.to_string());
            Vec::new()
        }
    };

    render(&QueueTemplate {
        title: "Discord Queue".to_string(),
        subtitle: "Articles waiting to be posted.".to_string(),
        errors,
        items,
    })
}
