use askama::Template;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::{Article, ArticleDetails, DiscordWebHook, Source, SubscriptionDetails};

const UNKNOWN_SOURCE: &str = "unknown source";

/// One article as listed on a page, already joined to its source.
#[derive(Debug, Clone)]
pub struct ArticleRow {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub thumbnail: String,
    pub description: String,
    pub author_name: String,
    pub pub_date: String,
    pub tags: Vec<String>,
    pub source_id: Uuid,
    pub source_name: String,
    pub source_kind: String,
    /// False when the source lookup failed and the placeholder is shown.
    pub known_source: bool,
}

impl ArticleRow {
    /// `source` is `None` when the lookup failed; the row still renders.
    pub fn new(article: &Article, source: Option<&Source>) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            url: article.url.clone(),
            thumbnail: article.thumbnail.clone(),
            description: article.description.clone(),
            author_name: article.author_name.clone(),
            pub_date: article.pub_date.format("%Y-%m-%d %H:%M UTC").to_string(),
            tags: article.tags.clone(),
            source_id: article.source_id,
            source_name: source
                .map(|s| s.name.clone())
                .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
            source_kind: source.map(|s| s.source.clone()).unwrap_or_default(),
            known_source: source.is_some(),
        }
    }
}

impl From<&ArticleDetails> for ArticleRow {
    fn from(details: &ArticleDetails) -> Self {
        ArticleRow::new(&details.article, Some(&details.source))
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct IdForm {
    pub id: String,
    /// Settings page to link back to after the change.
    pub back: Option<String>,
}

impl IdForm {
    pub fn back_href(&self, fallback: &str) -> String {
        match self.back.as_deref() {
            Some(back) if back.starts_with("/settings") && !back.starts_with("//") => back.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewSourceForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct NewWebHookForm {
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct NewSubscriptionForm {
    #[serde(default)]
    pub source_id: String,
    #[serde(default)]
    pub webhook_id: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
    pub code: u16,
    pub error: String,
}

/// Confirmation page after a change was accepted by the API.
#[derive(Template)]
#[template(path = "posted.html")]
pub struct PostedTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
    pub back_href: String,
}

impl PostedTemplate {
    pub fn new(title: &str, back_href: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: "Head on back to see the change.".to_string(),
            errors: Vec::new(),
            back_href: back_href.to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "articles/index.html")]
pub struct ArticlesIndexTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "articles/list.html")]
pub struct ArticleListTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
    pub items: Vec<ArticleRow>,
    /// Empty when there is no such page.
    pub prev_href: String,
    pub next_href: String,
}

/// Same data as [`ArticleListTemplate`], laid out as a grid of cards.
#[derive(Template)]
#[template(path = "articles/cards.html")]
pub struct ArticleCardsTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
    pub items: Vec<ArticleRow>,
    pub prev_href: String,
    pub next_href: String,
}

impl From<ArticleListTemplate> for ArticleCardsTemplate {
    fn from(list: ArticleListTemplate) -> Self {
        Self {
            title: list.title,
            subtitle: list.subtitle,
            errors: list.errors,
            items: list.items,
            prev_href: list.prev_href,
            next_href: list.next_href,
        }
    }
}

#[derive(Template)]
#[template(path = "articles/display.html")]
pub struct ArticleDisplayTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
    pub article: Article,
    pub source: Source,
    pub pub_date: String,
    pub is_image: bool,
}

#[derive(Template)]
#[template(path = "articles/sources.html")]
pub struct ArticleSourcesTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
    pub items: Vec<Source>,
}

#[derive(Template)]
#[template(path = "settings/index.html")]
pub struct SettingsIndexTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "settings/sources/list.html")]
pub struct SourceListTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
    pub items: Vec<Source>,
    pub source_name: String,
    pub back_href: String,
    /// Empty when this kind of source cannot be created from the portal.
    pub new_href: String,
}

#[derive(Template)]
#[template(path = "settings/sources/new.html")]
pub struct NewSourceTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
    pub source_name: String,
    pub action: String,
    pub needs_url: bool,
}

#[derive(Template)]
#[template(path = "settings/outputs/webhooks.html")]
pub struct WebHookListTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
    pub items: Vec<DiscordWebHook>,
}

#[derive(Template)]
#[template(path = "settings/outputs/new_webhook.html")]
pub struct NewWebHookTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "settings/subscriptions/list.html")]
pub struct SubscriptionListTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
    pub items: Vec<SubscriptionDetails>,
    pub new_href: String,
}

#[derive(Template)]
#[template(path = "settings/subscriptions/new.html")]
pub struct NewSubscriptionTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
    pub outputs: Vec<DiscordWebHook>,
    pub sources: Vec<Source>,
}

#[derive(Template)]
#[template(path = "settings/queue.html")]
pub struct QueueTemplate {
    pub title: String,
    pub subtitle: String,
    pub errors: Vec<String>,
    pub items: Vec<ArticleRow>,
}
