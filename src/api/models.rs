use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A single collected item of content, tied to one [`Source`].
///
/// Optional text fields use the empty string for "absent".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub id: Uuid,
    pub source_id: Uuid,
    pub tags: Vec<String>,
    pub title: String,
    pub url: String,
    pub pub_date: DateTime<Utc>,
    pub video: String,
    pub video_height: i32,
    pub video_width: i32,
    pub thumbnail: String,
    pub description: String,
    pub author_name: String,
    pub author_image: String,
}

impl Article {
    pub fn has_video(&self) -> bool {
        !self.video.is_empty()
    }
}

/// A configured upstream feed articles are collected from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Source {
    pub id: Uuid,
    pub site: String,
    pub name: String,
    /// reddit, youtube, twitch, ffxiv
    pub source: String,
    pub source_type: String,
    /// type-specific extra value, empty when unset
    pub value: String,
    pub enabled: bool,
    pub url: String,
    pub tags: Vec<String>,
    pub deleted: bool,
}

/// An outbound delivery target for collected articles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscordWebHook {
    pub id: Uuid,
    pub url: String,
    pub server: String,
    pub channel: String,
    pub enabled: bool,
}

impl DiscordWebHook {
    pub fn label(&self) -> String {
        format!("{} - {}", self.server, self.channel)
    }
}

/// Routes one source's articles to one webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subscription {
    pub id: Uuid,
    pub discord_web_hook_id: Uuid,
    pub source_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleDetails {
    pub article: Article,
    pub source: Source,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionDetails {
    pub id: Uuid,
    pub source: Source,
    pub discord_web_hook: DiscordWebHook,
}
