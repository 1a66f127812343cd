//! Shapes exactly as the collector API puts them on the wire, and their
//! conversion into the display-friendly types in [`super::models`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::models::{Article, ArticleDetails, DiscordWebHook, Source, Subscription, SubscriptionDetails};

/// Splits a comma-joined tag field into trimmed tags, keeping order and duplicates.
///
/// Tags are joined without escaping, so a tag containing a literal comma comes
/// back as two tags.
pub fn split_tags(tags: &str) -> Vec<String> {
    if tags.trim().is_empty() {
        return Vec::new();
    }
    tags.split(',').map(|tag| tag.trim().to_string()).collect()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// `{"string": "...", "valid": bool}` on the wire, `Option<String>` in Rust.
/// A bare string or `null` is accepted as well.
pub mod null_string {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Object {
            #[serde(default, alias = "String")]
            string: String,
            #[serde(default, alias = "Valid")]
            valid: bool,
        },
        Plain(String),
    }

    #[derive(Serialize)]
    struct WireOut<'a> {
        string: &'a str,
        valid: bool,
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Wire>::deserialize(deserializer)? {
            Some(Wire::Object { string, valid: true }) => Some(string),
            Some(Wire::Object { .. }) | None => None,
            Some(Wire::Plain(string)) => Some(string),
        })
    }

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(string) => WireOut { string, valid: true }.serialize(serializer),
            None => WireOut { string: "", valid: false }.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: Uuid,
    #[serde(rename = "sourceid")]
    pub source_id: Uuid,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "pubdate")]
    pub pub_date: DateTime<Utc>,
    #[serde(default, with = "null_string")]
    pub video: Option<String>,
    #[serde(rename = "videoheight", default)]
    pub video_height: i32,
    #[serde(rename = "videowidth", default)]
    pub video_width: i32,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "authorname", default, with = "null_string")]
    pub author_name: Option<String>,
    #[serde(rename = "authorimage", default, with = "null_string")]
    pub author_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDto {
    pub id: Uuid,
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub source: String,
    #[serde(rename = "type", default)]
    pub source_type: String,
    #[serde(default, with = "null_string")]
    pub value: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordWebHookDto {
    pub id: Uuid,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionDto {
    pub id: Uuid,
    #[serde(rename = "discordwebhookid")]
    pub discord_web_hook_id: Uuid,
    #[serde(rename = "sourceid")]
    pub source_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDetailsDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub source: SourceDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionDetailsDto {
    pub id: Uuid,
    pub source: SourceDto,
    #[serde(rename = "discordwebhook")]
    pub discord_web_hook: DiscordWebHookDto,
}

impl From<ArticleDto> for Article {
    fn from(dto: ArticleDto) -> Self {
        Self {
            id: dto.id,
            source_id: dto.source_id,
            tags: split_tags(&dto.tags),
            title: dto.title,
            url: dto.url,
            pub_date: dto.pub_date,
            video: dto.video.unwrap_or_default(),
            video_height: dto.video_height,
            video_width: dto.video_width,
            thumbnail: dto.thumbnail,
            description: dto.description,
            author_name: dto.author_name.unwrap_or_default(),
            author_image: dto.author_image.unwrap_or_default(),
        }
    }
}

impl From<SourceDto> for Source {
    fn from(dto: SourceDto) -> Self {
        Self {
            id: dto.id,
            site: dto.site,
            name: dto.name,
            source: dto.source,
            source_type: dto.source_type,
            value: dto.value.unwrap_or_default(),
            enabled: dto.enabled,
            url: dto.url,
            tags: split_tags(&dto.tags),
            deleted: dto.deleted,
        }
    }
}

impl From<DiscordWebHookDto> for DiscordWebHook {
    fn from(dto: DiscordWebHookDto) -> Self {
        Self {
            id: dto.id,
            url: dto.url,
            server: dto.server,
            channel: dto.channel,
            enabled: dto.enabled,
        }
    }
}

impl From<SubscriptionDto> for Subscription {
    fn from(dto: SubscriptionDto) -> Self {
        Self {
            id: dto.id,
            discord_web_hook_id: dto.discord_web_hook_id,
            source_id: dto.source_id,
        }
    }
}

impl From<ArticleDetailsDto> for ArticleDetails {
    fn from(dto: ArticleDetailsDto) -> Self {
        Self {
            article: dto.article.into(),
            source: dto.source.into(),
        }
    }
}

impl From<SubscriptionDetailsDto> for SubscriptionDetails {
    fn from(dto: SubscriptionDetailsDto) -> Self {
        Self {
            id: dto.id,
            source: dto.source.into(),
            discord_web_hook: dto.discord_web_hook.into(),
        }
    }
}

// Domain back to wire. Used when the portal has to echo records, and by test fixtures.

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl From<&Article> for ArticleDto {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            source_id: article.source_id,
            tags: join_tags(&article.tags),
            title: article.title.clone(),
            url: article.url.clone(),
            pub_date: article.pub_date,
            video: non_empty(&article.video),
            video_height: article.video_height,
            video_width: article.video_width,
            thumbnail: article.thumbnail.clone(),
            description: article.description.clone(),
            author_name: non_empty(&article.author_name),
            author_image: non_empty(&article.author_image),
        }
    }
}

impl From<&Source> for SourceDto {
    fn from(source: &Source) -> Self {
        Self {
            id: source.id,
            site: source.site.clone(),
            name: source.name.clone(),
            source: source.source.clone(),
            source_type: source.source_type.clone(),
            value: non_empty(&source.value),
            enabled: source.enabled,
            url: source.url.clone(),
            tags: join_tags(&source.tags),
            deleted: source.deleted,
        }
    }
}

impl From<&DiscordWebHook> for DiscordWebHookDto {
    fn from(hook: &DiscordWebHook) -> Self {
        Self {
            id: hook.id,
            url: hook.url.clone(),
            server: hook.server.clone(),
            channel: hook.channel.clone(),
            enabled: hook.enabled,
        }
    }
}

impl From<&Subscription> for SubscriptionDto {
    fn from(sub: &Subscription) -> Self {
        Self {
            id: sub.id,
            discord_web_hook_id: sub.discord_web_hook_id,
            source_id: sub.source_id,
        }
    }
}
