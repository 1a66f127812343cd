use actix_web::{get, post, web, HttpResponse};

use super::types::{IdForm, NewSourceForm, NewSourceTemplate, PostedTemplate, SourceListTemplate};
use super::{render, RqApi};
use crate::api::sources::{FFXIV_SOURCE_NAME, REDDIT_SOURCE_NAME, TWITCH_SOURCE_NAME, YOUTUBE_SOURCE_NAME};
use crate::api::parse_id;
use crate::errors::{AppError, AppResult};
use crate::log_api_failure;
use crate::security::validation::{validate_handle, validate_name, validate_required, validate_url};

const REDDIT_BASE_URL: &str = "https://reddit.com/r/";

/// Kinds of source the portal knows how to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Reddit,
    YouTube,
    Twitch,
    Ffxiv,
}

impl SourceKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            REDDIT_SOURCE_NAME => Some(SourceKind::Reddit),
            YOUTUBE_SOURCE_NAME => Some(SourceKind::YouTube),
            TWITCH_SOURCE_NAME => Some(SourceKind::Twitch),
            FFXIV_SOURCE_NAME => Some(SourceKind::Ffxiv),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SourceKind::Reddit => REDDIT_SOURCE_NAME,
            SourceKind::YouTube => YOUTUBE_SOURCE_NAME,
            SourceKind::Twitch => TWITCH_SOURCE_NAME,
            SourceKind::Ffxiv => FFXIV_SOURCE_NAME,
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            SourceKind::Reddit => "Reddit",
            SourceKind::YouTube => "YouTube",
            SourceKind::Twitch => "Twitch",
            SourceKind::Ffxiv => "Final Fantasy XIV",
        }
    }

    fn list_title(self) -> &'static str {
        match self {
            SourceKind::Reddit => "Known Subreddits",
            SourceKind::YouTube => "Known YouTube Channels",
            SourceKind::Twitch => "Known Twitch Streamers",
            SourceKind::Ffxiv => "Known Final Fantasy XIV Regions",
        }
    }

    /// FFXIV sources are seeded by the collector and cannot be added here.
    pub fn can_create(self) -> bool {
        self != SourceKind::Ffxiv
    }

    fn needs_url(self) -> bool {
        self == SourceKind::YouTube
    }

    fn list_href(self) -> String {
        format!("/settings/sources/{}", self.name())
    }
}

fn creatable_kind(kind: &str) -> AppResult<SourceKind> {
    SourceKind::parse(kind)
        .filter(|kind| kind.can_create())
        .ok_or_else(|| AppError::resource_not_found("Source kind"))
}

#[get("/{kind}")]
pub async fn source_list(api: RqApi, path: web::Path<String>) -> AppResult<HttpResponse> {
    let kind = SourceKind::parse(&path).ok_or_else(|| AppError::resource_not_found("Source kind"))?;

    let mut errors = Vec::new();
    let items = match api.sources().list_by_source(kind.name()).await {
        Ok(items) => items,
        Err(err) => {
            log_api_failure!("sources.list_by_source", err);
            errors.push(err.to_string());
            Vec::new()
        }
    };

    let new_href = if kind.can_create() {
        format!("{}/new", kind.list_href())
    } else {
        String::new()
    };

    render(&SourceListTemplate {
        title: kind.list_title().to_string(),
        subtitle: format!("{} sources the collector checks.", kind.display_name()),
        errors,
        items,
        source_name: kind.display_name().to_string(),
        back_href: kind.list_href(),
        new_href,
    })
}

#[get("/{kind}/new")]
pub async fn source_new_form(path: web::Path<String>) -> AppResult<HttpResponse> {
    let kind = creatable_kind(&path)?;

    render(&NewSourceTemplate {
        title: format!("New {} source", kind.display_name()),
        subtitle: "The collector picks it up on its next run.".to_string(),
        errors: Vec::new(),
        source_name: kind.display_name().to_string(),
        action: format!("{}/new", kind.list_href()),
        needs_url: kind.needs_url(),
    })
}

#[post("/{kind}/new")]
pub async fn source_new_submit(
    api: RqApi,
    path: web::Path<String>,
    form: web::Form<NewSourceForm>,
) -> AppResult<HttpResponse> {
    let kind = creatable_kind(&path)?;
    let name = validate_required(&form.name).map_err(|e| AppError::invalid_input("name", &e))?;

    match kind {
        SourceKind::Reddit => {
            validate_handle(name).map_err(|e| AppError::invalid_input("name", &e))?;
            let url = format!("{REDDIT_BASE_URL}{name}");
            api.sources().new_reddit(name, &url).await?;
        }
        SourceKind::YouTube => {
            validate_name(name).map_err(|e| AppError::invalid_input("name", &e))?;
            let url = validate_required(&form.url).map_err(|e| AppError::invalid_input("url", &e))?;
            validate_url(url).map_err(|e| AppError::invalid_input("url", &e))?;
            api.sources().new_youtube(name, url).await?;
        }
        SourceKind::Twitch => {
            validate_handle(name).map_err(|e| AppError::invalid_input("name", &e))?;
            api.sources().new_twitch(name).await?;
        }
        SourceKind::Ffxiv => return Err(AppError::resource_not_found("Source kind")),
    }

    tracing::info!(kind = kind.name(), name = %name, "Source created");
    render(&PostedTemplate::new(
        &format!("New {} source was added", kind.display_name()),
        &kind.list_href(),
    ))
}

#[post("/enable")]
pub async fn source_enable(api: RqApi, form: web::Form<IdForm>) -> AppResult<HttpResponse> {
    let id = parse_id(&form.id)?;
    api.sources().enable(id).await?;
    tracing::info!(source_id = %id, "Source enabled");
    render(&PostedTemplate::new("Source was enabled", &form.back_href("/settings")))
}

#[post("/disable")]
pub async fn source_disable(api: RqApi, form: web::Form<IdForm>) -> AppResult<HttpResponse> {
    let id = parse_id(&form.id)?;
    api.sources().disable(id).await?;
    tracing::info!(source_id = %id, "Source disabled");
    render(&PostedTemplate::new("Source was disabled", &form.back_href("/settings")))
}

/// Sends a single delete. Whether a subscribed source may go is up to the
/// collector; if it refuses, its answer is shown as the error page.
#[post("/delete")]
pub async fn source_delete(api: RqApi, form: web::Form<IdForm>) -> AppResult<HttpResponse> {
    let id = parse_id(&form.id)?;
    api.sources().delete(id).await?;
    tracing::info!(source_id = %id, "Source deleted");
    render(&PostedTemplate::new("Source was deleted", &form.back_href("/settings")))
}

pub fn routes() -> actix_web::Scope {
    web::scope("/sources")
        .service(source_enable)
        .service(source_disable)
        .service(source_delete)
        .service(source_list)
        .service(source_new_form)
        .service(source_new_submit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds_only() {
        assert_eq!(SourceKind::parse("reddit"), Some(SourceKind::Reddit));
        assert_eq!(SourceKind::parse("ffxiv"), Some(SourceKind::Ffxiv));
        assert_eq!(SourceKind::parse("myspace"), None);
        assert_eq!(SourceKind::parse("Reddit"), None);
    }

    #[test]
    fn ffxiv_cannot_be_created() {
        assert!(!SourceKind::Ffxiv.can_create());
        assert!(creatable_kind("ffxiv").is_err());
        assert_eq!(creatable_kind("twitch").unwrap(), SourceKind::Twitch);
    }
}
