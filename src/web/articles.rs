use std::collections::HashMap;

use actix_web::{get, web, HttpResponse};
use uuid::Uuid;

use super::types::{
    ArticleCardsTemplate, ArticleDisplayTemplate, ArticleListTemplate, ArticleRow, ArticleSourcesTemplate,
    ArticlesIndexTemplate, PageQuery,
};
use super::{render, RqApi};
use crate::api::{parse_id, Article, CollectorApi, Source};
use crate::errors::AppResult;
use crate::log_api_failure;

/// Looks up each distinct source once. Articles whose source cannot be
/// fetched are kept and shown against a placeholder.
pub async fn join_sources(api: &dyn CollectorApi, articles: &[Article]) -> Vec<ArticleRow> {
    let mut sources: HashMap<Uuid, Option<Source>> = HashMap::new();
    let mut rows = Vec::with_capacity(articles.len());

    for article in articles {
        if !sources.contains_key(&article.source_id) {
            let source = match api.sources().get_by_id(article.source_id).await {
                Ok(source) => Some(source),
                Err(err) => {
                    tracing::warn!(
                        article_id = %article.id,
                        source_id = %article.source_id,
                        error = %err,
                        "Article has an unknown source"
                    );
                    None
                }
            };
            sources.insert(article.source_id, source);
        }
        let source = sources.get(&article.source_id).and_then(Option::as_ref);
        rows.push(ArticleRow::new(article, source));
    }

    rows
}

/// Next is dropped when the page is empty or already the last addressable one.
fn page_links(base: &str, page: Option<u32>, has_items: bool) -> (String, String) {
    let current = page.unwrap_or(0);
    let prev = match current {
        0 => String::new(),
        1 => base.to_string(),
        n => format!("{base}?page={}", n - 1),
    };
    let next = match current.checked_add(1) {
        Some(next) if has_items => format!("{base}?page={next}"),
        _ => String::new(),
    };
    (prev, next)
}

#[get("")]
pub async fn articles_index() -> AppResult<HttpResponse> {
    render(&ArticlesIndexTemplate {
        title: "Articles".to_string(),
        subtitle: "Browse what the collector has picked up.".to_string(),
        errors: Vec::new(),
    })
}

async fn newest(api: &dyn CollectorApi, base: &str, page: Option<u32>) -> ArticleListTemplate {
    let mut errors = Vec::new();
    let items = match api.articles().list(page).await {
        Ok(articles) => join_sources(api, &articles).await,
        Err(err) => {
            log_api_failure!("articles.list", err);
            errors.push(err.to_string());
            Vec::new()
        }
    };
    let (prev_href, next_href) = page_links(base, page, !items.is_empty());

    ArticleListTemplate {
        title: "Newest Articles".to_string(),
        subtitle: "Freshly collected from every source.".to_string(),
        errors,
        items,
        prev_href,
        next_href,
    }
}

async fn by_source(api: &dyn CollectorApi, id: Uuid, base: &str, page: Option<u32>) -> ArticleListTemplate {
    let mut errors = Vec::new();
    let items = match api.articles().list_by_source_id(id, page).await {
        Ok(articles) => join_sources(api, &articles).await,
        Err(err) => {
            log_api_failure!("articles.list_by_source_id", err);
            errors.push(err.to_string());
            Vec::new()
        }
    };

    let title = match items.first().filter(|row| row.known_source) {
        Some(row) => format!("Newest posts from {}", row.source_name),
        None => "Newest posts".to_string(),
    };
    let (prev_href, next_href) = page_links(base, page, !items.is_empty());

    ArticleListTemplate {
        title,
        subtitle: String::new(),
        errors,
        items,
        prev_href,
        next_href,
    }
}

#[get("/list")]
pub async fn article_list(api: RqApi, query: web::Query<PageQuery>) -> AppResult<HttpResponse> {
    render(&newest(&**api, "/articles/list", query.page).await)
}

#[get("/newest")]
pub async fn article_newest(api: RqApi, query: web::Query<PageQuery>) -> AppResult<HttpResponse> {
    render(&newest(&**api, "/articles/newest", query.page).await)
}

#[get("/list/card")]
pub async fn article_cards(api: RqApi, query: web::Query<PageQuery>) -> AppResult<HttpResponse> {
    let page = newest(&**api, "/articles/list/card", query.page).await;
    render(&ArticleCardsTemplate::from(page))
}

#[get("/sources")]
pub async fn article_sources(api: RqApi) -> AppResult<HttpResponse> {
    let mut errors = Vec::new();
    let items = match api.sources().list().await {
        Ok(sources) => sources
            .into_iter()
            .filter(|source| source.enabled && !source.deleted)
            .collect(),
        Err(err) => {
            log_api_failure!("sources.list", err);
            errors.push(err.to_string());
            Vec::new()
        }
    };

    render(&ArticleSourcesTemplate {
        title: "Sources".to_string(),
        subtitle: "Pick a source to see what it posted.".to_string(),
        errors,
        items,
    })
}

#[get("/sources/{id}/list")]
pub async fn articles_by_source(
    api: RqApi,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let base = format!("/articles/sources/{id}/list");
    render(&by_source(&**api, id, &base, query.page).await)
}

#[get("/sources/{id}/card")]
pub async fn article_cards_by_source(
    api: RqApi,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let base = format!("/articles/sources/{id}/card");
    let page = by_source(&**api, id, &base, query.page).await;
    render(&ArticleCardsTemplate::from(page))
}

#[get("/{id}")]
pub async fn article_display(api: RqApi, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let details = api.articles().get_details(id).await?;

    let subtitle = format!(
        "{} - {}",
        details.source.name.to_uppercase(),
        details.source.source.to_uppercase()
    );
    let is_image = !details.article.has_video() && !details.article.thumbnail.is_empty();

    render(&ArticleDisplayTemplate {
        title: details.article.title.clone(),
        subtitle,
        errors: Vec::new(),
        pub_date: details.article.pub_date.format("%Y-%m-%d %H:%M UTC").to_string(),
        is_image,
        article: details.article,
        source: details.source,
    })
}

/// Fixed paths are registered ahead of `/{id}` so they are not read as ids.
pub fn routes() -> actix_web::Scope {
    web::scope("/articles")
        .service(articles_index)
        .service(article_list)
        .service(article_newest)
        .service(article_cards)
        .service(article_sources)
        .service(articles_by_source)
        .service(article_cards_by_source)
        .service(article_display)
}
