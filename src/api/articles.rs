use async_trait::async_trait;
use uuid::Uuid;

use super::{
    dto::{ArticleDetailsDto, ArticleDto},
    errors::{ApiError, ApiResult},
    models::{Article, ArticleDetails},
    page_param,
    rest::{resource_uri, with_query, RestArgs, RestClient},
    traits::ArticlesApi,
    types::{decode_list, decode_one},
};

#[derive(Debug, Clone)]
pub struct ArticlesClient {
    endpoint: String,
    route_root: &'static str,
    rest: RestClient,
}

impl ArticlesClient {
    pub fn new(endpoint: impl Into<String>, rest: RestClient) -> Self {
        Self {
            endpoint: endpoint.into(),
            route_root: "api/articles",
            rest,
        }
    }

    fn uri(&self, tail: &str) -> String {
        resource_uri(&self.endpoint, self.route_root, tail)
    }
}

#[async_trait]
impl ArticlesApi for ArticlesClient {
    /// Route = /api/articles[?page=N]
    async fn list(&self, page: Option<u32>) -> ApiResult<Vec<Article>> {
        let page = page_param(page);
        let mut params = Vec::new();
        if let Some(page) = page.as_deref() {
            params.push(("page", page));
        }

        let uri = with_query(self.uri(""), &params);
        let body = self.rest.get(RestArgs::json(uri)).await?;
        decode_list::<ArticleDto, _>(&body)
    }

    /// Route = /api/articles/{id}
    async fn get(&self, id: Uuid) -> ApiResult<Article> {
        let body = self.rest.get(RestArgs::json(self.uri(&id.to_string()))).await?;
        let article: Article = decode_one::<ArticleDto, _>(&body)?;
        ApiError::ensure_id(id, article.id, article)
    }

    /// Route = /api/articles/by/sourceid?id={id}[&page=N]
    async fn list_by_source_id(&self, id: Uuid, page: Option<u32>) -> ApiResult<Vec<Article>> {
        let id = id.to_string();
        let page = page_param(page);
        let mut params = vec![("id", id.as_str())];
        if let Some(page) = page.as_deref() {
            params.push(("page", page));
        }

        let uri = with_query(self.uri("by/sourceid"), &params);
        let body = self.rest.get(RestArgs::json(uri)).await?;
        decode_list::<ArticleDto, _>(&body)
    }

    /// The article with its source attached.
    ///
    /// Route = /api/articles/{id}/details
    async fn get_details(&self, id: Uuid) -> ApiResult<ArticleDetails> {
        let body = self
            .rest
            .get(RestArgs::json(self.uri(&format!("{id}/details"))))
            .await?;
        let details: ArticleDetails = decode_one::<ArticleDetailsDto, _>(&body)?;
        ApiError::ensure_id(id, details.article.id, details)
    }
}
