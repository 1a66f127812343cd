use async_trait::async_trait;
use uuid::Uuid;

use super::{
    dto::SourceDto,
    errors::{ApiError, ApiResult},
    models::Source,
    rest::{resource_uri, with_query, RestArgs, RestClient},
    traits::SourcesApi,
    types::{decode_list, decode_one},
};

pub const FFXIV_SOURCE_NAME: &str = "ffxiv";
pub const REDDIT_SOURCE_NAME: &str = "reddit";
pub const TWITCH_SOURCE_NAME: &str = "twitch";
pub const YOUTUBE_SOURCE_NAME: &str = "youtube";

#[derive(Debug, Clone)]
pub struct SourcesClient {
    endpoint: String,
    route_root: &'static str,
    rest: RestClient,
}

impl SourcesClient {
    pub fn new(endpoint: impl Into<String>, rest: RestClient) -> Self {
        Self {
            endpoint: endpoint.into(),
            route_root: "api/sources",
            rest,
        }
    }

    fn uri(&self, tail: &str) -> String {
        resource_uri(&self.endpoint, self.route_root, tail)
    }

    async fn create(&self, kind: &str, params: &[(&str, &str)]) -> ApiResult<()> {
        let uri = with_query(self.uri(&format!("new/{kind}")), params);
        self.rest.post(RestArgs::json(uri)).await?;
        Ok(())
    }
}

#[async_trait]
impl SourcesApi for SourcesClient {
    async fn list(&self) -> ApiResult<Vec<Source>> {
        let body = self.rest.get(RestArgs::json(self.uri(""))).await?;
        decode_list::<SourceDto, _>(&body)
    }

    /// Route = /api/sources/by/source?source={value}
    async fn list_by_source(&self, source: &str) -> ApiResult<Vec<Source>> {
        let uri = with_query(self.uri("by/source"), &[("source", source)]);
        let body = self.rest.get(RestArgs::json(uri)).await?;
        decode_list::<SourceDto, _>(&body)
    }

    async fn get_by_id(&self, id: Uuid) -> ApiResult<Source> {
        let body = self.rest.get(RestArgs::json(self.uri(&id.to_string()))).await?;
        let source: Source = decode_one::<SourceDto, _>(&body)?;
        ApiError::ensure_id(id, source.id, source)
    }

    /// Route = /api/sources/by/sourceAndName?source={source}&name={name}
    async fn get_by_source_and_name(&self, source: &str, name: &str) -> ApiResult<Source> {
        let uri = with_query(
            self.uri("by/sourceAndName"),
            &[("source", source), ("name", name)],
        );
        let body = self.rest.get(RestArgs::json(uri)).await?;
        decode_one::<SourceDto, _>(&body)
    }

    async fn new_reddit(&self, name: &str, url: &str) -> ApiResult<()> {
        self.create(REDDIT_SOURCE_NAME, &[("name", name), ("url", url)])
            .await
    }

    async fn new_youtube(&self, name: &str, url: &str) -> ApiResult<()> {
        self.create(YOUTUBE_SOURCE_NAME, &[("name", name), ("url", url)])
            .await
    }

    async fn new_twitch(&self, name: &str) -> ApiResult<()> {
        self.create(TWITCH_SOURCE_NAME, &[("name", name)]).await
    }

    /// Whether this cascades to subscriptions or is refused is up to the backend;
    /// a refusal comes back as [`ApiError::UnexpectedStatus`].
    async fn delete(&self, id: Uuid) -> ApiResult<()> {
        self.rest
            .delete(RestArgs::json(self.uri(&id.to_string())))
            .await?;
        Ok(())
    }

    async fn disable(&self, id: Uuid) -> ApiResult<()> {
        self.rest
            .post(RestArgs::json(self.uri(&format!("{id}/disable"))))
            .await?;
        Ok(())
    }

    async fn enable(&self, id: Uuid) -> ApiResult<()> {
        self.rest
            .post(RestArgs::json(self.uri(&format!("{id}/enable"))))
            .await?;
        Ok(())
    }
}
