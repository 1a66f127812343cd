use async_trait::async_trait;

use super::{
    dto::ArticleDetailsDto,
    errors::ApiResult,
    models::ArticleDetails,
    rest::{resource_uri, RestArgs, RestClient},
    traits::QueueApi,
    types::decode_list,
};

#[derive(Debug, Clone)]
pub struct QueueClient {
    endpoint: String,
    route_root: &'static str,
    rest: RestClient,
}

impl QueueClient {
    pub fn new(endpoint: impl Into<String>, rest: RestClient) -> Self {
        Self {
            endpoint: endpoint.into(),
            route_root: "api/queue",
            rest,
        }
    }
}

#[async_trait]
impl QueueApi for QueueClient {
    /// Route = /api/queue/discord/webhooks
    async fn list_discord_web_hooks(&self) -> ApiResult<Vec<ArticleDetails>> {
        let uri = resource_uri(&self.endpoint, self.route_root, "discord/webhooks");
        let body = self.rest.get(RestArgs::json(uri)).await?;
        decode_list::<ArticleDetailsDto, _>(&body)
    }
}
