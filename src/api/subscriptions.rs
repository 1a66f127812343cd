use async_trait::async_trait;
use uuid::Uuid;

use super::{
    dto::{SubscriptionDetailsDto, SubscriptionDto},
    errors::ApiResult,
    models::{Subscription, SubscriptionDetails},
    rest::{resource_uri, with_query, RestArgs, RestClient},
    traits::SubscriptionsApi,
    types::decode_list,
};

#[derive(Debug, Clone)]
pub struct SubscriptionsClient {
    endpoint: String,
    route_root: &'static str,
    rest: RestClient,
}

impl SubscriptionsClient {
    pub fn new(endpoint: impl Into<String>, rest: RestClient) -> Self {
        Self {
            endpoint: endpoint.into(),
            route_root: "api/subscriptions",
            rest,
        }
    }

    fn uri(&self, tail: &str) -> String {
        resource_uri(&self.endpoint, self.route_root, tail)
    }

    async fn list_by(&self, route: &str, id: Uuid) -> ApiResult<Vec<Subscription>> {
        let id = id.to_string();
        let uri = with_query(self.uri(route), &[("id", id.as_str())]);
        let body = self.rest.get(RestArgs::json(uri)).await?;
        decode_list::<SubscriptionDto, _>(&body)
    }
}

#[async_trait]
impl SubscriptionsApi for SubscriptionsClient {
    async fn list(&self) -> ApiResult<Vec<Subscription>> {
        let body = self.rest.get(RestArgs::json(self.uri(""))).await?;
        decode_list::<SubscriptionDto, _>(&body)
    }

    /// Subscriptions with their source and webhook already joined.
    ///
    /// Route = /api/subscriptions/details
    async fn list_details(&self) -> ApiResult<Vec<SubscriptionDetails>> {
        let body = self.rest.get(RestArgs::json(self.uri("details"))).await?;
        decode_list::<SubscriptionDetailsDto, _>(&body)
    }

    async fn get_by_discord_id(&self, id: Uuid) -> ApiResult<Vec<Subscription>> {
        self.list_by("by/discordId", id).await
    }

    async fn get_by_source_id(&self, id: Uuid) -> ApiResult<Vec<Subscription>> {
        self.list_by("by/SourceId", id).await
    }

    /// Route = /api/subscriptions/discord/webhook/new?discordWebHookId={id}&sourceId={id}
    async fn new(&self, discord_web_hook_id: Uuid, source_id: Uuid) -> ApiResult<()> {
        let discord_web_hook_id = discord_web_hook_id.to_string();
        let source_id = source_id.to_string();
        let uri = with_query(
            self.uri("discord/webhook/new"),
            &[
                ("discordWebHookId", discord_web_hook_id.as_str()),
                ("sourceId", source_id.as_str()),
            ],
        );
        self.rest.post(RestArgs::json(uri)).await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ApiResult<()> {
        let id = id.to_string();
        let uri = with_query(self.uri("discord/webhook/delete"), &[("id", id.as_str())]);
        self.rest.delete(RestArgs::json(uri)).await?;
        Ok(())
    }
}
