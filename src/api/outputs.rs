use async_trait::async_trait;
use uuid::Uuid;

use super::{
    dto::DiscordWebHookDto,
    errors::{ApiError, ApiResult},
    models::DiscordWebHook,
    rest::{resource_uri, with_query, RestArgs, RestClient},
    traits::{DiscordWebHooksApi, OutputsApi},
    types::{decode_list, decode_one},
};

/// Groups the delivery targets. Discord webhooks are the only kind today.
#[derive(Debug, Clone)]
pub struct OutputsClient {
    discord_web_hooks: DiscordWebHooksClient,
}

impl OutputsClient {
    pub fn new(endpoint: impl Into<String>, rest: RestClient) -> Self {
        Self {
            discord_web_hooks: DiscordWebHooksClient::new(endpoint, rest),
        }
    }
}

impl OutputsApi for OutputsClient {
    fn discord_web_hook(&self) -> &dyn DiscordWebHooksApi {
        &self.discord_web_hooks
    }
}

#[derive(Debug, Clone)]
pub struct DiscordWebHooksClient {
    endpoint: String,
    route_root: &'static str,
    rest: RestClient,
}

impl DiscordWebHooksClient {
    pub fn new(endpoint: impl Into<String>, rest: RestClient) -> Self {
        Self {
            endpoint: endpoint.into(),
            route_root: "api/discord/webhooks",
            rest,
        }
    }

    fn uri(&self, tail: &str) -> String {
        resource_uri(&self.endpoint, self.route_root, tail)
    }
}

#[async_trait]
impl DiscordWebHooksApi for DiscordWebHooksClient {
    /// Every webhook known to the API.
    async fn list(&self) -> ApiResult<Vec<DiscordWebHook>> {
        let body = self.rest.get(RestArgs::json(self.uri(""))).await?;
        decode_list::<DiscordWebHookDto, _>(&body)
    }

    async fn get(&self, id: Uuid) -> ApiResult<DiscordWebHook> {
        let body = self.rest.get(RestArgs::json(self.uri(&id.to_string()))).await?;
        let hook: DiscordWebHook = decode_one::<DiscordWebHookDto, _>(&body)?;
        ApiError::ensure_id(id, hook.id, hook)
    }

    /// Route = /api/discord/webhooks/by/serverAndChannel?server={server}&channel={channel}
    async fn get_by_server_and_channel(
        &self,
        server: &str,
        channel: &str,
    ) -> ApiResult<Vec<DiscordWebHook>> {
        let uri = with_query(
            self.uri("by/serverAndChannel"),
            &[("server", server), ("channel", channel)],
        );
        let body = self.rest.get(RestArgs::json(uri)).await?;
        decode_list::<DiscordWebHookDto, _>(&body)
    }

    async fn new(&self, server: &str, channel: &str, url: &str) -> ApiResult<()> {
        let uri = with_query(
            self.uri("new"),
            &[("url", url), ("server", server), ("channel", channel)],
        );
        self.rest.post(RestArgs::json(uri)).await?;
        Ok(())
    }

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
