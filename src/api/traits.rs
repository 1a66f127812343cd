//! Capability interfaces the route layer depends on. The concrete clients in
//! this module tree implement them; tests substitute in-memory fakes.

use async_trait::async_trait;
use uuid::Uuid;

use super::errors::ApiResult;
use super::models::{Article, ArticleDetails, DiscordWebHook, Source, Subscription, SubscriptionDetails};

pub trait CollectorApi: Send + Sync {
    fn articles(&self) -> &dyn ArticlesApi;
    fn sources(&self) -> &dyn SourcesApi;
    fn outputs(&self) -> &dyn OutputsApi;
    fn subscriptions(&self) -> &dyn SubscriptionsApi;
    fn queue(&self) -> &dyn QueueApi;
}

#[async_trait]
pub trait ArticlesApi: Send + Sync {
    /// Newest articles. `page` is only sent when it is 1 or more.
    async fn list(&self, page: Option<u32>) -> ApiResult<Vec<Article>>;
    async fn get(&self, id: Uuid) -> ApiResult<Article>;
    async fn list_by_source_id(&self, id: Uuid, page: Option<u32>) -> ApiResult<Vec<Article>>;
    async fn get_details(&self, id: Uuid) -> ApiResult<ArticleDetails>;
}

#[async_trait]
pub trait SourcesApi: Send + Sync {
    async fn list(&self) -> ApiResult<Vec<Source>>;
    async fn list_by_source(&self, source: &str) -> ApiResult<Vec<Source>>;
    async fn get_by_id(&self, id: Uuid) -> ApiResult<Source>;
    async fn get_by_source_and_name(&self, source: &str, name: &str) -> ApiResult<Source>;
    async fn new_reddit(&self, name: &str, url: &str) -> ApiResult<()>;
    async fn new_youtube(&self, name: &str, url: &str) -> ApiResult<()>;
    async fn new_twitch(&self, name: &str) -> ApiResult<()>;
    async fn delete(&self, id: Uuid) -> ApiResult<()>;
    async fn disable(&self, id: Uuid) -> ApiResult<()>;
    async fn enable(&self, id: Uuid) -> ApiResult<()>;
}

pub trait OutputsApi: Send + Sync {
    fn discord_web_hook(&self) -> &dyn DiscordWebHooksApi;
}

#[async_trait]
pub trait DiscordWebHooksApi: Send + Sync {
    async fn list(&self) -> ApiResult<Vec<DiscordWebHook>>;
    async fn get(&self, id: Uuid) -> ApiResult<DiscordWebHook>;
    async fn get_by_server_and_channel(&self, server: &str, channel: &str) -> ApiResult<Vec<DiscordWebHook>>;
    async fn new(&self, server: &str, channel: &str, url: &str) -> ApiResult<()>;
    async fn delete(&self, id: Uuid) -> ApiResult<()>;
    async fn disable(&self, id: Uuid) -> ApiResult<()>;
    async fn enable(&self, id: Uuid) -> ApiResult<()>;
}

#[async_trait]
pub trait SubscriptionsApi: Send + Sync {
    async fn list(&self) -> ApiResult<Vec<Subscription>>;
    async fn list_details(&self) -> ApiResult<Vec<SubscriptionDetails>>;
    async fn get_by_discord_id(&self, id: Uuid) -> ApiResult<Vec<Subscription>>;
    async fn get_by_source_id(&self, id: Uuid) -> ApiResult<Vec<Subscription>>;
    async fn new(&self, discord_web_hook_id: Uuid, source_id: Uuid) -> ApiResult<()>;
    async fn delete(&self, id: Uuid) -> ApiResult<()>;
}

#[async_trait]
pub trait QueueApi: Send + Sync {
    /// Articles waiting to be posted to Discord webhooks.
    async fn list_discord_web_hooks(&self) -> ApiResult<Vec<ArticleDetails>>;
}
