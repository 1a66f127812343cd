#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use newsbot_portal::api::{
    ApiError, ApiResult, Article, ArticleDetails, ArticlesApi, CollectorApi, DiscordWebHook,
    DiscordWebHooksApi, OutputsApi, QueueApi, Source, SourcesApi, Subscription, SubscriptionDetails,
    SubscriptionsApi,
};
use reqwest::StatusCode;
use uuid::Uuid;

#[derive(Default)]
pub struct State {
    pub articles: Vec<Article>,
    pub sources: Vec<Source>,
    pub webhooks: Vec<DiscordWebHook>,
    pub subscriptions: Vec<Subscription>,
    pub queue: Vec<ArticleDetails>,
    /// When set, every call fails with this body and a 500.
    pub fail_with: Option<String>,
}

/// In-memory collector the route tests run against.
#[derive(Default)]
pub struct FakeCollector {
    pub state: Mutex<State>,
}

fn not_found(what: &str) -> ApiError {
    ApiError::UnexpectedStatus {
        expected: StatusCode::OK,
        status: StatusCode::NOT_FOUND,
        body: format!("{what} not found"),
    }
}

pub fn source(name: &str, kind: &str, enabled: bool) -> Source {
    Source {
        id: Uuid::new_v4(),
        site: kind.to_string(),
        name: name.to_string(),
        source: kind.to_string(),
        source_type: "feed".to_string(),
        value: String::new(),
        enabled,
        url: format!("https://example.com/{name}"),
        tags: vec![kind.to_string(), name.to_string()],
        deleted: false,
    }
}

pub fn article(title: &str, source_id: Uuid) -> Article {
    Article {
        id: Uuid::new_v4(),
        source_id,
        tags: vec!["news".to_string()],
        title: title.to_string(),
        url: format!("https://example.com/posts/{}", title.replace(' ', "-")),
        pub_date: Utc.with_ymd_and_hms(2023, 4, 1, 12, 0, 0).unwrap(),
        video: String::new(),
        video_height: 0,
        video_width: 0,
        thumbnail: String::new(),
        description: "A post".to_string(),
        author_name: "someone".to_string(),
        author_image: String::new(),
    }
}

pub fn webhook(server: &str, channel: &str) -> DiscordWebHook {
    DiscordWebHook {
        id: Uuid::new_v4(),
        url: format!("https://discord.com/api/webhooks/{channel}"),
        server: server.to_string(),
        channel: channel.to_string(),
        enabled: true,
    }
}

impl FakeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().fail_with = Some(message.to_string());
        fake
    }

    pub fn with<F: FnOnce(&mut State)>(self, seed: F) -> Self {
        seed(&mut self.state.lock().unwrap());
        self
    }

    fn check(&self) -> ApiResult<()> {
        match &self.state.lock().unwrap().fail_with {
            Some(body) => Err(ApiError::UnexpectedStatus {
                expected: StatusCode::OK,
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }

    fn set_source_enabled(&self, id: Uuid, enabled: bool) -> ApiResult<()> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        let source = state
            .sources
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found("source"))?;
        source.enabled = enabled;
        Ok(())
    }

    fn set_webhook_enabled(&self, id: Uuid, enabled: bool) -> ApiResult<()> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        let hook = state
            .webhooks
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| not_found("webhook"))?;
        hook.enabled = enabled;
        Ok(())
    }

    fn add_source(&self, kind: &str, name: &str, url: &str) -> ApiResult<()> {
        self.check()?;
        let mut source = source(name, kind, true);
        source.url = url.to_string();
        self.state.lock().unwrap().sources.push(source);
        Ok(())
    }
}

impl CollectorApi for FakeCollector {
    fn articles(&self) -> &dyn ArticlesApi {
        self
    }

    fn sources(&self) -> &dyn SourcesApi {
        self
    }

    fn outputs(&self) -> &dyn OutputsApi {
        self
    }

    fn subscriptions(&self) -> &dyn SubscriptionsApi {
        self
    }

    fn queue(&self) -> &dyn QueueApi {
        self
    }
}

#[async_trait]
impl ArticlesApi for FakeCollector {
    async fn list(&self, _page: Option<u32>) -> ApiResult<Vec<Article>> {
        self.check()?;
        Ok(self.state.lock().unwrap().articles.clone())
    }

    async fn get(&self, id: Uuid) -> ApiResult<Article> {
        self.check()?;
        let state = self.state.lock().unwrap();
        state
            .articles
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| not_found("article"))
    }

    async fn list_by_source_id(&self, id: Uuid, _page: Option<u32>) -> ApiResult<Vec<Article>> {
        self.check()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .filter(|a| a.source_id == id)
            .cloned()
            .collect())
    }

    async fn get_details(&self, id: Uuid) -> ApiResult<ArticleDetails> {
        self.check()?;
        let state = self.state.lock().unwrap();
        let article = state
            .articles
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| not_found("article"))?;
        let source = state
            .sources
            .iter()
            .find(|s| s.id == article.source_id)
            .cloned()
            .ok_or_else(|| not_found("source"))?;
        Ok(ArticleDetails { article, source })
    }
}

#[async_trait]
impl SourcesApi for FakeCollector {
    async fn list(&self) -> ApiResult<Vec<Source>> {
        self.check()?;
        Ok(self.state.lock().unwrap().sources.clone())
    }

    async fn list_by_source(&self, source: &str) -> ApiResult<Vec<Source>> {
        self.check()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .sources
            .iter()
            .filter(|s| s.source == source)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> ApiResult<Source> {
        self.check()?;
        let state = self.state.lock().unwrap();
        state
            .sources
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| not_found("source"))
    }

    async fn get_by_source_and_name(&self, source: &str, name: &str) -> ApiResult<Source> {
        self.check()?;
        let state = self.state.lock().unwrap();
        state
            .sources
            .iter()
            .find(|s| s.source == source && s.name == name)
            .cloned()
            .ok_or_else(|| not_found("source"))
    }

    async fn new_reddit(&self, name: &str, url: &str) -> ApiResult<()> {
        self.add_source("reddit", name, url)
    }

    async fn new_youtube(&self, name: &str, url: &str) -> ApiResult<()> {
        self.add_source("youtube", name, url)
    }

    async fn new_twitch(&self, name: &str) -> ApiResult<()> {
        self.add_source("twitch", name, &format!("https://twitch.tv/{name}"))
    }

    /// Refuses like the collector does while subscriptions still point at the source.
    async fn delete(&self, id: Uuid) -> ApiResult<()> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        if state.subscriptions.iter().any(|s| s.source_id == id) {
            return Err(ApiError::UnexpectedStatus {
                expected: StatusCode::OK,
                status: StatusCode::CONFLICT,
                body: "source has subscriptions".to_string(),
            });
        }
        let before = state.sources.len();
        state.sources.retain(|s| s.id != id);
        if state.sources.len() == before {
            return Err(not_found("source"));
        }
        Ok(())
    }

    async fn disable(&self, id: Uuid) -> ApiResult<()> {
        self.set_source_enabled(id, false)
    }

    async fn enable(&self, id: Uuid) -> ApiResult<()> {
        self.set_source_enabled(id, true)
    }
}

impl OutputsApi for FakeCollector {
    fn discord_web_hook(&self) -> &dyn DiscordWebHooksApi {
        self
    }
}

#[async_trait]
impl DiscordWebHooksApi for FakeCollector {
    async fn list(&self) -> ApiResult<Vec<DiscordWebHook>> {
        self.check()?;
        Ok(self.state.lock().unwrap().webhooks.clone())
    }

    async fn get(&self, id: Uuid) -> ApiResult<DiscordWebHook> {
        self.check()?;
        let state = self.state.lock().unwrap();
        state
            .webhooks
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or_else(|| not_found("webhook"))
    }

    async fn get_by_server_and_channel(&self, server: &str, channel: &str) -> ApiResult<Vec<DiscordWebHook>> {
        self.check()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .webhooks
            .iter()
            .filter(|h| h.server == server && h.channel == channel)
            .cloned()
            .collect())
    }

    async fn new(&self, server: &str, channel: &str, url: &str) -> ApiResult<()> {
        self.check()?;
        let mut hook = webhook(server, channel);
        hook.url = url.to_string();
        self.state.lock().unwrap().webhooks.push(hook);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ApiResult<()> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.webhooks.retain(|h| h.id != id);
        state.subscriptions.retain(|s| s.discord_web_hook_id != id);
        Ok(())
    }

    async fn disable(&self, id: Uuid) -> ApiResult<()> {
        self.set_webhook_enabled(id, false)
    }

    async fn enable(&self, id: Uuid) -> ApiResult<()> {
        self.set_webhook_enabled(id, true)
    }
}

#[async_trait]
impl SubscriptionsApi for FakeCollector {
    async fn list(&self) -> ApiResult<Vec<Subscription>> {
        self.check()?;
        Ok(self.state.lock().unwrap().subscriptions.clone())
    }

    async fn list_details(&self) -> ApiResult<Vec<SubscriptionDetails>> {
        self.check()?;
        let state = self.state.lock().unwrap();
        let details = state
            .subscriptions
            .iter()
            .filter_map(|sub| {
                let source = state.sources.iter().find(|s| s.id == sub.source_id)?;
                let hook = state.webhooks.iter().find(|h| h.id == sub.discord_web_hook_id)?;
                Some(SubscriptionDetails {
                    id: sub.id,
                    source: source.clone(),
                    discord_web_hook: hook.clone(),
                })
            })
            .collect();
        Ok(details)
    }

    async fn get_by_discord_id(&self, id: Uuid) -> ApiResult<Vec<Subscription>> {
        self.check()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .subscriptions
            .iter()
            .filter(|s| s.discord_web_hook_id == id)
            .copied()
            .collect())
    }

    async fn get_by_source_id(&self, id: Uuid) -> ApiResult<Vec<Subscription>> {
        self.check()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .subscriptions
            .iter()
            .filter(|s| s.source_id == id)
            .copied()
            .collect())
    }

    async fn new(&self, discord_web_hook_id: Uuid, source_id: Uuid) -> ApiResult<()> {
        self.check()?;
        self.state.lock().unwrap().subscriptions.push(Subscription {
            id: Uuid::new_v4(),
            discord_web_hook_id,
            source_id,
        });
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ApiResult<()> {
        self.check()?;
        self.state.lock().unwrap().subscriptions.retain(|s| s.id != id);
        Ok(())
    }
}

#[async_trait]
impl QueueApi for FakeCollector {
    async fn list_discord_web_hooks(&self) -> ApiResult<Vec<ArticleDetails>> {
        self.check()?;
        Ok(self.state.lock().unwrap().queue.clone())
    }
}
