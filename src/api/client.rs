use std::time::Duration;

use super::{
    articles::ArticlesClient,
    errors::ApiResult,
    outputs::OutputsClient,
    queue::QueueClient,
    rest::{parse_url, RestClient},
    sources::SourcesClient,
    subscriptions::SubscriptionsClient,
    traits::{ArticlesApi, CollectorApi, OutputsApi, QueueApi, SourcesApi, SubscriptionsApi},
};

/// Wires one collector endpoint into every resource client.
///
/// Holds no mutable state after construction, so a single instance is shared
/// across all request handlers.
#[derive(Debug, Clone)]
pub struct CollectorClient {
    endpoint: String,
    articles: ArticlesClient,
    sources: SourcesClient,
    outputs: OutputsClient,
    subscriptions: SubscriptionsClient,
    queue: QueueClient,
}

impl CollectorClient {
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        let rest = RestClient::new(timeout)?;
        Self::with_rest(endpoint, rest)
    }

    /// Builds the facade around an existing [`RestClient`]; all resource clients share it.
    pub fn with_rest(endpoint: &str, rest: RestClient) -> ApiResult<Self> {
        parse_url(endpoint)?;
        let endpoint = endpoint.trim_end_matches('/').to_string();

        Ok(Self {
            articles: ArticlesClient::new(endpoint.clone(), rest.clone()),
            sources: SourcesClient::new(endpoint.clone(), rest.clone()),
            outputs: OutputsClient::new(endpoint.clone(), rest.clone()),
            subscriptions: SubscriptionsClient::new(endpoint.clone(), rest.clone()),
            queue: QueueClient::new(endpoint.clone(), rest),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CollectorApi for CollectorClient {
    fn articles(&self) -> &dyn ArticlesApi {
        &self.articles
    }

    fn sources(&self) -> &dyn SourcesApi {
        &self.sources
    }

    fn outputs(&self) -> &dyn OutputsApi {
        &self.outputs
    }

    fn subscriptions(&self) -> &dyn SubscriptionsApi {
        &self.subscriptions
    }

    fn queue(&self) -> &dyn QueueApi {
        &self.queue
    }
}
