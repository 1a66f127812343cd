//! Client for the newsbot collector REST API.

pub mod articles;
pub mod client;
pub mod dto;
pub mod errors;
pub mod models;
pub mod outputs;
pub mod queue;
pub mod rest;
pub mod sources;
pub mod subscriptions;
pub mod traits;
pub mod types;

pub use client::CollectorClient;
pub use errors::{ApiError, ApiResult};
pub use models::{Article, ArticleDetails, DiscordWebHook, Source, Subscription, SubscriptionDetails};
pub use traits::{
    ArticlesApi, CollectorApi, DiscordWebHooksApi, OutputsApi, QueueApi, SourcesApi, SubscriptionsApi,
};

use uuid::Uuid;

/// Parses an id taken from a route parameter or form field.
pub fn parse_id(raw: &str) -> ApiResult<Uuid> {
    Ok(Uuid::parse_str(raw.trim())?)
}

/// Page filters are only sent from page 1 upwards.
pub(crate) fn page_param(page: Option<u32>) -> Option<String> {
    page.filter(|page| *page >= 1).map(|page| page.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_trims_and_validates() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&format!(" {id} ")).unwrap(), id);
        assert!(matches!(parse_id("42"), Err(ApiError::Validation(_))));
    }

    #[test]
    fn page_zero_is_dropped() {
        assert_eq!(page_param(None), None);
        assert_eq!(page_param(Some(0)), None);
        assert_eq!(page_param(Some(3)).as_deref(), Some("3"));
    }
}
