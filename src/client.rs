//! Asynchronous entry points for shortening and lengthening URLs.
//!
//! Both operations return to the caller immediately and run on the tokio
//! runtime. The outcome is delivered once through the supplied
//! [`Completion`].
//!
//! ```rust,ignore
//! let client = UrlShortenerClient::new(&ClientConfig::default())?;
//!
//! let (tx, rx) = tokio::sync::oneshot::channel::<Option<String>>();
//! client.shorten_url(tx, "https://example.com/very/long/path");
//! let short_url: Option<String> = rx.await?;
//! ```

use std::sync::Arc;

use reqwest::Client;
use tokio::task::JoinHandle;
use tracing::debug;
use url::Url;

use crate::application::services::UrlService;
use crate::config::ClientConfig;
use crate::domain::clients::{RedirectResolver, ShorteningApi};
use crate::domain::{Completion, is_short_url};
use crate::error::{ClientError, ClientResult};
use crate::infrastructure::http::{HttpRedirectResolver, HttpShorteningApi};

/// Façade over [`UrlService`] that dispatches each call to a background task.
///
/// Cloning is cheap; clones share the underlying HTTP connection pools.
pub struct UrlShortenerClient<A = HttpShorteningApi, R = HttpRedirectResolver>
where
    A: ShorteningApi,
    R: RedirectResolver,
{
    service: Arc<UrlService<A, R>>,
}

impl<A: ShorteningApi, R: RedirectResolver> Clone for UrlShortenerClient<A, R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl UrlShortenerClient {
    /// Builds a client backed by the HTTP implementations.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if `api_url` is not a valid URL or
    /// `application_name` is not a valid header value, and
    /// [`ClientError::Transport`] if the HTTP clients cannot be built.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let endpoint = Url::parse(&config.api_url).map_err(|e| {
            ClientError::Configuration(format!("Invalid shortening API URL: {}", e))
        })?;

        let user_agent = reqwest::header::HeaderValue::from_str(&config.application_name)
            .map_err(|e| ClientError::Configuration(format!("Invalid application name: {}", e)))?;

        let api_client = Client::builder().user_agent(user_agent.clone()).build()?;
        let redirect_client = HttpRedirectResolver::client_builder()
            .user_agent(user_agent)
            .build()?;

        let shortening_api = HttpShorteningApi::new(api_client, endpoint, config.api_key.clone());
        let redirect_resolver = HttpRedirectResolver::new(redirect_client);

        Ok(Self::with_service(UrlService::new(
            Arc::new(shortening_api),
            Arc::new(redirect_resolver),
        )))
    }

    /// See [`crate::domain::is_short_url`].
    pub fn is_short_url(url: &str) -> bool {
        is_short_url(url)
    }
}

impl<A, R> UrlShortenerClient<A, R>
where
    A: ShorteningApi + 'static,
    R: RedirectResolver + 'static,
{
    /// Wraps an existing service.
    pub fn with_service(service: UrlService<A, R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns the underlying service for callers already in async code.
    pub fn service(&self) -> &UrlService<A, R> {
        &self.service
    }

    /// Shortens `long_url` in the background.
    ///
    /// Returns without waiting for the network. `callback` receives the short
    /// URL, or `None` on failure, exactly once. The returned handle may be
    /// awaited or dropped; dropping it does not cancel the operation.
    ///
    /// Must be called from within a tokio runtime.
    pub fn shorten_url<C: Completion>(
        &self,
        callback: C,
        long_url: impl Into<String>,
    ) -> JoinHandle<()> {
        let long_url = long_url.into();
        debug!("Dispatching shorten for {}", long_url);

        let service = Arc::clone(&self.service);
        tokio::spawn(async move {
            let short_url = service.shorten(&long_url).await;
            callback.complete(short_url);
        })
    }

    /// Lengthens `short_url` in the background.
    ///
    /// Returns without waiting for the network. `callback` receives the
    /// redirect target, the original `short_url` when no redirect was offered,
    /// or `None` on failure, exactly once.
    ///
    /// Must be called from within a tokio runtime.
    pub fn lengthen_short_url<C: Completion>(
        &self,
        callback: C,
        short_url: impl Into<String>,
    ) -> JoinHandle<()> {
        let short_url = short_url.into();
        debug!("Dispatching lengthen for {}", short_url);

        let service = Arc::clone(&self.service);
        tokio::spawn(async move {
            let long_url = service.lengthen(&short_url).await;
            callback.complete(long_url);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clients::{MockRedirectResolver, MockShorteningApi};
    use crate::domain::{UrlEvent, lengthened_event, shortened_event};
    use std::sync::Mutex;
    use tokio::sync::{mpsc, oneshot};

    fn client(
        api: MockShorteningApi,
        resolver: MockRedirectResolver,
    ) -> UrlShortenerClient<MockShorteningApi, MockRedirectResolver> {
        UrlShortenerClient::with_service(UrlService::new(Arc::new(api), Arc::new(resolver)))
    }

    #[tokio::test]
    async fn test_shorten_url_returns_before_callback() {
        let mut mock_api = MockShorteningApi::new();
        mock_api
            .expect_insert()
            .times(1)
            .returning(|_| Ok("http://goo.gl/XYZ".to_string()));

        let order = Arc::new(Mutex::new(Vec::new()));
        let callback_order = order.clone();

        let handle = client(mock_api, MockRedirectResolver::new()).shorten_url(
            move |short_url: Option<String>| {
                callback_order
                    .lock()
                    .unwrap()
                    .push(format!("callback:{}", short_url.unwrap_or_default()));
            },
            "http://example.com/long/path",
        );
        order.lock().unwrap().push("returned".to_string());

        handle.await.unwrap();

        assert_eq!(
            *order.lock().unwrap(),
            vec!["returned".to_string(), "callback:http://goo.gl/XYZ".to_string()]
        );
    }

    #[tokio::test]
    async fn test_lengthen_short_url_returns_before_callback() {
        let mut mock_resolver = MockRedirectResolver::new();
        mock_resolver
            .expect_location()
            .times(1)
            .returning(|_| Ok(Some("http://example.com/target".to_string())));

        let order = Arc::new(Mutex::new(Vec::new()));
        let callback_order = order.clone();

        let handle = client(MockShorteningApi::new(), mock_resolver).lengthen_short_url(
            move |long_url: Option<String>| {
                callback_order
                    .lock()
                    .unwrap()
                    .push(format!("callback:{}", long_url.unwrap_or_default()));
            },
            "http://goo.gl/abc",
        );
        order.lock().unwrap().push("returned".to_string());

        handle.await.unwrap();

        assert_eq!(
            *order.lock().unwrap(),
            vec![
                "returned".to_string(),
                "callback:http://example.com/target".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_shorten_url_failure_notifies_absent_once() {
        let mut mock_api = MockShorteningApi::new();
        mock_api
            .expect_insert()
            .times(1)
            .returning(|_| Err(ClientError::EmptyResponse));

        let (tx, rx) = oneshot::channel::<Option<String>>();
        client(mock_api, MockRedirectResolver::new()).shorten_url(tx, "http://example.com/");

        assert_eq!(rx.await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_lengthen_malformed_notifies_absent() {
        let (tx, rx) = oneshot::channel::<Option<String>>();
        client(MockShorteningApi::new(), MockRedirectResolver::new())
            .lengthen_short_url(tx, "not a url");

        assert_eq!(rx.await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_dropped_handle_still_completes() {
        let mut mock_resolver = MockRedirectResolver::new();
        mock_resolver
            .expect_location()
            .times(1)
            .returning(|_| Ok(None));

        let (tx, rx) = oneshot::channel::<Option<String>>();
        drop(
            client(MockShorteningApi::new(), mock_resolver)
                .lengthen_short_url(tx, "https://example.com/page"),
        );

        assert_eq!(rx.await.unwrap().as_deref(), Some("https://example.com/page"));
    }

    #[tokio::test]
    async fn test_both_operations_share_event_channel() {
        let mut mock_api = MockShorteningApi::new();
        mock_api
            .expect_insert()
            .times(1)
            .returning(|_| Ok("http://goo.gl/XYZ".to_string()));
        let mut mock_resolver = MockRedirectResolver::new();
        mock_resolver
            .expect_location()
            .times(1)
            .returning(|_| Ok(Some("http://example.com/target".to_string())));

        let client = client(mock_api, mock_resolver);
        let (tx, mut rx) = mpsc::channel(2);

        let first = client.shorten_url(shortened_event(tx.clone()), "http://example.com/long");
        let second = client.lengthen_short_url(lengthened_event(tx), "http://goo.gl/XYZ");
        first.await.unwrap();
        second.await.unwrap();

        let mut events = vec![rx.recv().await.unwrap(), rx.recv().await.unwrap()];
        events.sort_by_key(|event| matches!(event, UrlEvent::Lengthened(_)));

        assert_eq!(
            events,
            vec![
                UrlEvent::Shortened(Some("http://goo.gl/XYZ".to_string())),
                UrlEvent::Lengthened(Some("http://example.com/target".to_string())),
            ]
        );
    }

    #[test]
    fn test_is_short_url_delegates_to_classifier() {
        assert!(UrlShortenerClient::is_short_url("https://goo.gl/abc"));
        assert!(!UrlShortenerClient::is_short_url("https://example.com/abc"));
    }

    #[test]
    fn test_new_rejects_invalid_api_url() {
        let config = ClientConfig {
            api_url: "not a url".to_string(),
            ..ClientConfig::default()
        };

        assert!(matches!(
            UrlShortenerClient::new(&config),
            Err(ClientError::Configuration(_))
        ));
    }

    #[test]
    fn test_new_with_defaults() {
        assert!(UrlShortenerClient::new(&ClientConfig::default()).is_ok());
    }
}
