//! The Mastodon client and its configuration.
//!
//! [`Client`] pairs an [`HttpClient`] transport with an explicit
//! [`ClientConfig`]. It holds no mutable state, so a shared reference can be
//! used from any number of tasks. Operations live in the submodules, grouped
//! the same way as the request types in [`tootbox_api`].

mod accounts;
mod graph;
mod oauth;
mod tags;

use http::{HeaderValue, header::USER_AGENT};
use tootbox_common::endpoint::{CallExt, CallOptions, Endpoint, Response};
use tootbox_common::http_client::HttpClient;
use tootbox_common::{BearerToken, ClientResult};
use url::Url;

/// `User-Agent` sent when the configuration does not name one.
pub const DEFAULT_USER_AGENT: &str = concat!("tootbox/", env!("CARGO_PKG_VERSION"));

/// Where and as whom a [`Client`] talks.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Instance base URL, e.g. `https://mastodon.social`
    pub base: Url,
    /// Default bearer token; `None` for anonymous use
    pub token: Option<BearerToken>,
    /// `User-Agent` header value; `None` sends no header
    pub user_agent: Option<HeaderValue>,
}

impl ClientConfig {
    /// Anonymous configuration for the instance at `base`.
    pub fn new(base: Url) -> Self {
        Self {
            base,
            token: None,
            user_agent: Some(HeaderValue::from_static(DEFAULT_USER_AGENT)),
        }
    }

    /// Use `token` for every call that accepts one.
    pub fn with_token(mut self, token: impl Into<BearerToken>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Send `user_agent` instead of the default.
    pub fn with_user_agent(mut self, user_agent: HeaderValue) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Options for one call: an explicit token wins over the configured one,
    /// and the configured user agent applies unless the call sets its own.
    pub fn call_options(&self, opts: CallOptions) -> CallOptions {
        let CallOptions {
            auth,
            extra_headers,
        } = opts;
        let mut headers = Vec::with_capacity(extra_headers.len() + 1);
        match &self.user_agent {
            Some(ua) if !extra_headers.iter().any(|(name, _)| *name == USER_AGENT) => {
                headers.push((USER_AGENT, ua.clone()));
            }
            _ => {}
        }
        headers.extend(extra_headers);
        CallOptions {
            auth: auth.or_else(|| self.token.clone()),
            extra_headers: headers,
        }
    }
}

/// Typed Mastodon client.
///
/// Every operation is one HTTP round trip. Nothing is retried or cached; the
/// first error is returned as is.
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> miette::Result<()> {
/// use tootbox::{Client, ClientConfig};
///
/// let base = url::Url::parse("https://mastodon.social").unwrap();
/// let client = Client::with_reqwest(ClientConfig::new(base));
/// let account = client.lookup_by_acct("Gargron").await?;
/// println!("{} has {:?} followers", account.username, account.followers_count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<C> {
    http: C,
    config: ClientConfig,
}

impl<C> Client<C> {
    /// Create a client over the given transport.
    pub fn new(http: C, config: ClientConfig) -> Self {
        Self { http, config }
    }

    /// The client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying transport.
    pub fn http(&self) -> &C {
        &self.http
    }

    /// Same transport, different configuration (another account or instance).
    pub fn with_config(&self, config: ClientConfig) -> Self
    where
        C: Clone,
    {
        Self {
            http: self.http.clone(),
            config,
        }
    }
}

#[cfg(feature = "reqwest-client")]
impl Client<reqwest::Client> {
    /// Create a client backed by a fresh `reqwest::Client`.
    pub fn with_reqwest(config: ClientConfig) -> Self {
        Self::new(reqwest::Client::new(), config)
    }
}

impl<C: HttpClient> Client<C> {
    /// Send any endpoint request with the configured credentials.
    ///
    /// The typed methods are thin wrappers around this; use it directly when
    /// the [`Response`] headers are needed (e.g. `Link` for paging).
    pub async fn send<R>(&self, request: &R) -> ClientResult<Response<R::Response>>
    where
        R: Endpoint,
    {
        self.send_with(request, CallOptions::default()).await
    }

    /// Send with per-call options layered over the configuration.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all, fields(instance = %self.config.base, path = R::PATH)))]
    pub async fn send_with<R>(
        &self,
        request: &R,
        opts: CallOptions,
    ) -> ClientResult<Response<R::Response>>
    where
        R: Endpoint,
    {
        let opts = self.config.call_options(opts);
        self.http
            .call(self.config.base.clone())
            .with_options(opts)
            .send(request)
            .await
    }

    pub(crate) async fn output<R>(
        &self,
        request: &R,
    ) -> ClientResult<<R::Response as tootbox_common::EndpointResp>::Output>
    where
        R: Endpoint,
    {
        self.send(request).await?.into_output()
    }
}
