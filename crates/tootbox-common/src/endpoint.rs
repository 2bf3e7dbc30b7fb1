//! # Stateless endpoint plumbing and request/response mapping
//!
//! Mapping overview:
//! - Before anything is built, the endpoint's [`AuthContext`] picks the
//!   credential to send or refuses the call.
//! - GET/DELETE endpoints serialize their parameters into the query string;
//!   POST/PATCH endpoints into a JSON body, or a multipart body when the
//!   endpoint overrides [`Endpoint::encode_body`].
//! - Success (2xx): the body goes through the endpoint's transform
//!   ([`Single`], [`List`] or [`Acknowledge`]).
//! - Anything else: the body is read as Mastodon's `{"error": ...}` shape and
//!   surfaced as [`ApiError`].

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use bytes::Bytes;
use http::{
    HeaderMap, HeaderName, HeaderValue, Request, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, LINK},
};
use percent_encoding::{AsciiSet, CONTROLS, PercentEncode, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::{AuthContext, BearerToken};
use crate::error::{ApiError, ClientResult, DecodeError, EncodeError, TransportError};
use crate::http_client::HttpClient;
use crate::multipart::Form;

/// HTTP verb of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointMethod {
    /// GET, parameters in the query string
    Get,
    /// POST, parameters in the body
    Post,
    /// PATCH, parameters in the body
    Patch,
    /// DELETE, parameters in the query string
    Delete,
}

impl EndpointMethod {
    /// Get the HTTP method string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether parameters travel in the request body rather than the query.
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }
}

impl From<EndpointMethod> for http::Method {
    fn from(value: EndpointMethod) -> Self {
        match value {
            EndpointMethod::Get => http::Method::GET,
            EndpointMethod::Post => http::Method::POST,
            EndpointMethod::Patch => http::Method::PATCH,
            EndpointMethod::Delete => http::Method::DELETE,
        }
    }
}

/// An encoded request body and its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBody {
    /// `Content-Type` header value
    pub content_type: String,
    /// Body bytes
    pub bytes: Vec<u8>,
}

impl EncodedBody {
    /// JSON-encode `value`.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, EncodeError> {
        Ok(Self {
            content_type: "application/json".to_owned(),
            bytes: serde_json::to_vec(value)?,
        })
    }
}

impl From<Form> for EncodedBody {
    fn from(form: Form) -> Self {
        Self {
            content_type: form.content_type(),
            bytes: form.encode(),
        }
    }
}

/// Trait for Mastodon REST endpoint request types
///
/// Implemented on the parameter struct itself. Path identifiers are
/// `#[serde(skip)]` fields interpolated by [`Endpoint::path`]; every other
/// field becomes a query parameter or a body field depending on
/// [`Endpoint::METHOD`].
pub trait Endpoint: Serialize {
    /// Path template, e.g. `/api/v1/accounts/:id`
    const PATH: &'static str;

    /// HTTP verb
    const METHOD: EndpointMethod;

    /// Credential state this endpoint accepts
    const AUTH: AuthContext;

    /// OAuth scope the token needs, when the endpoint documents one
    const SCOPE: Option<&'static str>;

    /// Response transform for this endpoint
    type Response: EndpointResp;

    /// Concrete request path with identifiers filled in.
    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed(Self::PATH)
    }

    /// Encode the query string.
    ///
    /// Default implementation form-encodes `self` for GET/DELETE endpoints.
    /// Returns `None` when there is nothing to send.
    fn encode_query(&self) -> Result<Option<String>, EncodeError> {
        if Self::METHOD.has_body() {
            return Ok(None);
        }
        let qs = serde_html_form::to_string(self)?;
        Ok(if qs.is_empty() { None } else { Some(qs) })
    }

    /// Encode the request body.
    ///
    /// Default implementation serializes `self` to JSON for POST/PATCH
    /// endpoints. Upload endpoints override this with a multipart form.
    fn encode_body(&self) -> Result<Option<EncodedBody>, EncodeError> {
        if Self::METHOD.has_body() {
            Ok(Some(EncodedBody::json(self)?))
        } else {
            Ok(None)
        }
    }
}

/// Trait for endpoint response transforms
///
/// Applied to 2xx bodies only; errors are handled uniformly by [`Response`].
pub trait EndpointResp {
    /// Decoded output
    type Output;

    /// Decode a successful response body.
    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError>;
}

/// Transform for endpoints returning one JSON object.
pub struct Single<T>(PhantomData<fn() -> T>);

impl<T: DeserializeOwned> EndpointResp for Single<T> {
    type Output = T;

    fn decode_output(body: &[u8]) -> Result<T, DecodeError> {
        serde_json::from_slice(body).map_err(DecodeError::json::<T>)
    }
}

/// Transform for endpoints returning a JSON array.
///
/// Element order is the server's.
pub struct List<T>(PhantomData<fn() -> T>);

impl<T: DeserializeOwned> EndpointResp for List<T> {
    type Output = Vec<T>;

    fn decode_output(body: &[u8]) -> Result<Vec<T>, DecodeError> {
        serde_json::from_slice(body).map_err(DecodeError::json::<Vec<T>>)
    }
}

/// Transform for delete-style endpoints: any 2xx is `true`, body ignored.
pub struct Acknowledge;

impl EndpointResp for Acknowledge {
    type Output = bool;

    fn decode_output(_body: &[u8]) -> Result<bool, DecodeError> {
        Ok(true)
    }
}

// Escapes `/`, `?`, `#`, `%`, controls and the characters URLs may not carry
// raw. Sub-delimiters (`+`, `@`, `:`, `;`, ...) and `.` pass through; whole
// dot segments are rejected in `build_http_request`.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode an identifier for use as a single path segment.
pub fn path_segment(value: &str) -> PercentEncode<'_> {
    utf8_percent_encode(value, PATH_SEGMENT)
}

/// Per-request options for endpoint calls.
#[derive(Debug, Default, Clone)]
pub struct CallOptions {
    /// Bearer token for this call; overrides any client default.
    pub auth: Option<BearerToken>,
    /// Extra headers to attach to this request.
    pub extra_headers: Vec<(HeaderName, HeaderValue)>,
}

impl CallOptions {
    /// Options carrying only a bearer token.
    pub fn with_auth(token: BearerToken) -> Self {
        Self {
            auth: Some(token),
            extra_headers: Vec::new(),
        }
    }
}

/// Extension for stateless endpoint calls on any `HttpClient`.
///
/// Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use tootbox_common::endpoint::CallExt;
/// use tootbox_common::BearerToken;
///
/// let http = reqwest::Client::new();
/// let base = url::Url::parse("https://mastodon.social")?;
/// let call = http
///     .call(base)
///     .auth(BearerToken::new("ACCESS_TOKEN"))
///     .header(http::header::USER_AGENT, http::HeaderValue::from_static("tootbox-example"));
/// // let resp = call.send(&request).await?;
/// # Ok(())
/// # }
/// ```
pub trait CallExt: HttpClient {
    /// Start building a call against the given instance base URL.
    fn call<'a>(&'a self, base: Url) -> Call<'a, Self>
    where
        Self: Sized,
    {
        Call {
            client: self,
            base,
            opts: CallOptions::default(),
        }
    }
}

impl<T: HttpClient> CallExt for T {}

/// Stateless call builder.
pub struct Call<'a, C: HttpClient> {
    pub(crate) client: &'a C,
    pub(crate) base: Url,
    pub(crate) opts: CallOptions,
}

impl<'a, C: HttpClient> Call<'a, C> {
    /// Apply a bearer token to this call.
    pub fn auth(mut self, token: BearerToken) -> Self {
        self.opts.auth = Some(token);
        self
    }
    /// Add an extra header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.opts.extra_headers.push((name, value));
        self
    }
    /// Replace the builder's options entirely.
    pub fn with_options(mut self, opts: CallOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Send the given typed request and return a response wrapper.
    ///
    /// The authentication gate runs first; a refused call never reaches the
    /// transport.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self, request), fields(method = R::METHOD.as_str(), path = R::PATH)))]
    pub async fn send<R>(self, request: &R) -> ClientResult<Response<R::Response>>
    where
        R: Endpoint,
    {
        let http_request = build_http_request(&self.base, request, &self.opts)?;

        let http_response = self
            .client
            .send_http(http_request)
            .await
            .map_err(TransportError::from_client_error)?;

        Ok(process_response(http_response))
    }
}

/// Split an HTTP response into a typed [`Response`] wrapper.
///
/// Exposed to make things more easily pluggable
#[inline]
pub fn process_response<Resp>(http_response: http::Response<Vec<u8>>) -> Response<Resp>
where
    Resp: EndpointResp,
{
    let (parts, body) = http_response.into_parts();
    #[cfg(feature = "tracing")]
    if !parts.status.is_success() {
        tracing::debug!(status = %parts.status, "instance returned an error status");
    }
    Response::from_parts(parts.status, parts.headers, Bytes::from(body))
}

/// Build an HTTP request for an endpoint call given base URL and options
///
/// Fails with [`AuthError::NotAuthenticated`](crate::error::AuthError::NotAuthenticated)
/// when the endpoint needs a token and `opts` carries none.
pub fn build_http_request<R>(
    base: &Url,
    req: &R,
    opts: &CallOptions,
) -> ClientResult<Request<Vec<u8>>>
where
    R: Endpoint,
{
    let token = R::AUTH
        .select(opts.auth.as_ref(), R::PATH, R::SCOPE)
        .inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::debug!(path = R::PATH, auth = %R::AUTH, "refusing call without a token: {_e}");
        })?;

    let mut url = base.clone();
    let mut path = url.path().trim_end_matches('/').to_owned();
    path.push_str(&req.path());
    url.set_path(&path);
    // the URL parser resolves `.` and `..` segments
    if url.path() != path {
        return Err(EncodeError::PathSegment(req.path().into_owned()).into());
    }
    url.set_query(req.encode_query()?.as_deref());

    let mut builder = Request::builder()
        .method(http::Method::from(R::METHOD))
        .uri(url.as_str())
        .header(ACCEPT, "application/json");

    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, HeaderValue::try_from(token)?);
    }

    for (name, value) in &opts.extra_headers {
        builder = builder.header(name, value);
    }

    let body = match req.encode_body()? {
        Some(body) => {
            builder = builder.header(CONTENT_TYPE, body.content_type);
            body.bytes
        }
        None => Vec::new(),
    };

    Ok(builder.body(body).map_err(TransportError::from)?)
}

/// Endpoint response wrapper that owns the response buffer
///
/// Keeps status and headers around for callers that need them (e.g. the
/// `Link` header for paging). Generic over the endpoint's transform, not
/// the request.
pub struct Response<Resp>
where
    Resp: EndpointResp,
{
    _marker: PhantomData<fn() -> Resp>,
    buffer: Bytes,
    status: StatusCode,
    headers: HeaderMap,
}

impl<R> Response<R>
where
    R: EndpointResp,
{
    /// Create a new response from a buffer and status code
    pub fn new(buffer: Bytes, status: StatusCode) -> Self {
        Self::from_parts(status, HeaderMap::new(), buffer)
    }

    /// Create a new response from status, headers and body
    pub fn from_parts(status: StatusCode, headers: HeaderMap, buffer: Bytes) -> Self {
        Self {
            _marker: PhantomData,
            buffer,
            status,
            headers,
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw `Link` header, used by list endpoints for paging
    pub fn link(&self) -> Option<&str> {
        self.headers.get(LINK).and_then(|v| v.to_str().ok())
    }

    /// Get the raw buffer
    pub fn buffer(&self) -> &Bytes {
        &self.buffer
    }

    /// Apply the endpoint's transform.
    ///
    /// Non-2xx responses become [`ApiError`] regardless of transform.
    pub fn parse(&self) -> ClientResult<R::Output> {
        if self.status.is_success() {
            Ok(R::decode_output(&self.buffer)?)
        } else {
            Err(ApiError::from_response(self.status, self.buffer.clone()).into())
        }
    }

    /// Consume the response and apply the endpoint's transform.
    pub fn into_output(self) -> ClientResult<R::Output> {
        self.parse()
    }
}

impl<R: EndpointResp> fmt::Debug for Response<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("len", &self.buffer.len())
            .finish()
    }
}
