use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::error::{BaseUrlError, ClientError, TransportError};
use crate::api::request::ApiRequest;
use crate::api::AlbumsApi;
use crate::models::{Album, Photo, User};

/// Backend every request goes to unless a test points the client elsewhere.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Parse a base URL that request paths can be joined onto.
///
/// Only absolute http(s) URLs with a host and no query or fragment are
/// accepted. The returned path always ends with `/`, so a base such as
/// `http://host/api` keeps its `api` segment when resources are joined.
///
/// # Errors
/// Returns a [`BaseUrlError`] describing the first problem found.
pub fn parse_base_url(raw: &str) -> Result<Url, BaseUrlError> {
    let mut url = Url::parse(raw).map_err(|source| BaseUrlError::Parse {
        url: raw.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(BaseUrlError::UnsupportedScheme {
            url: raw.to_string(),
            scheme: url.scheme().to_string(),
        });
    }
    if !url.has_host() {
        return Err(BaseUrlError::MissingHost {
            url: raw.to_string(),
        });
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(BaseUrlError::HasQuery {
            url: raw.to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Stateless reqwest-backed client for the albums backend.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client against the compiled-in backend.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Build a client against another base URL (a local mock server in tests).
    ///
    /// # Errors
    /// Returns an error when `base_url` is not a usable http(s) URL or the
    /// reqwest client cannot be constructed.
    pub fn with_base_url(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        let base_url = parse_base_url(base_url.as_ref())?;
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for a request, including its query parameter.
    ///
    /// # Errors
    /// Returns the parse error if the resource path cannot be joined onto the
    /// base URL.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url, url::ParseError> {
        let mut url = self
            .base_url
            .join(request.path().trim_start_matches('/'))?;
        if let Some((name, value)) = request.query() {
            url.query_pairs_mut().append_pair(name, &value.to_string());
        }
        Ok(url)
    }

    /// GET a resource and decode the body as a JSON array of `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Vec<T>, TransportError> {
        let resource = request.resource();
        let url = self
            .url_for(&request)
            .map_err(|e| TransportError::invalid_url(resource, &e))?;
        tracing::debug!(resource, url = %url, "Sending request");

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| TransportError::connection(resource, &e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::connection(resource, &e))?;

        if !status.is_success() {
            return Err(TransportError::status(resource, status, body.as_ref()));
        }

        let items: Vec<T> = serde_json::from_slice(body.as_ref())
            .map_err(|e| TransportError::decode(resource, &e))?;
        tracing::debug!(resource, count = items.len(), "Decoded response");
        Ok(items)
    }
}

#[async_trait]
impl AlbumsApi for ApiClient {
    async fn fetch_users(&self) -> Result<Vec<User>, TransportError> {
        self.get(ApiRequest::GetUsers).await
    }

    async fn fetch_albums(&self, user_id: i64) -> Result<Vec<Album>, TransportError> {
        self.get(ApiRequest::GetAlbums { user_id }).await
    }

    async fn fetch_photos(&self, album_id: i64) -> Result<Vec<Photo>, TransportError> {
        self.get(ApiRequest::GetPhotos { album_id }).await
    }
}
