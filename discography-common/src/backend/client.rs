//! Backend client for the hosted REST query API
//!
//! Speaks the PostgREST dialect exposed under `{endpoint}/rest/v1/{table}`.
//! Every request carries the access key twice, as the `apikey` header and
//! as a bearer token, and is bounded by a client-side timeout.

use crate::backend::query::Query;
use crate::{Error, Result};
use reqwest::{header, Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

/// Path prefix of the REST interface below the endpoint URL
const REST_PATH: [&str; 2] = ["rest", "v1"];

/// Media type asking the backend for one JSON object instead of an array
const SINGLE_OBJECT_MEDIA_TYPE: &str = "application/vnd.pgrst.object+json";

/// Error code the backend uses when a single-object request matched zero
/// or several rows
const NO_SINGLE_ROW_CODE: &str = "PGRST116";

/// User-Agent header
const USER_AGENT: &str = concat!("discography/", env!("CARGO_PKG_VERSION"));

/// Connection handle through which all catalog queries are issued
///
/// Holds no per-request state; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    endpoint: Url,
}

/// Error body returned by the backend on non-success statuses
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl BackendClient {
    /// Build a client from optional configuration values.
    ///
    /// Returns `None` when either value is missing or empty, or when the
    /// endpoint URL is malformed. The malformed case is logged rather than
    /// returned so that startup continues in unconfigured mode.
    pub fn initialize(
        endpoint_url: Option<&str>,
        access_key: Option<&str>,
        timeout: Duration,
    ) -> Option<Self> {
        let endpoint_url = endpoint_url.map(str::trim).filter(|s| !s.is_empty());
        let access_key = access_key.map(str::trim).filter(|s| !s.is_empty());

        let (Some(endpoint_url), Some(access_key)) = (endpoint_url, access_key) else {
            info!("Backend URL or access key not set; running unconfigured");
            return None;
        };

        match Self::connect(endpoint_url, access_key, timeout) {
            Ok(client) => {
                info!(endpoint = %client.endpoint(), "Backend client initialized");
                Some(client)
            }
            Err(e) => {
                error!("Error initializing backend client: {}", e);
                None
            }
        }
    }

    /// Build a client, reporting why the values were rejected
    pub fn connect(endpoint_url: &str, access_key: &str, timeout: Duration) -> Result<Self> {
        let endpoint = parse_endpoint(endpoint_url)?;

        let mut api_key = header::HeaderValue::from_str(access_key)
            .map_err(|_| Error::Config("Access key is not a valid header value".to_string()))?;
        api_key.set_sensitive(true);
        let mut bearer = header::HeaderValue::from_str(&format!("Bearer {}", access_key))
            .map_err(|_| Error::Config("Access key is not a valid header value".to_string()))?;
        bearer.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(header::AUTHORIZATION, bearer);

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, endpoint })
    }

    /// Endpoint this client is bound to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL for `query`
    pub fn request_url(&self, query: &Query) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Endpoint cannot carry a path: {}", self.endpoint)))?
            .pop_if_empty()
            .extend(REST_PATH)
            .push(query.table());
        url.query_pairs_mut().extend_pairs(query.query_pairs());
        Ok(url)
    }

    /// Run `query` and decode every returned row
    pub async fn select<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>> {
        let response = self.send(query).await?;
        let response = check_status(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Run `query` expecting exactly one row.
    ///
    /// Zero (or several) matching rows yield `Ok(None)`.
    pub async fn select_single<T: DeserializeOwned>(&self, query: &Query) -> Result<Option<T>> {
        let query = if query.is_single() {
            query.clone()
        } else {
            query.clone().single()
        };

        let response = self.send(&query).await?;
        if response.status() == StatusCode::NOT_ACCEPTABLE {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return match serde_json::from_str::<BackendErrorBody>(&text) {
                Ok(body) if body.code.as_deref() == Some(NO_SINGLE_ROW_CODE) => {
                    debug!(table = query.table(), "No single row matched");
                    Ok(None)
                }
                _ => Err(backend_error(status, &text)),
            };
        }

        let response = check_status(response).await?;
        let body = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&body)?))
    }

    async fn send(&self, query: &Query) -> Result<Response> {
        let url = self.request_url(query)?;
        debug!(table = query.table(), url = %url, "Backend query");

        let mut request = self.http.get(url);
        if query.is_single() {
            request = request.header(header::ACCEPT, SINGLE_OBJECT_MEDIA_TYPE);
        }
        Ok(request.send().await?)
    }
}

/// Validate the endpoint: an absolute http(s) URL that can carry a path
fn parse_endpoint(endpoint_url: &str) -> Result<Url> {
    let url = Url::parse(endpoint_url)
        .map_err(|e| Error::Config(format!("Invalid backend URL '{}': {}", endpoint_url, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "Invalid backend URL '{}': must be http or https",
            endpoint_url
        )));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(Error::Config(format!(
            "Invalid backend URL '{}': missing host",
            endpoint_url
        )));
    }

    Ok(url)
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    Err(backend_error(status, &text))
}

fn backend_error(status: StatusCode, text: &str) -> Error {
    let message = serde_json::from_str::<BackendErrorBody>(text)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| text.to_string());
    Error::Backend {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::query::Order;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_initialize_requires_both_values() {
        assert!(BackendClient::initialize(None, Some("key"), TIMEOUT).is_none());
        assert!(BackendClient::initialize(Some("https://x.supabase.co"), None, TIMEOUT).is_none());
        assert!(BackendClient::initialize(Some(""), Some("key"), TIMEOUT).is_none());
        assert!(BackendClient::initialize(Some("https://x.supabase.co"), Some(" "), TIMEOUT).is_none());
    }

    #[test]
    fn test_initialize_rejects_malformed_url() {
        assert!(BackendClient::initialize(Some("not a url"), Some("key"), TIMEOUT).is_none());
        assert!(BackendClient::initialize(Some("your-project-ref"), Some("key"), TIMEOUT).is_none());
        assert!(BackendClient::initialize(Some("mailto:me@example.com"), Some("key"), TIMEOUT).is_none());
    }

    #[test]
    fn test_connect_reports_reason() {
        let err = BackendClient::connect("ftp://example.com", "key", TIMEOUT).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = BackendClient::connect("https://example.com", "bad\nkey", TIMEOUT).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_initialize_valid() {
        let client = BackendClient::initialize(Some("https://x.supabase.co"), Some("anon"), TIMEOUT);
        assert!(client.is_some());
    }

    #[test]
    fn test_request_url_layout() {
        let client = BackendClient::connect("https://x.supabase.co", "anon", TIMEOUT).unwrap();
        let query = Query::from("Track")
            .eq("AlbumId", 12)
            .order("TrackId", Order::Ascending);
        let url = client.request_url(&query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://x.supabase.co/rest/v1/Track?select=*&AlbumId=eq.12&order=TrackId.asc"
        );
    }

    #[test]
    fn test_request_url_keeps_endpoint_path() {
        let client = BackendClient::connect("http://localhost:54321/proxy/", "anon", TIMEOUT).unwrap();
        let url = client.request_url(&Query::from("Album")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:54321/proxy/rest/v1/Album?select=*");
    }

    #[test]
    fn test_backend_error_prefers_message_field() {
        let err = backend_error(
            StatusCode::BAD_REQUEST,
            r#"{"code":"42P01","message":"relation \"Albums\" does not exist"}"#,
        );
        match err {
            Error::Backend { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "relation \"Albums\" does not exist");
            }
            other => panic!("unexpected error {:?}", other),
        }

        let err = backend_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "Backend error 502: upstream down");
    }
}
