// File: console/src/http/client.rs
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::constants::{headers, paths, properties};
use crate::errors::HttpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClientName {
    Raw,
    Host,
    Agents,
    Api,
}

impl ClientName {
    pub const ALL: [ClientName; 4] = [
        ClientName::Raw,
        ClientName::Host,
        ClientName::Agents,
        ClientName::Api,
    ];

    /// Name the client is published under in the global properties
    pub fn property(self) -> &'static str {
        match self {
            ClientName::Raw => properties::RAW,
            ClientName::Host => properties::HOST,
            ClientName::Agents => properties::AGENTS,
            ClientName::Api => properties::API,
        }
    }

    pub fn base_path(self) -> Option<&'static str> {
        match self {
            ClientName::Raw => None,
            ClientName::Host => Some(paths::HOST),
            ClientName::Agents => Some(paths::AGENTS),
            ClientName::Api => Some(paths::API),
        }
    }

    pub fn is_scoped(self) -> bool {
        self.base_path().is_some()
    }
}

/// Construction-time settings of a client. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDescriptor {
    name: ClientName,
    base_path: Option<&'static str>,
    default_headers: BTreeMap<String, String>,
}

impl ClientDescriptor {
    pub fn for_client(name: ClientName) -> Self {
        let mut default_headers = BTreeMap::new();
        if name.is_scoped() {
            default_headers.insert(headers::CONTENT_TYPE.to_string(), headers::JSON.to_string());
        }

        Self {
            name,
            base_path: name.base_path(),
            default_headers,
        }
    }

    pub fn name(&self) -> ClientName {
        self.name
    }

    pub fn base_url(&self) -> Option<&'static str> {
        self.base_path
    }

    pub fn default_headers(&self) -> &BTreeMap<String, String> {
        &self.default_headers
    }

    fn header_map(&self) -> Result<HeaderMap, HttpError> {
        let mut map = HeaderMap::with_capacity(self.default_headers.len());
        for (name, value) in &self.default_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| HttpError::ClientBuild {
                client: self.name.property().to_string(),
                reason: format!("invalid header name {}: {}", name, e),
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| HttpError::ClientBuild {
                client: self.name.property().to_string(),
                reason: format!("invalid value for header {}: {}", name, e),
            })?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

/// A request client bound to one descriptor and the backend origin
#[derive(Debug, Clone)]
pub struct ApiClient {
    descriptor: ClientDescriptor,
    origin: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(descriptor: ClientDescriptor, origin: Url) -> Result<Self, HttpError> {
        let client = Client::builder()
            .default_headers(descriptor.header_map()?)
            .build()
            .map_err(|e| HttpError::ClientBuild {
                client: descriptor.name().property().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            descriptor,
            origin,
            client,
        })
    }

    pub fn defaults(&self) -> &ClientDescriptor {
        &self.descriptor
    }

    /// Resolve a request path the way the scoped client sends it
    pub fn url(&self, path: &str) -> Result<Url, HttpError> {
        let target = match self.descriptor.base_url() {
            Some(base) if !is_absolute_url(path) => combine_urls(base, path),
            _ => path.to_string(),
        };

        let resolved = if is_absolute_url(&target) && !target.starts_with("//") {
            Url::parse(&target)
        } else {
            self.origin.join(&target)
        };

        resolved.map_err(|e| HttpError::InvalidUrl {
            url: target,
            reason: e.to_string(),
        })
    }

    pub async fn get(&self, path: &str) -> Result<Response, HttpError> {
        let url = self.url(path)?;
        debug!("{} GET {}", self.descriptor.name().property(), url);

        let response = self.client.get(url.clone())
            .send()
            .await
            .map_err(|e| HttpError::RequestFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        Self::ensure_success(url, response).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let response = self.get(path).await?;
        Self::decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        debug!("{} POST {}", self.descriptor.name().property(), url);

        let response = self.client.post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| HttpError::RequestFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let response = Self::ensure_success(url, response).await?;
        Self::decode(response).await
    }

    async fn ensure_success(url: Url, response: Response) -> Result<Response, HttpError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(HttpError::Status {
            url: url.to_string(),
            status,
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, HttpError> {
        let url = response.url().to_string();
        response.json::<T>().await
            .map_err(|e| HttpError::InvalidResponse { url, reason: e.to_string() })
    }
}

/// `scheme://…` or protocol-relative `//…`
pub fn is_absolute_url(url: &str) -> bool {
    if url.starts_with("//") {
        return true;
    }

    match url.find("://") {
        Some(idx) if idx > 0 => {
            let scheme = &url[..idx];
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Join a base path and a relative request path with one slash between them.
///
/// All leading slashes of `relative` are dropped, but at most two trailing
/// slashes of `base`, so `"/a///"` + `"b"` keeps one extra slash.
pub fn combine_urls(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        return base.to_string();
    }
    let base = base.strip_suffix('/').unwrap_or(base);
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{}/{}", base, relative.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn origin() -> Url {
        Url::parse("http://monitor.local:8080").unwrap()
    }

    #[test_case("/api/v1/host", "", "/api/v1/host" ; "empty path keeps base")]
    #[test_case("/api/v1/", "", "/api/v1/" ; "empty path keeps trailing slash")]
    #[test_case("/api/v1/", "mode", "/api/v1/mode" ; "trailing slash not doubled")]
    #[test_case("/api/v1/agents", "/extra", "/api/v1/agents/extra" ; "leading slash not doubled")]
    #[test_case("/api/v1//", "//mode", "/api/v1/mode" ; "repeated slashes collapsed")]
    #[test_case("/api/v1///", "mode", "/api/v1//mode" ; "at most two trailing slashes stripped")]
    fn test_combine_urls(base: &str, relative: &str, expected: &str) {
        assert_eq!(combine_urls(base, relative), expected);
    }

    #[test_case("http://example.com/x", true)]
    #[test_case("HTTPS://example.com", true)]
    #[test_case("//cdn.example.com/a", true)]
    #[test_case("svn+ssh://host/repo", true)]
    #[test_case("/api/v1/host", false)]
    #[test_case("mode", false)]
    #[test_case("1http://bad", false)]
    fn test_is_absolute_url(url: &str, expected: bool) {
        assert_eq!(is_absolute_url(url), expected);
    }

    #[test]
    fn test_scoped_descriptors_carry_json_content_type() {
        for name in [ClientName::Host, ClientName::Agents, ClientName::Api] {
            let descriptor = ClientDescriptor::for_client(name);
            assert_eq!(
                descriptor.default_headers().get("Content-Type").map(String::as_str),
                Some("application/json")
            );
            assert_eq!(descriptor.base_url(), name.base_path());
        }
    }

    #[test]
    fn test_raw_descriptor_is_unscoped() {
        let descriptor = ClientDescriptor::for_client(ClientName::Raw);
        assert_eq!(descriptor.base_url(), None);
        assert!(descriptor.default_headers().is_empty());
    }

    #[test]
    fn test_scoped_url_resolution() {
        let host = ApiClient::new(ClientDescriptor::for_client(ClientName::Host), origin()).unwrap();
        let api = ApiClient::new(ClientDescriptor::for_client(ClientName::Api), origin()).unwrap();

        assert_eq!(host.url("").unwrap().as_str(), "http://monitor.local:8080/api/v1/host");
        assert_eq!(api.url("mode").unwrap().as_str(), "http://monitor.local:8080/api/v1/mode");
        assert_eq!(
            api.url("http://elsewhere:9000/status").unwrap().as_str(),
            "http://elsewhere:9000/status"
        );
    }

    #[test]
    fn test_raw_url_resolution() {
        let raw = ApiClient::new(ClientDescriptor::for_client(ClientName::Raw), origin()).unwrap();

        assert_eq!(raw.url("/api/v1/mode").unwrap().as_str(), "http://monitor.local:8080/api/v1/mode");
        assert_eq!(raw.url("http://agent-1:8080/api/v1/agent").unwrap().as_str(), "http://agent-1:8080/api/v1/agent");
    }
}
