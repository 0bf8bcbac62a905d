// src/fetch/mod.rs

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::FetchFailure;

pub mod types;
pub mod urls;

pub use types::{JsonObject, OrganizationResponse, SearchResponse};

/// Thin wrapper over the two Nonprofit Explorer endpoints.
///
/// Every call is a single GET: no retries, no backoff, no timeout beyond the
/// client's defaults. Anything other than `200 OK` with a decodable body comes
/// back as a [`FetchFailure`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    /// URL a detail lookup for `ein` goes to.
    pub fn organization_url(&self, ein: &str) -> Result<Url, FetchFailure> {
        urls::organization_url(&self.base, non_empty(ein)?)
    }

    /// URL a name search for `name` goes to.
    pub fn search_url(&self, name: &str) -> Result<Url, FetchFailure> {
        urls::search_url(&self.base, non_empty(name)?)
    }

    /// Detail lookup for one EIN.
    pub async fn organization(&self, ein: &str) -> Result<OrganizationResponse, FetchFailure> {
        let url = self.organization_url(ein)?;
        self.get_json(url).await
    }

    /// Name search; results come back in the API's ranking order.
    pub async fn search(&self, name: &str) -> Result<SearchResponse, FetchFailure> {
        let url = self.search_url(name)?;
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchFailure> {
        debug!(%url, "GET");
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if status != StatusCode::OK {
            debug!(%url, status = status.as_u16(), "non-200 response");
            return Err(FetchFailure::Status(status.as_u16()));
        }
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn non_empty(key: &str) -> Result<&str, FetchFailure> {
    let key = key.trim();
    if key.is_empty() {
        Err(FetchFailure::EmptyKey)
    } else {
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        let base = Url::parse(&format!("{}/", server.uri())).unwrap();
        ApiClient::new(Client::new(), base)
    }

    #[tokio::test]
    async fn test_organization_ok() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/organizations/530196605.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "organization": {"ein": 530196605, "name": "AMERICAN NATIONAL RED CROSS"},
                "filings_with_data": [{"tax_prd_yr": 2018}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let org = client_for(&server).organization("530196605").await.unwrap();
        assert_eq!(org.organization["name"].get(), r#""AMERICAN NATIONAL RED CROSS""#);
        assert_eq!(org.filings_with_data.len(), 1);
    }

    #[tokio::test]
    async fn test_search_sends_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .and(query_param("q", "red cross"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "organizations": [{"ein": 530196605, "name": "AMERICAN NATIONAL RED CROSS"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let found = client_for(&server).search("red cross").await.unwrap();
        assert_eq!(found.organizations.len(), 1);
    }

    #[tokio::test]
    async fn test_non_200_is_a_status_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/organizations/000000000.json"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .organization("000000000")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchFailure::Status(404)));
    }

    #[tokio::test]
    async fn test_other_success_codes_are_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = client_for(&server).search("anything").await.unwrap_err();
        assert!(matches!(err, FetchFailure::Status(204)));
    }

    #[tokio::test]
    async fn test_bad_body_is_a_decode_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/organizations/1.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).organization("1").await.unwrap_err();
        assert!(matches!(err, FetchFailure::Decode(_)));
    }

    #[tokio::test]
    async fn test_empty_key_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server).organization("   ").await.unwrap_err();
        assert!(matches!(err, FetchFailure::EmptyKey));
    }

    #[test]
    fn test_request_urls_use_trimmed_key() {
        let api = ApiClient::new(
            Client::new(),
            Url::parse("https://projects.propublica.org/nonprofits/api/v2/").unwrap(),
        );
        assert_eq!(
            api.organization_url(" 142007220 ").unwrap().path(),
            "/nonprofits/api/v2/organizations/142007220.json"
        );
        assert_eq!(api.search_url("  red cross ").unwrap().query(), Some("q=red+cross"));
        assert!(matches!(api.search_url(""), Err(FetchFailure::EmptyKey)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_transport_failure() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let base = Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap();
        let api = ApiClient::new(Client::new(), base);
        let err = api.search("x").await.unwrap_err();
        assert!(matches!(err, FetchFailure::Transport(_)));
    }
}
