use super::paginate::{Page, PageSource};
use crate::config::Config;
use crate::error::{ContribError, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, LINK};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("contribmap/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";
const TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking GitHub REST client, built once per run and shared by every listing.
pub struct GitHubClient {
    http: Client,
    base: Url,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let base = Url::parse(&config.api_url)
            .map_err(|e| ContribError::InvalidUrl(format!("{}: {e}", config.api_url)))?;
        if base.cannot_be_a_base() {
            return Err(ContribError::InvalidUrl(config.api_url.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base,
            token: config.token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl PageSource for GitHubClient {
    fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        page: u32,
    ) -> Result<Page<T>> {
        let url = self.endpoint(path);
        tracing::debug!(%url, page, "GET");

        let mut request = self.http.get(&url).query(query).query(&[("page", page)]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = check_response(request.send()?)?;
        let next = next_page(resp.headers());

        // Contributors of an empty repository come back as 204 with no body.
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(Page { items: Vec::new(), next: None });
        }

        Ok(Page {
            items: resp.json()?,
            next,
        })
    }
}

fn check_response(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    Err(ContribError::Api {
        status: status.as_u16(),
        message: api_message(&body),
    })
}

/// GitHub error bodies look like `{"message": "...", "documentation_url": "..."}`.
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Page number of the `rel="next"` entry in a `Link` header, if present.
fn next_page(headers: &HeaderMap) -> Option<u32> {
    let link = headers.get(LINK)?.to_str().ok()?;
    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        if !parts.any(|p| p.trim() == r#"rel="next""#) {
            return None;
        }
        let url = Url::parse(target.strip_prefix('<')?.strip_suffix('>')?).ok()?;
        url.query_pairs()
            .find(|(k, _)| k == "page")
            .and_then(|(_, v)| v.parse().ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn link(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(LINK, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn next_page_from_link_header() {
        let headers = link(
            r#"<https://api.github.com/organizations/1/repos?type=public&per_page=100&page=3>; rel="next", <https://api.github.com/organizations/1/repos?type=public&per_page=100&page=7>; rel="last""#,
        );
        assert_eq!(next_page(&headers), Some(3));
    }

    #[test]
    fn last_page_has_no_next() {
        let headers = link(
            r#"<https://api.github.com/orgs/acme/repos?page=1>; rel="prev", <https://api.github.com/orgs/acme/repos?page=1>; rel="first""#,
        );
        assert_eq!(next_page(&headers), None);
        assert_eq!(next_page(&HeaderMap::new()), None);
    }

    #[test]
    fn malformed_link_is_ignored() {
        assert_eq!(next_page(&link(r#"garbage; rel="next""#)), None);
        assert_eq!(next_page(&link(r#"<https://x/y?page=abc>; rel="next""#)), None);
    }

    #[test]
    fn api_message_prefers_json_message() {
        assert_eq!(
            api_message(r#"{"message":"Not Found","documentation_url":"https://docs"}"#),
            "Not Found"
        );
        assert_eq!(api_message("  bad gateway \n"), "bad gateway");
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let config = Config::new("acme", "out.json").with_api_url("http://127.0.0.1:9/api/v3/");
        let client = GitHubClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint("/orgs/acme/repos"),
            "http://127.0.0.1:9/api/v3/orgs/acme/repos"
        );
    }

    #[test]
    fn rejects_invalid_api_url() {
        let config = Config::new("acme", "out.json").with_api_url("not a url");
        assert!(matches!(
            GitHubClient::new(&config),
            Err(ContribError::InvalidUrl(_))
        ));
    }
}
