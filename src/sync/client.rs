//! HTTP client for the quote server
//!
//! The server is a mock posts endpoint: its items are turned into quotes by
//! taking their title.

use crate::storage::settings::AppSettings;
use crate::sync::SyncError;
use crate::types::quote::Quote;
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("QuoteBook/", env!("CARGO_PKG_VERSION"));
const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// One item as returned by the server; only the title becomes quote text
#[derive(Debug, Clone, Deserialize)]
pub struct ServerPost {
    #[serde(default)]
    pub title: String,
}

/// Turn the first `limit` server items into quotes
pub fn quotes_from_posts(posts: Vec<ServerPost>, limit: usize) -> Vec<Quote> {
    posts
        .into_iter()
        .take(limit)
        .map(|post| Quote::from_server(post.title))
        .collect()
}

/// Fetches quotes from and pushes quotes to the sync server
#[derive(Debug, Clone)]
pub struct SyncClient {
    http: reqwest::Client,
    endpoint: String,
    fetch_limit: usize,
}

impl SyncClient {
    pub fn new(settings: &AppSettings) -> Result<Self, SyncError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            endpoint: settings.server_url.clone(),
            fetch_limit: settings.fetch_limit,
        })
    }

    /// GET the endpoint and map the first items to quotes
    pub async fn fetch_quotes(&self) -> Result<Vec<Quote>, SyncError> {
        tracing::debug!("Fetching quotes from {}", self.endpoint);

        let response = self.http.get(&self.endpoint).send().await?;
        if !response.status().is_success() {
            return Err(SyncError::Status(response.status()));
        }

        let posts: Vec<ServerPost> = response.json().await?;
        let quotes = quotes_from_posts(posts, self.fetch_limit);

        tracing::info!("Fetched {} quotes from server", quotes.len());
        Ok(quotes)
    }

    /// POST a quote to the endpoint; the response body is ignored
    pub async fn push_quote(&self, quote: &Quote) -> Result<(), SyncError> {
        let body = serde_json::to_string(quote)?;

        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SyncError::Status(response.status()));
        }

        tracing::debug!("Pushed quote to server ({})", response.status());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    const SAMPLE: &str = r#"[
        {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"},
        {"userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore"},
        {"userId": 1, "id": 3, "title": "ea molestias", "body": "et iusto sed"},
        {"userId": 1, "id": 4, "title": "eum et est", "body": "ullam et saepe"},
        {"userId": 1, "id": 5, "title": "nesciunt quas", "body": "repudiandae veniam"},
        {"userId": 1, "id": 6, "title": "dolorem eum", "body": "ut aspernatur"}
    ]"#;

    #[test]
    fn test_posts_map_to_server_quotes() {
        let posts: Vec<ServerPost> = serde_json::from_str(SAMPLE).unwrap();
        let quotes = quotes_from_posts(posts, 5);

        assert_eq!(quotes.len(), 5);
        assert_eq!(quotes[0], Quote::from_server("sunt aut facere"));
        assert!(quotes.iter().all(|q| q.category == "Server"));
    }

    #[test]
    fn test_fewer_posts_than_limit() {
        let posts: Vec<ServerPost> =
            serde_json::from_str(r#"[{"id": 1, "title": "only"}]"#).unwrap();
        assert_eq!(quotes_from_posts(posts, 5).len(), 1);
    }

    #[test]
    fn test_client_uses_settings() {
        let mut settings = AppSettings::default();
        settings.server_url = "http://localhost:9/posts".to_string();
        let client = SyncClient::new(&settings).unwrap();
        assert_eq!(client.endpoint, "http://localhost:9/posts");
        assert_eq!(client.fetch_limit, 5);
    }

    /// Accept one connection, answer it with `status` and `body`, and hand
    /// back the raw request
    async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (format!("http://{}/posts", addr), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(head_end) = text.find("\r\n\r\n") {
                let content_length = text[..head_end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn local_client(endpoint: String) -> SyncClient {
        SyncClient {
            http: reqwest::Client::builder().no_proxy().build().unwrap(),
            endpoint,
            fetch_limit: 5,
        }
    }

    #[tokio::test]
    async fn test_fetch_quotes_over_http() {
        let (url, server) = serve_once("200 OK", SAMPLE.to_string()).await;
        let client = local_client(url);

        let quotes = client.fetch_quotes().await.unwrap();
        assert_eq!(quotes.len(), 5);
        assert!(quotes.iter().all(|q| q.category == "Server"));
        assert_eq!(quotes[4].text, "nesciunt quas");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /posts "), "got: {}", request);
    }

    #[tokio::test]
    async fn test_fetch_quotes_server_error() {
        let (url, server) = serve_once("500 Internal Server Error", "{}".to_string()).await;
        let client = local_client(url);

        let result = client.fetch_quotes().await;
        assert!(matches!(
            result,
            Err(SyncError::Status(status)) if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_push_quote_sends_json_body() {
        let (url, server) = serve_once("201 Created", r#"{"id": 101}"#.to_string()).await;
        let client = local_client(url);

        client
            .push_quote(&Quote::new("Keep going.", "Motivation"))
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /posts "), "got: {}", request);

        let (head, body) = request.split_once("\r\n\r\n").unwrap();
        let content_type = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.trim().to_string());
        assert_eq!(content_type.as_deref(), Some("application/json; charset=UTF-8"));

        let sent: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({"text": "Keep going.", "category": "Motivation"})
        );
    }
}
