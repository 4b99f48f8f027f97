// file: src/resolver/fetcher.rs
// description: page fetching over http with timeout, user agent and body size limit
// reference: https://docs.rs/reqwest

use crate::config::FetchConfig;
use crate::error::{Result, SummaryError};
use async_trait::async_trait;
use encoding_rs::{Encoding, UTF_8};
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use tracing::{debug, instrument};

/// Retrieves the HTML of a web page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    max_body_bytes: usize,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout())
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|e| SummaryError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            max_body_bytes: config.max_body_bytes,
        })
    }

    fn check_size(&self, url: &str, size: usize) -> Result<()> {
        if size > self.max_body_bytes {
            return Err(SummaryError::fetch(
                url,
                format!(
                    "response body is {} bytes, limit is {}",
                    size, self.max_body_bytes
                ),
            ));
        }
        Ok(())
    }
}

/// Decodes a body with the charset named in `Content-Type`, UTF-8 otherwise.
fn decode_body(headers: &HeaderMap, body: &[u8]) -> String {
    let encoding = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| {
            value
                .split(';')
                .filter_map(|param| param.trim().split_once('='))
                .find(|(key, _)| key.trim().eq_ignore_ascii_case("charset"))
                .map(|(_, label)| label.trim().trim_matches('"').to_string())
        })
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);

    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<String> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SummaryError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummaryError::fetch(url, format!("HTTP status {}", status)));
        }

        if let Some(length) = response.content_length() {
            self.check_size(url, length as usize)?;
        }

        let headers = response.headers().clone();
        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| SummaryError::fetch(url, e))?
        {
            self.check_size(url, body.len() + chunk.len())?;
            body.extend_from_slice(&chunk);
        }

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(decode_body(&headers, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::time::{Duration, Instant};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one connection: reads the request, then writes `head` followed
    /// by `chunks` in chunked transfer encoding.
    async fn serve_once(head: &'static str, chunks: Vec<Vec<u8>>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;

            if socket.write_all(head.as_bytes()).await.is_err() {
                return;
            }
            for chunk in chunks {
                let frame = format!("{:x}\r\n", chunk.len());
                if socket.write_all(frame.as_bytes()).await.is_err()
                    || socket.write_all(&chunk).await.is_err()
                    || socket.write_all(b"\r\n").await.is_err()
                {
                    return;
                }
            }
            let _ = socket.write_all(b"0\r\n\r\n").await;
        });

        format!("http://{}/", address)
    }

    #[test]
    fn test_size_limit() {
        let mut config = Config::default_config().fetch;
        config.max_body_bytes = 10;
        let fetcher = HttpFetcher::new(&config).unwrap();

        assert!(fetcher.check_size("http://example.com", 10).is_ok());
        assert!(matches!(
            fetcher.check_size("http://example.com", 11),
            Err(SummaryError::FetchFailure { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_failure() {
        let mut config = Config::default_config().fetch;
        config.timeout_secs = 2;
        let fetcher = HttpFetcher::new(&config).unwrap();

        let result = fetcher.fetch("http://127.0.0.1:1/").await;
        assert!(matches!(
            result,
            Err(SummaryError::FetchFailure { ref url, .. }) if url == "http://127.0.0.1:1/"
        ));
    }

    #[tokio::test]
    async fn test_chunked_body_over_limit_is_rejected() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nTransfer-Encoding: chunked\r\n\r\n",
            vec![vec![b'a'; 512]; 64],
        )
        .await;

        let mut config = Config::default_config().fetch;
        config.max_body_bytes = 1024;
        let fetcher = HttpFetcher::new(&config).unwrap();

        let result = fetcher.fetch(&url).await;
        let message = match &result {
            Err(SummaryError::FetchFailure { message, .. }) => message.clone(),
            other => panic!("expected a fetch failure, got {:?}", other),
        };

        // Reading stops at the first chunk that crosses the limit.
        let consumed: usize = message
            .trim_start_matches("response body is ")
            .split(' ')
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap();
        assert!(message.ends_with("limit is 1024"));
        assert!(consumed > 1024 && consumed <= 1024 + 512);
    }

    #[tokio::test]
    async fn test_chunked_body_decoded_with_charset() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=windows-1252\r\nTransfer-Encoding: chunked\r\n\r\n",
            vec![b"<p>Caf".to_vec(), vec![0xE9], b" au lait.</p>".to_vec()],
        )
        .await;

        let fetcher = HttpFetcher::new(&Config::default_config().fetch).unwrap();
        let body = fetcher.fetch(&url).await.unwrap();
        assert_eq!(body, "<p>Café au lait.</p>");
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let mut config = Config::default_config().fetch;
        config.timeout_secs = 1;
        let fetcher = HttpFetcher::new(&config).unwrap();

        let started = Instant::now();
        let result = fetcher.fetch(&url).await;

        assert!(matches!(result, Err(SummaryError::FetchFailure { .. })));
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
