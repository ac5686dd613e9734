use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Target of a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpContext {
    pub host: String,
    pub port: u16,
    pub use_tls: bool,
    pub path: String,
}

impl HttpContext {
    pub fn new(config: &ClientConfig, path: &str) -> HttpContext {
        HttpContext {
            host: config.host.clone(),
            port: config.port,
            use_tls: config.use_tls,
            path: path.to_string(),
        }
    }

    pub fn url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{scheme}://{}:{}{}", self.host, self.port, self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn body_text(&self) -> Result<&str> {
        std::str::from_utf8(&self.body)
            .map_err(|e| ClientError::Transport(format!("Response body is not UTF-8: {e}")))
    }
}

/// Request/response channel to a node. One request per open/close pair;
/// implementations need not be reentrant.
pub trait Transport {
    fn open(&mut self, ctx: &HttpContext) -> Result<()>;

    /// Sends a GET for the opened path and reads the whole body.
    fn read(&mut self, content_type: &str) -> Result<HttpResponse>;

    /// Sends a POST with `body` to the opened path and reads the whole body.
    fn post(&mut self, content_type: &str, body: &[u8]) -> Result<HttpResponse>;

    fn close(&mut self) -> Result<()>;
}

/// Blocking HTTP(S) transport backed by `reqwest`
pub struct HttpTransport {
    client: Client,
    url: Option<String>,
}

impl HttpTransport {
    pub fn new() -> Result<HttpTransport> {
        let client = Client::builder()
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(HttpTransport { client, url: None })
    }

    fn opened_url(&self) -> Result<&str> {
        self.url
            .as_deref()
            .ok_or_else(|| ClientError::Transport("HTTP connection is not open".to_string()))
    }

    fn finish(response: reqwest::blocking::Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();
        debug!("HTTP {status}, {} bytes", body.len());
        Ok(HttpResponse { status, body })
    }
}

impl Transport for HttpTransport {
    fn open(&mut self, ctx: &HttpContext) -> Result<()> {
        if self.url.is_some() {
            return Err(ClientError::Transport(
                "HTTP connection already open".to_string(),
            ));
        }
        self.url = Some(ctx.url());
        Ok(())
    }

    fn read(&mut self, content_type: &str) -> Result<HttpResponse> {
        let url = self.opened_url()?;
        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, content_type)
            .send()?;
        Self::finish(response)
    }

    fn post(&mut self, content_type: &str, body: &[u8]) -> Result<HttpResponse> {
        let url = self.opened_url()?;
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body.to_vec())
            .send()?;
        Self::finish(response)
    }

    fn close(&mut self) -> Result<()> {
        self.url
            .take()
            .map(|_| ())
            .ok_or_else(|| ClientError::Transport("HTTP connection is not open".to_string()))
    }
}
