use std::io::Read;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header;

use crate::config::{self, Settings};
use crate::errors::{Error, Result};

/// Text-level access to the remote endpoints.
pub trait Fetch {
    /// GET a JSON document.
    fn get(&self, url: &str) -> Result<String>;

    /// POST a JSON (GraphQL) payload and return the response body.
    fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String>;
}

/// Run `op` up to `attempts` times, stopping early on success or on an error
/// that `is_retryable` rejects. The last error is returned once attempts are
/// exhausted. `op` receives the attempt number, starting at 1.
pub fn retry<T, E, F>(
    attempts: u32,
    delay: Duration,
    is_retryable: impl Fn(&E) -> bool,
    mut op: F,
) -> std::result::Result<T, E>
where
    F: FnMut(u32) -> std::result::Result<T, E>,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt) {
            Ok(value) => return Ok(value),
            Err(e) => {
                if attempt >= attempts || !is_retryable(&e) {
                    return Err(e);
                }
                if !delay.is_zero() {
                    std::thread::sleep(delay * attempt);
                }
                attempt += 1;
            }
        }
    }
}

/// The parts of a response needed to turn it into text.
struct RawResponse {
    content_encoding: Option<String>,
    content_type: Option<String>,
    body: Vec<u8>,
}

pub struct HttpFetcher {
    client: Client,
    attempts: u32,
    retry_delay: Duration,
}

impl HttpFetcher {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers())
            .timeout(settings.timeout)
            .build()
            .map_err(|source| Error::Transport {
                url: settings.base_url.clone(),
                source,
            })?;
        Ok(Self {
            client,
            attempts: settings.attempts,
            retry_delay: settings.retry_delay,
        })
    }

    fn execute(&self, url: &str, request: impl Fn(&Client) -> RequestBuilder) -> Result<String> {
        let raw = retry(self.attempts, self.retry_delay, Error::is_retryable, |attempt| {
            let result = Self::send(url, request(&self.client));
            match &result {
                Err(e) if e.is_timeout() => log::warn!("request attempt {} timed out", attempt),
                Err(e) => log::warn!("request attempt {} failed: {}", attempt, e),
                Ok(_) => {}
            }
            result
        })?;
        decode_body(
            &raw.body,
            raw.content_encoding.as_deref(),
            raw.content_type.as_deref(),
        )
    }

    fn send(url: &str, request: RequestBuilder) -> Result<RawResponse> {
        let transport = |source| Error::Transport {
            url: url.to_string(),
            source,
        };
        let response = request.send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }
        let header_value = |name: header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let content_encoding = header_value(header::CONTENT_ENCODING);
        let content_type = header_value(header::CONTENT_TYPE);
        let body = response.bytes().map_err(transport)?.to_vec();
        Ok(RawResponse {
            content_encoding,
            content_type,
            body,
        })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);
        self.execute(url, |client| {
            client.get(url).header(header::ACCEPT, config::ACCEPT_JSON)
        })
    }

    fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String> {
        let payload = body.to_string();
        log::debug!("POST {} {}", url, payload);
        self.execute(url, |client| {
            client
                .post(url)
                .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                .body(payload.clone())
        })
    }
}

fn default_headers() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, header::HeaderValue::from_static(config::ACCEPT_HTML));
    headers.insert(header::ACCEPT_CHARSET, header::HeaderValue::from_static(config::ACCEPT_CHARSET));
    headers.insert(header::ACCEPT_ENCODING, header::HeaderValue::from_static(config::ACCEPT_ENCODING));
    headers.insert(header::ACCEPT_LANGUAGE, header::HeaderValue::from_static(config::ACCEPT_LANGUAGE));
    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(config::USER_AGENT));
    headers
}

/// Inflate a gzip body if the server says so, then decode it with the charset
/// from `Content-Type` (UTF-8 when absent). Undecodable bytes become U+FFFD.
pub fn decode_body(
    body: &[u8],
    content_encoding: Option<&str>,
    content_type: Option<&str>,
) -> Result<String> {
    log::debug!("Content-Encoding: {:?}", content_encoding);
    let inflated;
    let body = match content_encoding {
        Some(encoding) if encoding.trim().eq_ignore_ascii_case("gzip") => {
            let mut buffer = Vec::new();
            flate2::read::GzDecoder::new(body)
                .read_to_end(&mut buffer)
                .map_err(Error::Gzip)?;
            inflated = buffer;
            inflated.as_slice()
        }
        _ => body,
    };
    let encoding = charset(content_type);
    let (text, _, had_errors) = encoding.decode(body);
    if had_errors {
        log::debug!("replaced malformed {} sequences in response", encoding.name());
    }
    Ok(text.into_owned())
}

fn charset(content_type: Option<&str>) -> &'static encoding_rs::Encoding {
    let label = content_type
        .and_then(|value| value.parse::<mime::Mime>().ok())
        .and_then(|mime| mime.get_param(mime::CHARSET).map(|c| c.as_str().to_string()));
    match label {
        None => encoding_rs::UTF_8,
        Some(label) => encoding_rs::Encoding::for_label(label.as_bytes()).unwrap_or_else(|| {
            log::warn!("unknown charset {}, decoding as UTF-8", label);
            encoding_rs::UTF_8
        }),
    }
}
