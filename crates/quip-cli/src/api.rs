//! Remote quote API client
//!
//! Fetches a quote of the day from a ZenQuotes-shaped endpoint: an array
//! with at least one element carrying `q` (text) and `a` (author).

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use quip_core::Quote;

/// Fetch timeout in seconds
const FETCH_TIMEOUT: u64 = 10;

/// One element of the API response
#[derive(Debug, Deserialize)]
struct ApiQuote {
    q: String,
    a: String,
}

/// Client for the remote quote endpoint
pub struct QuoteApi {
    client: reqwest::Client,
    url: String,
}

impl QuoteApi {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT))
            .user_agent("Mozilla/5.0 (compatible; quip/0.3)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetch one quote
    ///
    /// Any failure surfaces as an error for the caller to render inline;
    /// previously displayed state is left untouched.
    pub async fn fetch(&self) -> Result<Quote> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Could not reach the quote API")?;

        if !response.status().is_success() {
            bail!("Quote API returned {}", response.status());
        }

        let body = response
            .text()
            .await
            .context("Failed to read quote API response")?;

        parse_response(&body)
    }
}

/// Map the API response shape into a `Quote` (no topic)
fn parse_response(body: &str) -> Result<Quote> {
    let quotes: Vec<ApiQuote> =
        serde_json::from_str(body).context("Unexpected quote API response shape")?;

    let first = quotes
        .into_iter()
        .next()
        .context("Quote API returned an empty array")?;

    Ok(Quote::new(first.q, first.a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        let body = r#"[{"q":"Turn your wounds into wisdom.","a":"Oprah Winfrey"}]"#;
        let quote = parse_response(body).unwrap();

        assert_eq!(quote.content, "Turn your wounds into wisdom.");
        assert_eq!(quote.author, "Oprah Winfrey");
        assert!(quote.topic.is_none());
    }

    #[test]
    fn test_parse_response_takes_first_element() {
        let body = r#"[{"q":"First","a":"A"},{"q":"Second","a":"B"}]"#;
        let quote = parse_response(body).unwrap();
        assert_eq!(quote.content, "First");
    }

    #[test]
    fn test_parse_response_ignores_extra_fields() {
        let body = r#"[{"q":"Text","a":"Author","h":"<blockquote>html</blockquote>"}]"#;
        let quote = parse_response(body).unwrap();
        assert_eq!(quote.author, "Author");
    }

    #[test]
    fn test_parse_response_empty_array() {
        assert!(parse_response("[]").is_err());
    }

    #[test]
    fn test_parse_response_wrong_shape() {
        assert!(parse_response(r#"{"q":"not an array"}"#).is_err());
        assert!(parse_response("not json").is_err());
    }
}
