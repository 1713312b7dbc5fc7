//! Sharing helpers
//!
//! A quote can be shared as plain text, as a pre-filled tweet URL, or as a
//! deep link whose query parameters decode back into the quote.

use crate::models::Quote;

/// Query parameter names used in share links
const QUOTE_PARAM: &str = "quote";
const AUTHOR_PARAM: &str = "author";

/// Twitter intent endpoint for the no-share-sheet fallback
const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Plain-text share form: `"<content>" — <author>`
pub fn share_text(quote: &Quote) -> String {
    format!("\"{}\" — {}", quote.content, quote.author)
}

/// Deep link carrying the quote in query parameters
pub fn share_link(base: &str, quote: &Quote) -> String {
    format!(
        "{}?{}={}&{}={}",
        base.trim_end_matches('/'),
        QUOTE_PARAM,
        urlencoding::encode(&quote.content),
        AUTHOR_PARAM,
        urlencoding::encode(&quote.author)
    )
}

/// Pre-filled social share URL
pub fn tweet_url(quote: &Quote) -> String {
    format!(
        "{}?text={}",
        TWEET_INTENT_URL,
        urlencoding::encode(&share_text(quote))
    )
}

/// Decode a share link back into a quote
///
/// Returns `None` unless both the quote and author parameters are present
/// and decodable. The decoded quote carries no topic.
pub fn parse_share_link(url: &str) -> Option<Quote> {
    let query = url.split_once('?')?.1;

    let mut content = None;
    let mut author = None;

    for pair in query.split('&') {
        let (name, value) = pair.split_once('=')?;
        let decoded = urlencoding::decode(value).ok()?.into_owned();
        match name {
            QUOTE_PARAM => content = Some(decoded),
            AUTHOR_PARAM => author = Some(decoded),
            _ => {}
        }
    }

    Some(Quote::new(content?, author?))
}
