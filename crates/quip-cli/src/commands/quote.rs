//! Quote command handlers

use anyhow::{bail, Result};

use quip_core::{QuipError, Session};

use crate::api::QuoteApi;
use crate::output::Output;

/// Random quote for a topic (falls back to the last-used topic)
pub fn topic(
    session: &mut Session,
    topic: Option<String>,
    all: bool,
    output: &Output,
) -> Result<()> {
    let topic = match topic.or_else(|| session.last_topic().map(str::to_string)) {
        Some(t) => t,
        None => bail!("No topic given and none remembered. Try: quip topic love"),
    };

    if all {
        let quotes = session.quotes_for_topic(&topic);
        output.print_quotes(&quotes);
        return Ok(());
    }

    match session.quote_by_topic(&topic) {
        Ok(quote) => {
            output.print_quote(&quote);
            if session.is_favorite(&quote) {
                output.message("(in your favorites)");
            }
            Ok(())
        }
        Err(QuipError::NoQuotesFound { topic }) => {
            // A user-facing state, not a failure
            output.message(&format!("No quotes found for this topic: '{}'", topic));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Fetch a quote from the remote API
pub async fn fetch(session: &mut Session, output: &Output) -> Result<()> {
    let api = QuoteApi::new(&session.config().api_url)?;
    let generation = session.begin_fetch();

    let quote = api
        .fetch()
        .await
        .map_err(|e| anyhow::anyhow!("Could not fetch a quote. Please try again. ({})", e))?;

    if session.apply_fetched(generation, &quote) {
        output.print_quote(&quote);
        if session.is_favorite(&quote) {
            output.message("(in your favorites)");
        }
    }

    Ok(())
}

/// List the known topics
pub fn topics(session: &Session, output: &Output) -> Result<()> {
    let topics = session.quotes().topics();
    output.print_topics(&topics);
    Ok(())
}
