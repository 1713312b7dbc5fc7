//! Share command handlers

use anyhow::{bail, Context, Result};

use quip_core::{share, Quote, Session};

use crate::output::{Output, OutputFormat};

/// Print share forms for a quote: text, tweet intent URL, and (when a base
/// URL is given) a deep link that decodes back into the quote
pub fn share(
    content: String,
    author: String,
    base: Option<String>,
    open_browser: bool,
    output: &Output,
) -> Result<()> {
    let quote = Quote::new(content, author);

    let text = share::share_text(&quote);
    let tweet = share::tweet_url(&quote);
    let link = base.map(|b| share::share_link(&b, &quote));

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "text": text,
                    "tweet_url": tweet,
                    "link": link
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", link.as_deref().unwrap_or(&tweet));
        }
        OutputFormat::Human => {
            println!("{}", text);
            println!();
            println!("Tweet: {}", tweet);
            if let Some(ref link) = link {
                println!("Link:  {}", link);
            }
        }
    }

    if open_browser {
        open::that(&tweet).context("Failed to open browser")?;
        output.success("Opening browser to share quote");
    }

    Ok(())
}

/// Decode a share link and display the quote it carries
pub fn view(session: &mut Session, link: String, output: &Output) -> Result<()> {
    let Some(quote) = share::parse_share_link(&link) else {
        bail!("Not a valid share link: {}", link);
    };

    session.record_seen(&quote);
    output.print_quote(&quote);
    if session.is_favorite(&quote) {
        output.message("(in your favorites)");
    }

    Ok(())
}
