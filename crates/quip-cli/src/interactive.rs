//! Interactive session
//!
//! The default mode when `quip` is run without a subcommand: a prompt loop
//! holding the session-scoped state (the currently displayed quote and the
//! recent-quote history) that one-shot subcommands cannot carry.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;

use quip_core::{share, QuipError, Quote, Session};

use crate::api::QuoteApi;
use crate::output::Output;

pub async fn run(session: &mut Session, output: &Output) -> Result<()> {
    println!("quip — quote lookup, favorites, and sharing");
    println!("Type 'help' for commands, 'quit' to exit.");
    if let Some(topic) = session.last_topic() {
        println!("Last topic: {}", topic);
    }
    println!();

    info!("Interactive session started");

    let api = QuoteApi::new(&session.config().api_url)?;
    let stdin = io::stdin();
    let mut current: Option<Quote> = None;

    loop {
        print!("quip> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match cmd {
            "topic" | "t" => {
                let topic = if rest.is_empty() {
                    match session.last_topic() {
                        Some(t) => t.to_string(),
                        None => {
                            println!("Usage: topic <name>  (e.g. topic love)");
                            continue;
                        }
                    }
                } else {
                    rest.to_string()
                };

                match session.quote_by_topic(&topic) {
                    Ok(quote) => {
                        show_quote(session, output, &quote);
                        current = Some(quote);
                    }
                    Err(QuipError::NoQuotesFound { topic }) => {
                        println!("No quotes found for this topic: '{}'", topic);
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            "new" | "n" => {
                let generation = session.begin_fetch();
                match api.fetch().await {
                    Ok(quote) => {
                        if session.apply_fetched(generation, &quote) {
                            show_quote(session, output, &quote);
                            current = Some(quote);
                        }
                    }
                    Err(e) => {
                        // Prior displayed quote stays as-is; no retry automation
                        println!("Could not fetch a quote. Please try again. ({})", e);
                    }
                }
            }
            "fav" | "f" => match &current {
                Some(quote) => {
                    if session.toggle_favorite(quote)? {
                        println!("Quote added to favorites!");
                    } else {
                        println!("Quote removed from favorites!");
                    }
                }
                None => println!("No quote displayed yet. Try 'topic <name>' or 'new'."),
            },
            "favs" => {
                output.print_favorites(session.favorites().list());
            }
            "recent" | "r" => {
                output.print_quotes(session.recent().list());
            }
            "topics" => {
                output.print_topics(&session.quotes().topics());
            }
            "theme" => {
                if rest.is_empty() {
                    println!("Theme: {}", session.theme().name());
                } else {
                    let applied = session.set_theme(rest)?;
                    println!("Theme set to {}", applied.name());
                }
            }
            "share" | "s" => match &current {
                Some(quote) => {
                    println!("{}", share::share_text(quote));
                    println!("Tweet: {}", share::tweet_url(quote));
                }
                None => println!("No quote displayed yet. Try 'topic <name>' or 'new'."),
            },
            "link" | "l" => {
                if rest.is_empty() {
                    println!("Usage: link <share-url>");
                    continue;
                }
                match share::parse_share_link(rest) {
                    Some(quote) => {
                        session.record_seen(&quote);
                        show_quote(session, output, &quote);
                        current = Some(quote);
                        println!("Shared quote loaded!");
                    }
                    None => println!("Not a valid share link."),
                }
            }
            "help" | "h" | "?" => print_help(),
            "quit" | "exit" | "q" => break,
            _ => println!("Unknown command '{}'. Type 'help'.", cmd),
        }
    }

    info!("Interactive session ended");
    Ok(())
}

fn show_quote(session: &Session, output: &Output, quote: &Quote) {
    output.print_quote(quote);
    if session.is_favorite(quote) {
        println!("(in your favorites)");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  topic <name>   Random quote for a topic (bare 'topic' reuses the last one)");
    println!("  new            Fetch a quote from the remote API");
    println!("  fav            Toggle the displayed quote in your favorites");
    println!("  favs           List favorites");
    println!("  recent         Quotes seen this session (newest first)");
    println!("  topics         List known topics");
    println!("  theme [name]   Show or set the theme (light, dark)");
    println!("  share          Share text and tweet URL for the displayed quote");
    println!("  link <url>     Load a quote from a share link");
    println!("  quit           Exit");
}
