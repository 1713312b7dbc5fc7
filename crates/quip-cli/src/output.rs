//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use quip_core::{share, FavoriteEntry, Quote};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Check if output is JSON
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Print a single quote
    pub fn print_quote(&self, quote: &Quote) {
        match self.format {
            OutputFormat::Human => {
                println!();
                println!("  \"{}\"", quote.content);
                println!("      — {}", quote.author);
                if let Some(ref topic) = quote.topic {
                    println!("      [{}]", topic);
                }
                println!();
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(quote).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", share::share_text(quote));
            }
        }
    }

    /// Print a list of quotes
    pub fn print_quotes(&self, quotes: &[Quote]) {
        match self.format {
            OutputFormat::Human => {
                if quotes.is_empty() {
                    println!("No quotes found.");
                    return;
                }
                for quote in quotes {
                    println!("{} | {}", truncate(&quote.content, 60), quote.author);
                }
                println!("\n{} quote(s)", quotes.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(quotes).unwrap());
            }
            OutputFormat::Quiet => {
                for quote in quotes {
                    println!("{}", share::share_text(quote));
                }
            }
        }
    }

    /// Print the favorites list
    pub fn print_favorites(&self, favorites: &[FavoriteEntry]) {
        match self.format {
            OutputFormat::Human => {
                if favorites.is_empty() {
                    println!("No favorites yet.");
                    return;
                }
                for entry in favorites {
                    println!(
                        "[{}] {} | {}",
                        entry.added_at.format("%Y-%m-%d"),
                        truncate(&entry.quote.content, 50),
                        entry.quote.author
                    );
                }
                println!("\n{} favorite(s)", favorites.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(favorites).unwrap());
            }
            OutputFormat::Quiet => {
                for entry in favorites {
                    println!("{}", share::share_text(&entry.quote));
                }
            }
        }
    }

    /// Print the known topic list
    pub fn print_topics(&self, topics: &[String]) {
        match self.format {
            OutputFormat::Human => {
                if topics.is_empty() {
                    println!("No topics found.");
                    return;
                }
                for topic in topics {
                    println!("{}", topic);
                }
                println!("\n{} topic(s)", topics.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(topics).unwrap());
            }
            OutputFormat::Quiet => {
                for topic in topics {
                    println!("{}", topic);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
