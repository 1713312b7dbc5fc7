//! Favorites command handlers

use anyhow::{Context, Result};

use quip_core::{Quote, Session};

use crate::output::Output;

/// Toggle a quote in the favorites set
pub fn toggle(
    session: &mut Session,
    content: String,
    author: String,
    output: &Output,
) -> Result<()> {
    let quote = Quote::new(content, author);

    let favorited = session
        .toggle_favorite(&quote)
        .context("Failed to update favorites")?;

    if favorited {
        output.success("Quote added to favorites!");
    } else {
        output.success("Quote removed from favorites!");
    }

    Ok(())
}

/// Remove a quote from the favorites set
pub fn remove(
    session: &mut Session,
    content: String,
    author: String,
    output: &Output,
) -> Result<()> {
    let quote = Quote::new(content, author);

    session
        .remove_favorite(&quote)
        .context("Failed to update favorites")?;

    output.success("Quote removed from favorites!");
    Ok(())
}

/// List favorites, newest first
pub fn list(session: &Session, output: &Output) -> Result<()> {
    output.print_favorites(session.favorites().list());
    Ok(())
}
