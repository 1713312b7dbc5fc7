//! Theme command handlers

use anyhow::{Context, Result};

use quip_core::{Session, Theme};

use crate::output::{Output, OutputFormat};

/// Show the current theme and the allow-list
pub fn show(session: &Session, output: &Output) -> Result<()> {
    let current = session.theme();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "theme": current.name(),
                    "available": Theme::all().iter().map(Theme::name).collect::<Vec<_>>()
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", current.name());
        }
        OutputFormat::Human => {
            println!("Theme: {}", current.name());
            let names: Vec<_> = Theme::all().iter().map(Theme::name).collect();
            println!("Available: {}", names.join(", "));
        }
    }

    Ok(())
}

/// Set the theme, falling back to the default on an unknown name
pub fn set(session: &mut Session, name: String, output: &Output) -> Result<()> {
    let applied = session.set_theme(&name).context("Failed to save theme")?;

    if applied.name() != name.trim().to_lowercase() {
        output.message(&format!(
            "Unknown theme '{}', falling back to '{}'",
            name.trim(),
            applied.name()
        ));
    }

    output.success(&format!("Theme set to {}", applied.name()));
    Ok(())
}
