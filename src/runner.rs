// src/runner.rs
//! One end-to-end run: ask for an animal, fetch, pick a skin type, render, write.
//!
//! Everything the user sees goes through the [`Console`]; every failure is caught
//! here and reported, so callers only look at the [`Outcome`].

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::card::render_cards;
use crate::config::AppOptions;
use crate::console::Console;
use crate::error::{Error, Result};
use crate::file::{read_template, write_page};
use crate::filter::{distinct_values, matching, resolve_choice};
use crate::page::{assemble, replacements};
use crate::record::AttrPath;
use crate::source::RecordSource;

pub const QUERY_PROMPT: &str = "Enter a name of an animal: ";
pub const CHOICE_PROMPT: &str = "What skin type do you want to use? ";

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    /// The skin type the page was filtered by, as used in the heading.
    pub choice: String,
    pub cards: usize,
}

#[derive(Debug)]
pub enum Outcome {
    /// The source had nothing for the query; no file was touched.
    NoRecords,
    Written(RunSummary),
    /// Already reported to the user.
    Aborted(Error),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Aborted(_))
    }
}

pub fn run(opts: &AppOptions, source: &dyn RecordSource, console: &mut dyn Console) -> Outcome {
    match generate(opts, source, console) {
        Ok(Some(summary)) => {
            info!(output = %summary.output.display(), cards = summary.cards, "page generated");
            say!(console, "Website was successfully generated to the file {}!", summary.output.display());
            Outcome::Written(summary)
        }
        Ok(None) => Outcome::NoRecords,
        Err(e) => {
            debug!(error = ?e, "run aborted");
            say!(console, "{e}");
            Outcome::Aborted(e)
        }
    }
}

fn generate(
    opts: &AppOptions,
    source: &dyn RecordSource,
    console: &mut dyn Console,
) -> Result<Option<RunSummary>> {
    let query = match &opts.query {
        Some(q) => q.clone(),
        None => console.ask(QUERY_PROMPT)?,
    };

    let records = source.fetch(&query).unwrap_or_else(|e| {
        warn!(%query, error = %e, "fetch failed");
        say!(console, "Error: {e}");
        Vec::new()
    });
    if records.is_empty() {
        info!(%query, "no records");
        return Ok(None);
    }

    let path = AttrPath::SKIN_TYPE;
    let values = distinct_values(&records, &path);
    debug!(?values, "skin types");

    let picked = pick(&values, opts.skin_type.as_deref(), console)?;
    // Auto-selected values go through the same check as typed ones.
    let choice = resolve_choice(&values, &picked)?;

    let hits = matching(&records, &path, &choice);
    let cards = render_cards(hits.iter().copied());

    let template = read_template(&opts.page.template)?;
    let html = assemble(&template, replacements(&choice, cards));
    let output = write_page(&opts.page.output, &html)?;

    Ok(Some(RunSummary { output, choice, cards: hits.len() }))
}

/// Preset, auto-selected singleton, or the user's answer to the numbered list.
fn pick(values: &[String], preset: Option<&str>, console: &mut dyn Console) -> Result<String> {
    match (values, preset) {
        ([], _) => Err(Error::NoValues),
        (_, Some(p)) => Ok(s!(p)),
        ([only], None) => {
            say!(console, "Only one skin type available: {only}. Autoselecting it for you...");
            Ok(only.clone())
        }
        (_, None) => {
            for (i, v) in values.iter().enumerate() {
                say!(console, "{}. {}", i + 1, v);
            }
            Ok(console.ask(CHOICE_PROMPT)?)
        }
    }
}
