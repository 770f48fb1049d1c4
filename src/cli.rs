// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{API_KEY_ENV, API_URL_ENV, DEFAULT_OUTPUT, DEFAULT_TEMPLATE};
use crate::config::{ApiOptions, AppOptions, PageOptions};
use crate::console::StdConsole;
use crate::error::Result;
use crate::runner::{self, Outcome};
use crate::source::{ApiSource, FileSource, RecordSource};

/// Fetch animals, filter them by skin type and render an HTML page.
#[derive(Debug, Parser)]
#[command(name = "animals_web", version, about, long_about = None)]
pub struct Args {
    /// Animal name to search for (prompted when omitted)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Skin type to filter by (prompted when omitted)
    #[arg(short, long)]
    pub skin_type: Option<String>,

    /// Page template containing the placeholders
    #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// Output HTML file (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Data API endpoint
    #[arg(long, env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// Data API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Read records from a local JSON file instead of the API
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        AppOptions {
            api: ApiOptions {
                url: self.api_url,
                key: self.api_key,
                ..ApiOptions::default()
            },
            page: PageOptions {
                template: self.template,
                output: self.output,
            },
            query: self.query,
            skin_type: self.skin_type,
            data: self.data,
        }
    }
}

/// The configured record source: the local file when given, the API otherwise.
pub fn source_for(opts: &AppOptions) -> Result<Box<dyn RecordSource>> {
    Ok(match &opts.data {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(ApiSource::new(&opts.api)?),
    })
}

/// Run against stdin/stdout. Problems are already reported to the user by the time this returns.
pub fn run(opts: &AppOptions) -> Outcome {
    let mut console = StdConsole;
    match source_for(opts) {
        Ok(source) => runner::run(opts, source.as_ref(), &mut console),
        Err(e) => {
            say!(&mut console, "{e}");
            Outcome::Aborted(e)
        }
    }
}
