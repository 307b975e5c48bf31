extern crate clap;

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "grammr", about = "Translate phrases and explore their grammar")]
pub struct Cli {
    #[command(flatten)]
    pub global: Global,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct Global {
    /// Base URL of the analysis service.
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// JSON configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl Global {
    /// Overlays the flags on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(backend) = &self.backend {
            config.backend_host = backend.clone();
        }

        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }

        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate a phrase and align its analyzed tokens.
    Translate(Translate),

    /// Show the inflection table of a word.
    Inflect(Inflect),

    /// Align analyses stored in a JSON file.
    Align(Align),

    /// Project inflections stored in a JSON file.
    Table(Table),
}

#[derive(Debug, Parser)]
pub struct Translate {
    pub phrase: String,

    #[arg(long, short = 's')]
    pub spoken: Option<String>,

    #[arg(long, short = 'l')]
    pub learned: Option<String>,
}

#[derive(Debug, Parser)]
pub struct Inflect {
    pub word: String,

    /// Language code of the word, defaults to the learned language.
    #[arg(long, short = 'l')]
    pub language: Option<String>,
}

#[derive(Debug, Parser)]
pub struct Align {
    /// JSON array of analysis responses.
    pub file: PathBuf,

    #[arg(long, short = 't', default_value = "4")]
    pub threads: NonZeroUsize,
}

#[derive(Debug, Parser)]
pub struct Table {
    /// JSON inflection response.
    pub file: PathBuf,
}
