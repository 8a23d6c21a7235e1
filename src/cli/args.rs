//! Command-line argument definitions using clap.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::selection::Selection;

/// Chaos dataset downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "chaos-downloader",
    version,
    about = "Download and merge Chaos bug-bounty datasets",
    long_about = "Fetches the Chaos dataset index, downloads the selected ZIP archives,\n\
                  extracts each into its own directory and merges every text file into\n\
                  one combined file.\n\n\
                  Select datasets with --companies, --input or --all.",
    group(
        ArgGroup::new("selection")
            .args(["companies", "input", "all"])
            .multiple(false)
    )
)]
pub struct Args {
    /// Comma-separated dataset names to download (case-insensitive).
    #[arg(short, long, value_name = "LIST")]
    pub companies: Option<String>,

    /// File containing dataset names, one per line.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Download every dataset in the index.
    #[arg(short, long)]
    pub all: bool,

    /// Print the dataset names in the index and exit.
    #[arg(short, long, conflicts_with = "selection")]
    pub list: bool,

    /// Base directory for extracted datasets.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path of the combined text file.
    #[arg(long, value_name = "FILE")]
    pub combined_file: Option<PathBuf>,

    /// URL of the dataset index.
    #[arg(long, env = "CHAOS_INDEX_URL")]
    pub index_url: Option<String>,

    /// File name suffix of the files to merge.
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Path to configuration file.
    #[arg(long, default_value = "chaos.toml")]
    pub config: PathBuf,

    /// Hide progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Resolve the dataset selection, or `None` when no selection flag was given.
    pub fn selection(&self) -> Result<Option<Selection>> {
        if let Some(ref list) = self.companies {
            return Ok(Some(Selection::from_list(list)));
        }

        if let Some(ref path) = self.input {
            return Selection::from_file(path).map(Some);
        }

        if self.all {
            return Ok(Some(Selection::All));
        }

        Ok(None)
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(dir) = self.output_dir {
            config.output.base_directory = dir;
        }

        if let Some(file) = self.combined_file {
            config.output.combined_file = file;
        }

        if let Some(url) = self.index_url {
            config.source.index_url = url;
        }

        if let Some(extension) = self.extension {
            config.output.text_extension = extension;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
