//! Chaos Downloader - CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

use chaos_downloader::{
    cli::Args,
    config::{validate_config, Config},
    download::{list_entries, run_pipeline},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_concat_summary, print_config_summary, print_download_stats,
        print_error, print_success,
    },
    Selection,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Index(_) | Error::IndexDecode(_) | Error::Http(_) | Error::Download(_) => {
                    ExitCode::from(exit_codes::NETWORK_ERROR as u8)
                }
                Error::Io(_) | Error::NameList { .. } => ExitCode::from(exit_codes::IO_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let list_only = args.list;
    let selection = args.selection()?;

    // Without a selection there is nothing to do
    if selection.is_none() && !list_only {
        Args::command().print_help()?;
        println!();
        return Ok(());
    }

    // Load configuration and merge CLI arguments
    let mut config = Config::load_or_default(&args.config)?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    // Only --list reaches this point without a selection
    let Some(selection) = selection else {
        for name in list_entries(&config).await? {
            println!("{}", name);
        }
        return Ok(());
    };

    print_banner();
    print_config_summary(&config, &describe_selection(&selection));

    let report = run_pipeline(&config, &selection).await?;

    print_download_stats(&report.download);
    print_concat_summary(&report.concat);
    print_success(&format!(
        "Processed {} of {} selected datasets; combined output at {}",
        report.download.completed,
        report.download.selected,
        report.concat.output.display()
    ));

    Ok(())
}

fn describe_selection(selection: &Selection) -> String {
    match selection {
        Selection::All => "all datasets".to_string(),
        Selection::Names(names) => {
            let count = names.len();
            let mut names: Vec<&str> = names.iter().map(String::as_str).collect();
            names.sort_unstable();
            format!(
                "{} dataset{}: {}",
                count,
                if count == 1 { "" } else { "s" },
                names.join(", ")
            )
        }
    }
}
