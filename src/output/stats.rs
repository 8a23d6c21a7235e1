//! Statistics reporting.

use console::style;

use crate::concat::ConcatSummary;
use crate::download::DownloadState;

/// Print statistics for the download loop.
pub fn print_download_stats(state: &DownloadState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Download Statistics:").bold());
    println!("  Selected:   {}", state.selected);
    println!("  Completed:  {}", style(state.completed).green());
    if state.failed() > 0 {
        println!("  Failed:     {}", style(state.failed()).red());
        for failure in &state.failures {
            println!("    - {}: {}", failure.name, failure.reason);
        }
    }
    println!("  Files:      {} extracted", state.files_extracted);
    if state.unsafe_entries > 0 {
        println!(
            "  Unsafe:     {} archive entries skipped",
            style(state.unsafe_entries).yellow()
        );
    }
    println!("  Downloaded: {} bytes", state.bytes_downloaded);
    println!("{}", style("═".repeat(50)).dim());
}

/// Print the result of the concatenation step.
pub fn print_concat_summary(summary: &ConcatSummary) {
    println!(
        "Merged {} files ({} bytes) into {}{}",
        style(summary.appended).green(),
        summary.bytes_written,
        style(summary.output.display()).bold(),
        if summary.failed > 0 {
            format!(" ({} failed)", style(summary.failed).red())
        } else {
            String::new()
        }
    );
}
