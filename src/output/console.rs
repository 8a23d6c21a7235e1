//! Console output utilities.

use console::style;

use crate::config::Config;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Chaos Downloader                                  ║
║     Fetch, extract and merge Chaos datasets           ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(config: &Config, selection: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Index:     {}", config.source.index_url);
    println!("  Selection: {}", selection);
    println!("  Directory: {}", config.output.base_directory.display());
    println!(
        "  Combined:  {} (*{})",
        config.output.combined_file.display(),
        config.output.text_extension
    );
    println!();
}
