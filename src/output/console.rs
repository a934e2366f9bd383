//! Console output utilities.

use console::{style, StyledObject};

/// Render a message behind a styled status tag, e.g. `WARN Test mode is on`.
fn tagged_line(tag: StyledObject<&str>, message: &str) -> String {
    format!("{} {}", tag, message)
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{}", tagged_line(style("INFO").cyan().bold(), message));
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{}", tagged_line(style("OK").green().bold(), message));
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{}", tagged_line(style("WARN").yellow().bold(), message));
}

/// Print an error message to stderr.
pub fn print_error(message: &str) {
    eprintln!("{}", tagged_line(style("ERROR").red().bold(), message));
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     bluarchive                                        ║
║     Archive your purchased Bluprint content           ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Print configuration summary.
pub fn print_config_summary(
    user_id: &str,
    output_dir: &str,
    patterns: bool,
    materials: bool,
    videos: bool,
    test_mode: &str,
) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  User:      {}", user_id);
    println!("  Directory: {}", output_dir);
    println!("  Patterns:  {}", yes_no(patterns));
    println!("  Materials: {}", yes_no(materials));
    println!("  Videos:    {}", yes_no(videos));
    println!("  Test mode: {}", test_mode);
    println!();
}
