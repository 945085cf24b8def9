use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use parking_lot::Mutex;
use std::time::Duration;

/// Track quiet mode state
static QUIET_MODE: std::sync::LazyLock<Mutex<bool>> =
    std::sync::LazyLock::new(|| Mutex::new(false));

/// Enable or disable quiet mode
pub fn set_quiet_mode(enabled: bool) {
    let mut quiet_mode = QUIET_MODE.lock();
    *quiet_mode = enabled;
}

/// Check if quiet mode is enabled
pub fn is_quiet_mode() -> bool {
    *QUIET_MODE.lock()
}

pub fn create_spinner(message: &str) -> ProgressBar {
    if is_quiet_mode() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    match ProgressStyle::default_spinner()
        .tick_chars("✦✧✶✷✸✹✺✻✼✽")
        .template("{spinner} {msg}")
    {
        Ok(style) => pb.set_style(style),
        Err(e) => crate::log_debug!("Could not set spinner style: {}", e),
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn print_warning(message: &str) {
    if !is_quiet_mode() {
        println!("{}", message.yellow().bold());
    }
}

/// Errors go to stdout with a cross mark and are never silenced.
pub fn print_error(message: &str) {
    println!("{} {}", "❌", message.red().bold());
}

pub fn print_success(message: &str) {
    if !is_quiet_mode() {
        println!("{} {}", "✅", message.green().bold());
    }
}

pub fn print_version(version: &str) {
    println!(
        "{} {} {}",
        "📝 git-relnotes".magenta().bold(),
        "version".cyan(),
        version.green()
    );
}

/// Print a section banner such as `=== RELEASE NOTES ===`
pub fn print_banner(title: &str) {
    if !is_quiet_mode() {
        println!("\n{}\n", format!("=== {title} ===").bright_purple().bold());
    }
}

/// Print a simple message (respects quiet mode)
pub fn print_message(message: &str) {
    if !is_quiet_mode() {
        println!("{message}");
    }
}

/// Print an empty line (respects quiet mode)
pub fn print_newline() {
    if !is_quiet_mode() {
        println!();
    }
}
