//! Styled terminal messages.

use console::{style, StyledObject};

/// Check if color output is disabled via the `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

type Paint = fn(StyledObject<String>) -> StyledObject<String>;

fn tagged(tag: &str, text: &str, color: bool, paint: Paint) -> String {
    let tag = format!("[{tag}]");
    if color {
        format!("{} {text}", paint(style(tag)).bold())
    } else {
        format!("{tag} {text}")
    }
}

/// Header line, e.g. `=== Benchmark ===`.
#[must_use]
pub fn header_line(text: &str, color: bool) -> String {
    let line = format!("=== {text} ===");
    if color {
        style(line).bold().cyan().to_string()
    } else {
        line
    }
}

/// Print a styled header.
pub fn print_header(text: &str) {
    println!("{}", header_line(text, !is_color_disabled()));
}

/// Print a success message.
pub fn print_success(text: &str) {
    println!("{}", tagged("OK", text, !is_color_disabled(), |s| s.green()));
}

/// Print a warning to stderr.
pub fn print_warning(text: &str) {
    eprintln!("{}", tagged("WARN", text, !is_color_disabled(), |s| s.yellow()));
}

/// Print an error to stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", tagged("ERROR", text, !is_color_disabled(), |s| s.red()));
}
