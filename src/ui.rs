/// User interface and status output utilities
///
/// This module handles:
/// - Colored terminal text
/// - Status and error message formatting
///
/// Status goes to stderr so stdout carries only the converted report.
use std::io::Write;

/// Print the "labsum: " prefix for status messages
fn print_status_header() {
    eprint!("labsum: ");
}

/// Print colored text to stderr, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        match term::stderr() {
            Some(ref mut t) => {
                if t.fg(fg).is_err() {
                    return false;
                }
                let _ = t.attr(term::Attr::Bold);
                if write!(t, "{}", s).is_err() {
                    return false;
                }
                let _ = t.reset();
                true
            }
            None => false,
        }
    }
}

/// Print a status message with "labsum: " prefix
pub fn status(s: &str) {
    print_status_header();
    eprintln!("{}", s);
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    print_color("error", term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
}
