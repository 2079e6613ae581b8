use crate::config::OutputMode;
use crate::error::AppError;

pub fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

pub fn print_text(text: &str) {
    println!("{}", text);
}

/// Errors go to stderr, as JSON when stdout is machine-readable.
pub fn print_error(err: &AppError, mode: OutputMode) {
    if mode.is_structured() {
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&err.to_json()).unwrap_or_default()
        );
    } else {
        eprintln!("error: {}", err);
    }
}
