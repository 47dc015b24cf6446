//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//!
//! Usage: `extract_stdin [MIN_COUNT MAX_COUNT] < page.html`

use block_extract::{extract_bytes, ExtractResult, Options};
use std::io::{self, Read};

fn main() {
    let mut args = std::env::args().skip(1);
    let options = match (args.next(), args.next()) {
        (Some(min), Some(max)) => match (min.parse(), max.parse()) {
            (Ok(min), Ok(max)) => Options::with_window(min, max),
            _ => {
                eprintln!("MIN_COUNT and MAX_COUNT must be integers");
                std::process::exit(2);
            }
        },
        _ => Options::default(),
    };

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let output = extract_bytes(&html, &options).unwrap_or_else(|_| ExtractResult::default());

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
