//! Command line driver: fetch a page (or read a saved one), extract its
//! repeated content blocks and write them to a file.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use block_extract::render::{self, Format};
use block_extract::service::{self, DEFAULT_MAX_COUNT, DEFAULT_MIN_COUNT};
use block_extract::{extract_bytes, fetch, Error, Options};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "block_extract",
    version,
    about = "Extract repeated content blocks from a web page by div class frequency"
)]
struct Cli {
    /// Page URL to fetch (also recorded in the output when --input is used)
    #[arg(required_unless_present_any = ["request", "input"])]
    url: Option<String>,

    /// Lowest class occurrence count to keep
    #[arg(long, default_value_t = DEFAULT_MIN_COUNT, allow_negative_numbers = true)]
    min_count: i64,

    /// Highest class occurrence count to keep
    #[arg(long, default_value_t = DEFAULT_MAX_COUNT, allow_negative_numbers = true)]
    max_count: i64,

    /// Output file
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: Format,

    /// Read HTML from this file instead of fetching the URL
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Fail when --min-count is greater than --max-count
    #[arg(long)]
    strict: bool,

    /// Read a JSON extraction request from stdin and print the JSON response
    #[arg(long, conflicts_with_all = ["input", "strict"])]
    request: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.request {
        return run_request();
    }

    match run(&cli) {
        Ok(path) => {
            println!("Output saved to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> block_extract::Result<PathBuf> {
    let options = Options {
        strict_window: cli.strict,
        url: cli.url.clone(),
        ..Options::with_window(cli.min_count, cli.max_count)
    };

    let result = match (&cli.input, &cli.url) {
        (Some(path), _) => extract_bytes(&fs::read(path)?, &options)?,
        (None, Some(url)) => fetch::fetch_and_extract(url, &options)?,
        (None, None) => return Err(Error::InvalidUrl("a URL or --input is required".to_string())),
    };

    for warning in &result.warnings {
        tracing::warn!("{warning}");
    }
    render::store(&cli.output, &result, cli.format)
}

fn run_request() -> ExitCode {
    let mut body = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut body) {
        eprintln!("Failed to read request from stdin: {err}");
        return ExitCode::FAILURE;
    }

    match service::dispatch("POST", &body, service::handle) {
        Ok((_, reply)) => {
            println!("{reply}");
            let ok = serde_json::from_str::<service::ExtractResponse>(&reply)
                .is_ok_and(|response| response.success);
            if ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
