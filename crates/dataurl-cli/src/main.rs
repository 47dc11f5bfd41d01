use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use dataurl_core::{ErrorKind, Parcel, ParseError};
use log::{debug, info};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "dataurl")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("DATAURL_BUILD_COMMIT"),
    " ",
    env!("DATAURL_BUILD_DATE"),
    ")"
))]
#[command(
    about = "Decode RFC 2397 data: URIs into their media type and payload.",
    long_about = None,
    after_help = "Examples:\n  dataurl decode 'data:,Hello%20world'\n  dataurl decode 'data:image/gif;base64,R0lGOD...' -o image.gif\n  dataurl decode - --info --pretty < uri.txt\n  dataurl media-type ';charset=utf-8'"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a data URI and write its payload.
    Decode {
        /// The data URI, or `-` to read it from stdin
        uri: String,

        /// Write the payload to this file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Print a JSON summary instead of the payload
        #[arg(long, conflicts_with = "output")]
        info: bool,

        /// Pretty-print the JSON summary
        #[arg(long, requires = "info")]
        pretty: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Print the normalized form of a data URI media type.
    MediaType {
        /// Raw media type, e.g. `text/csv` or `;charset=utf-8`
        raw: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Decode {
            uri,
            output,
            info,
            pretty,
            quiet,
        } => cmd_decode(&uri, output, info, pretty, quiet),
        Commands::MediaType { raw } => cmd_media_type(&raw),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Info);
        }
        2 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

impl From<ParseError> for CliError {
    fn from(err: ParseError) -> Self {
        let hint = match err.kind() {
            ErrorKind::NotADataUri => "data URIs start with `data:`",
            ErrorKind::Syntax => {
                "separate the media type from the payload with `,` and check the payload encoding"
            }
            ErrorKind::BadMediaType => "media types look like `type/subtype;name=value`",
            ErrorKind::Internal => "this is a bug in dataurl; please report it",
        };
        CliError::new(err.to_string(), Some(hint.to_string()))
    }
}

/// JSON summary printed by `decode --info`.
#[derive(Debug, Serialize)]
struct ParcelInfo<'a> {
    media_type: &'a str,
    bytes: usize,
    utf8: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

impl<'a> ParcelInfo<'a> {
    fn new(parcel: &'a Parcel) -> Self {
        let text = parcel.text().ok();
        Self {
            media_type: parcel.media_type(),
            bytes: parcel.len(),
            utf8: text.is_some(),
            text,
        }
    }
}

fn cmd_decode(
    uri: &str,
    output: Option<PathBuf>,
    info: bool,
    pretty: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let uri = read_uri(uri)?;
    let parcel = dataurl_core::parse(&uri)?;
    debug!(
        "decoded {} bytes with media type {}",
        parcel.len(),
        parcel.media_type()
    );

    if info {
        let json = serialize_info(&ParcelInfo::new(&parcel), pretty)?;
        println!("{}", json);
        return Ok(());
    }

    let Some(output) = output else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(parcel.as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write payload to stdout")?;
        return Ok(());
    };

    write_output(&output, parcel.as_bytes())?;
    info!("payload written to {}", output.display());
    if !quiet {
        eprintln!(
            "OK: {} bytes ({}) -> {}",
            parcel.len(),
            parcel.media_type(),
            output.display()
        );
    }
    Ok(())
}

fn cmd_media_type(raw: &str) -> Result<(), CliError> {
    let normalized = dataurl_core::normalize_media_type(raw).map_err(ParseError::from)?;
    println!("{}", normalized);
    Ok(())
}

fn read_uri(arg: &str) -> Result<String, CliError> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut uri = String::new();
    io::stdin()
        .read_to_string(&mut uri)
        .context("Failed to read data URI from stdin")?;
    let trimmed = uri.trim_end_matches(['\r', '\n']);
    if trimmed.is_empty() {
        return Err(CliError::new(
            "no data URI on stdin",
            Some("pipe a single `data:` URI into `dataurl decode -`".to_string()),
        ));
    }
    Ok(trimmed.to_string())
}

fn serialize_info(info: &ParcelInfo<'_>, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(info)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(info)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    if path.is_dir() {
        return Err(CliError::new(
            format!("output path is a directory: {}", path.display()),
            Some("pass a file path to -o/--output".to_string()),
        ));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, bytes)
        .with_context(|| format!("Failed to write payload: {}", path.display()))?;
    Ok(())
}
