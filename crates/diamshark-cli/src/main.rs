use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use diamshark_core::dictionary::StaticDictionary;
use diamshark_core::enrich::DecoderRegistry;
use diamshark_core::{MessageDecoder, OutputFormat, RecordWriter, decode_pcap_file};
use glob::glob;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("DIAMSHARK_BUILD_COMMIT"),
    ", ",
    env!("DIAMSHARK_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = "Examples:\n  diamshark pcap decode s6a.pcapng -o messages.jsonl\n  diamshark pcap dump s6a.pcap --stdout --pretty\n  diamshark pcap decode 'captures/*.pcapng' --stdout --dictionary gx.json";

#[derive(Parser, Debug)]
#[command(name = "diamshark")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decode Diameter messages from PCAP/PCAPNG captures into JSON records.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on PCAP/PCAPNG inputs.
    Pcap {
        #[command(subcommand)]
        command: PcapCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PcapCommands {
    /// Decode every Diameter message in a capture, one JSON record per message.
    #[command(alias = "dump")]
    #[command(after_help = EXAMPLES)]
    Decode {
        /// Path (or glob pattern) to a .pcap or .pcapng file
        input: PathBuf,

        /// Output path for the JSON records
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write JSON records to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Pretty-print each record
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// One record per line (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Extra AVP definitions (JSON); may be repeated
        #[arg(long = "dictionary", value_name = "JSON")]
        dictionaries: Vec<PathBuf>,

        /// Exit with a non-zero code if any record failed to serialize
        #[arg(long)]
        strict: bool,
    },
}

struct DecodeArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    pretty: bool,
    quiet: bool,
    dictionaries: Vec<PathBuf>,
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Pcap { command } => match command {
            PcapCommands::Decode {
                input,
                output,
                stdout,
                pretty,
                compact: _,
                quiet,
                dictionaries,
                strict,
            } => cmd_pcap_decode(DecodeArgs {
                input,
                output: if stdout { None } else { output },
                pretty,
                quiet,
                dictionaries,
                strict,
            }),
        },
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

/// Log events go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
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

fn cmd_pcap_decode(args: DecodeArgs) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&args.input)?;
    validate_input_file(&resolved_input)?;
    let input_abs = fs::canonicalize(&resolved_input)
        .with_context(|| format!("Failed to resolve input path: {}", resolved_input.display()))?;
    if let Some(output) = args.output.as_ref() {
        ensure_output_differs(output, &input_abs)?;
    }

    let decoder = MessageDecoder::new(
        load_dictionary(&args.dictionaries)?,
        DecoderRegistry::default(),
    );
    let format = if args.pretty {
        OutputFormat::Pretty
    } else {
        OutputFormat::Compact
    };

    let (out, destination): (Box<dyn Write>, String) = match args.output.as_ref() {
        Some(output) => (
            Box::new(BufWriter::new(create_output(output)?)),
            output.display().to_string(),
        ),
        None => (
            Box::new(BufWriter::new(io::stdout().lock())),
            "stdout".to_string(),
        ),
    };
    let mut writer = RecordWriter::new(out, format);

    let summary = decode_pcap_file(&resolved_input, &decoder, &mut writer)
        .context("PCAP/PCAPNG decoding failed")?;

    if !args.quiet {
        eprintln!(
            "OK: {} records written -> {}",
            summary.records_written, destination
        );
    }
    if args.strict && summary.serialize_failures > 0 {
        return Err(CliError::new(
            format!("{} records failed to serialize", summary.serialize_failures),
            Some("see the warnings above for the affected messages".to_string()),
        ));
    }
    Ok(())
}

fn load_dictionary(paths: &[PathBuf]) -> Result<StaticDictionary, CliError> {
    let mut dictionary = StaticDictionary::builtin();
    for path in paths {
        dictionary.load_json(path).map_err(|err| {
            CliError::new(
                format!("failed to load dictionary {}: {}", path.display(), err),
                Some(
                    "expected {\"applications\":[{\"id\":N,\"avps\":[{\"code\":C,\"name\":\"..\",\"type\":\"..\"}]}]}"
                        .to_string(),
                ),
            )
        })?;
    }
    debug!(
        files = paths.len(),
        definitions = dictionary.len(),
        "dictionary ready"
    );
    Ok(dictionary)
}

fn ensure_output_differs(output: &Path, input_abs: &Path) -> Result<(), CliError> {
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // A missing parent is created later, so it cannot hold the input.
    let Ok(output_dir) = fs::canonicalize(parent) else {
        return Ok(());
    };
    let file_name = output
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid output path: {}", output.display()))?;
    if output_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn create_output(output: &Path) -> Result<File, CliError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    Ok(file)
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .pcap or .pcapng file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .pcap or .pcapng file".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "pcap" && ext != "pcapng" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .pcap or .pcapng file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected .pcap or .pcapng".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single capture file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
