use anyhow::{Context, Result, bail};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::fs;
use std::path::PathBuf;
use tickpaper::pipeline::{self, Anomaly};
use tickpaper::sink::{ClipboardSink, FileSink, Sink, StdoutSink};
use tickpaper::{cli, rows};

enum Output {
    Clipboard,
    Stdout,
    File(PathBuf),
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Handle help flag
    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" || args[1] == "help" {
        cli::print_help("tickpaper");
        return Ok(());
    }

    let mut input: Option<PathBuf> = None;
    let mut output = Output::Clipboard;
    let mut verbose = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--stdout" => output = Output::Stdout,
            "-o" | "--output" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("{} requires a file path", arg))?;
                output = Output::File(PathBuf::from(path));
            }
            "-v" | "--verbose" => verbose = true,
            other if other.starts_with('-') => bail!("Unknown option '{}'", other),
            other => input = Some(PathBuf::from(other)),
        }
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // Logs go to stderr so `--stdout` output stays pipeable.
    TermLogger::init(
        level,
        ConfigBuilder::new().build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let path = match input {
        Some(p) => p,
        None => {
            cli::print_help("tickpaper");
            bail!("No input file given");
        }
    };

    // A missing input is the only fatal validation: no partial output.
    if !path.exists() {
        bail!("Input file '{}' does not exist", path.display());
    }

    // A wrong extension is reported but does not stop the run.
    let is_csv = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        report(&Anomaly::WrongExtension {
            path: path.display().to_string(),
        });
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    let records = rows::parse(&contents)?;
    let conversion = pipeline::convert(&records);
    for anomaly in &conversion.anomalies {
        report(anomaly);
    }

    let mut sink: Box<dyn Sink> = match output {
        Output::Clipboard => Box::new(ClipboardSink),
        Output::Stdout => Box::new(StdoutSink),
        Output::File(path) => Box::new(FileSink { path }),
    };
    sink.deliver(&conversion.text)
}

/// The core names anomalies; user-facing wording lives here.
fn report(anomaly: &Anomaly) {
    match anomaly {
        Anomaly::HeaderNotFound => log::warn!(
            "no header row found in the backup; converting every row as task data \
             (output may contain preamble rows)"
        ),
        Anomaly::WrongExtension { path } => {
            log::warn!("'{}' does not look like a .csv backup, trying anyway", path);
        }
    }
}
