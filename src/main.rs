use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use csv2gpx::{ConvertError, ConvertOptions};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "csv2gpx", version)]
#[command(about = "Convert timestamp,latitude,longitude CSV rows into a GPX track")]
struct Cli {
    /// The CSV file to be converted (defaults to STDIN)
    infile: Option<PathBuf>,
    /// Where to write the resulting GPX file (defaults to STDOUT)
    outfile: Option<PathBuf>,
    /// Skip the first line, usually holding the headers
    #[arg(short, long)]
    skip_first_line: bool,
    /// Indent the generated XML
    #[arg(short, long)]
    pretty: bool,
    /// Log more details to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            skip_first_line: self.skip_first_line,
            pretty: self.pretty,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Conversion failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<(), ConvertError> {
    let options = cli.options();

    // The output is only opened once the whole input converted.
    let document = match file_arg(&cli.infile) {
        None => csv2gpx::build_document(io::stdin().lock(), &options)?,
        Some(path) => csv2gpx::build_document(open(path)?, &options)?,
    };

    let sink: Box<dyn Write> = match file_arg(&cli.outfile) {
        None => Box::new(io::stdout().lock()),
        Some(path) => Box::new(File::create(path).map_err(|source| ConvertError::Open {
            path: path.to_path_buf(),
            source,
        })?),
    };

    csv2gpx::write_output(&document, BufWriter::new(sink), &options)?;
    Ok(())
}

/// `-` and a missing argument both mean the standard stream.
fn file_arg(arg: &Option<PathBuf>) -> Option<&Path> {
    arg.as_deref().filter(|path| path.as_os_str() != "-")
}

fn open(path: &Path) -> Result<File, ConvertError> {
    File::open(path).map_err(|source| ConvertError::Open {
        path: path.to_path_buf(),
        source,
    })
}
