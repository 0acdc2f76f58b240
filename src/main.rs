use std::{
    env,
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr};
use gibbon::{
    display_error,
    parser::parser::parse,
    repl::repl::{self, Mode},
};
use log::{info, LevelFilter};

/// Scans and parses gibbon source code
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Source file to parse. Starts the interactive loop when omitted
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    file: Option<PathBuf>,
    /// What the interactive loop prints for every line
    #[clap(long, value_enum, default_value_t = Mode::Tokens)]
    mode: Mode,
    /// More logging, can be repeated
    #[clap(short = 'v', action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Less logging, can be repeated
    #[clap(short = 'q', action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl Args {
    fn log_level_filter(&self) -> LevelFilter {
        match i16::from(self.verbose) - i16::from(self.quiet) {
            ..=-2 => LevelFilter::Off,
            -1 => LevelFilter::Error,
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            3.. => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level_filter())
        .parse_default_env()
        .init();

    match &args.file {
        Some(file) => parse_file(file),
        None => {
            let user = env::var("USER").unwrap_or_else(|_| String::from("there"));
            println!("Welcome to the gibbon interpreter {}!", user);

            repl::start(io::stdin().lock(), io::stdout(), args.mode)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn parse_file(path: &Path) -> Result<ExitCode> {
    let file_name = path.to_string_lossy().into_owned();
    let start = Instant::now();

    let file = File::open(path).wrap_err_with(|| format!("failed to open {}", file_name))?;
    let (program, errors) = parse(BufReader::new(file), file_name.clone());

    info!("Parsed {} in {:?}", file_name, start.elapsed());

    if errors.is_empty() {
        println!("{}", program);
        return Ok(ExitCode::SUCCESS);
    }

    let source = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", file_name))?;
    for error in &errors {
        eprint!("{}", display_error(error, &source, &file_name));
    }

    Ok(ExitCode::FAILURE)
}
