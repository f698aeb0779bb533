//! Command-line front end: brute-force a whole-word route cipher.
//!
//! Usage:
//!   routecrack --config demos/union_dispatch.json
//!   routecrack --input cipher.txt --rows 5 --columns 4
//!   echo "A B C D" | routecrack --input - --rows 2 --columns 2 --key "-1 2"

use std::fs;
use std::io::{self, BufWriter, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use routecrack::validator::diagnose;
use routecrack::{
    CrackConfig, Exhaustive, FixedKeys, Key, Reporter, RouteCipherError, RouteCracker,
};

/// Exit status for configuration errors such as a dimension mismatch.
const EXIT_CONFIG: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "routecrack",
    version,
    about = "Brute-force decrypt a whole-word route cipher"
)]
struct Cli {
    /// JSON config file with `ciphertext`, `rows` and `columns`.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ciphertext given inline (overrides the config file).
    #[arg(long, conflicts_with = "input")]
    ciphertext: Option<String>,

    /// Read the ciphertext from a file, or `-` for stdin.
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Number of rows in the transposition grid.
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns in the transposition grid.
    #[arg(long, alias = "cols")]
    columns: Option<usize>,

    /// Decode only this key (repeatable), e.g. `--key "-1 2 -3 4"`.
    #[arg(long = "key", value_name = "KEY", allow_hyphen_values = true)]
    keys: Vec<Key>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\nERROR - {}. Terminating program.", err);
            if err.is_configuration() {
                ExitCode::from(EXIT_CONFIG)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), RouteCipherError> {
    let config = resolve_config(&cli)?;

    let stdout = io::stdout();
    let mut reporter = Reporter::new(BufWriter::new(stdout.lock()));
    reporter.diagnostics(&diagnose(config.words().len()))?;

    let cracker = match RouteCracker::new(config) {
        Ok(cracker) => cracker,
        Err(err) => {
            reporter.flush()?;
            return Err(err);
        }
    };

    let result = if cli.keys.is_empty() {
        cracker.run(&Exhaustive, &mut reporter)
    } else {
        cracker.run(&FixedKeys::new(cli.keys), &mut reporter)
    };
    reporter.flush()?;
    result.map(|_| ())
}

/// Merges the optional config file with command-line overrides.
fn resolve_config(cli: &Cli) -> Result<CrackConfig, RouteCipherError> {
    let base = cli
        .config
        .as_deref()
        .map(CrackConfig::from_json_file)
        .transpose()?;

    let ciphertext = match (&cli.ciphertext, &cli.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_input(path)?,
        (None, None) => base
            .as_ref()
            .map(|b| b.ciphertext.clone())
            .ok_or(RouteCipherError::MissingConfig("ciphertext"))?,
    };
    let rows = cli
        .rows
        .or(base.as_ref().map(|b| b.rows))
        .ok_or(RouteCipherError::MissingConfig("rows"))?;
    let columns = cli
        .columns
        .or(base.as_ref().map(|b| b.columns))
        .ok_or(RouteCipherError::MissingConfig("columns"))?;

    Ok(CrackConfig::new(ciphertext, rows, columns))
}

fn read_input(path: &Path) -> Result<String, RouteCipherError> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
