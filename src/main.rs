use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use md2doc::{Config, Error};

const DEFAULT_CONFIG_FILE: &str = "md2doc.toml";

#[derive(Parser)]
#[command(name = "md2doc")]
#[command(about = "Convert Markdown text to a JSON document tree")]
struct Cli {
    /// Input Markdown file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output JSON file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Emit compact JSON regardless of config
    #[arg(long)]
    compact: bool,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut config = Config::load(&cli.config)?;
    if cli.compact {
        config.output.pretty = false;
    }
    log::debug!("using config {:?}", config);

    let markdown = read_input(cli.input.as_deref())?;
    let json = md2doc::markdown_to_json_with_config(&markdown, &config)?;

    match cli.output {
        Some(output) => {
            fs::write(&output, json + "\n").map_err(|source| Error::WriteOutput {
                path: output.display().to_string(),
                source,
            })?;
            log::info!("wrote {}", output.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json).map_err(|source| Error::WriteOutput {
                path: "<stdout>".to_string(),
                source,
            })?;
        }
    }

    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String, Error> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| Error::ReadInput {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut markdown = String::new();
            io::stdin()
                .read_to_string(&mut markdown)
                .map_err(|source| Error::ReadInput {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(markdown)
        }
    }
}
