//! `htmldown`: read HTML from a file or stdin, write Markdown to stdout or a file.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use htmldown::{Options, DEFAULT_MAX_DEPTH};

/// Convert HTML to Markdown
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Input HTML file (default: stdin; `-` also reads stdin)
    input: Option<PathBuf>,

    /// Write Markdown here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pass <script> elements through as raw HTML
    #[arg(long)]
    script: bool,

    /// Pass <style> elements through as raw HTML
    #[arg(long)]
    style: bool,

    /// Drop whitespace-only text between elements
    #[arg(long)]
    trim_space: bool,

    /// Give up on documents nested deeper than this
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            script: self.script,
            style: self.style,
            trim_space: self.trim_space,
            max_depth: self.max_depth,
            ..Options::default()
        }
    }

    fn reader(&self) -> Result<Box<dyn Read>> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            _ => Ok(Box::new(io::stdin().lock())),
        }
    }

    fn writer(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let reader = cli.reader()?;

    // The output file is only touched once conversion has succeeded
    let mut markdown = Vec::new();
    htmldown::convert(&mut markdown, reader, &cli.options()).context("conversion failed")?;

    let mut writer = cli.writer()?;
    writer.write_all(&markdown).context("failed to write output")?;
    writer.flush().context("failed to write output")?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{:?}", err);
            eprintln!("htmldown: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
