use anyhow::{Context, Result};
use backstage_markdown::{render_document, translate, Block};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::str::FromStr;
use structopt::StructOpt;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Html,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "html" => Ok(Format::Html),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format `{}` (expected html or json)", other)),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(name = "backstage-markdown", about = "Render backstage markdown pages")]
struct Opt {
    /// Markdown file to read; stdin when omitted
    #[structopt(short, long, parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Output format: html or json
    #[structopt(short, long, default_value = "html")]
    pub format: Format,

    #[structopt(long = "debug")]
    pub debug: bool,
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn read(opt: &Opt) -> Result<String> {
    match &opt.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

fn convert(blocks: &[Block], format: Format) -> Result<String> {
    match format {
        Format::Html => Ok(translate(blocks)),
        Format::Json => serde_json::to_string_pretty(blocks).context("Failed to serialize document"),
    }
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_logging(opt.debug);
    debug!(opt = ?opt, "starting");

    let content = read(&opt)?;
    let blocks = match render_document(Some(content.as_str())) {
        Some(blocks) => blocks,
        None => {
            debug!("empty input, nothing to render");
            return Ok(());
        }
    };

    let output = convert(&blocks, opt.format)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", output).context("Failed to write output")?;
    Ok(())
}
