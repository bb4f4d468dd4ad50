mod codes;
mod config;
mod display;
mod error;
mod matcher;
mod model;
mod state;
mod ui;
mod viewport;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use crate::codes::Category;
use crate::config::{load_config, Config};
use crate::ui::picker::{self, Outcome};

const SOURCE_URL: &str = "https://github.com/lethang7794/httpcode";

#[derive(Parser, Debug)]
#[command(author, version, about = "HTTP status code lookup tool", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    /// Status code to look up (e.g. 404)
    code: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all status codes, or those of one class (1xx..5xx)
    List {
        category: Option<String>,
    },
    /// Pick a status code interactively with fuzzy search
    #[command(alias = "fzf")]
    Search {
        /// Hide the detail pane
        #[arg(long)]
        no_preview: bool,
    },
    /// Show version and build information
    Version,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config().context("failed to load configuration")?;
    let mut stdout = io::stdout();

    match (args.command, args.code) {
        (Some(Command::List { category }), _) => list(&mut stdout, category.as_deref(), &config)?,
        (Some(Command::Search { no_preview }), _) => {
            let preview = config.general.preview && !no_preview;
            search(&mut stdout, preview, &config)?;
        }
        (Some(Command::Version), _) => version(&mut stdout)?,
        (None, Some(code)) => lookup(&mut stdout, &code, &config)?,
        (None, None) => Args::command().write_help(&mut stdout)?,
    }

    stdout.flush()?;
    Ok(())
}

fn lookup(out: &mut impl Write, arg: &str, config: &Config) -> Result<()> {
    let Ok(code) = arg.parse::<i64>() else {
        writeln!(out, "Unknown command: {arg}")?;
        Args::command().write_help(out)?;
        return Ok(());
    };

    match u16::try_from(code).ok().and_then(codes::lookup) {
        Some(entry) => display::write_record(out, &entry.to_record(), &config.theme)?,
        None => display::write_not_found(out, arg, &config.theme)?,
    }
    Ok(())
}

fn list(out: &mut impl Write, category: Option<&str>, config: &Config) -> Result<()> {
    let category = match category {
        Some(class) => match Category::parse(class) {
            Some(category) => Some(category),
            None => {
                writeln!(out, "Invalid category. Use 1xx, 2xx, 3xx, 4xx, or 5xx.")?;
                return Ok(());
            }
        },
        None => None,
    };
    display::write_list(out, category, &config.theme)?;
    Ok(())
}

fn search(out: &mut impl Write, preview: bool, config: &Config) -> Result<()> {
    let outcome = picker::pick(codes::records(), config, preview).context("interactive search failed")?;
    if let Outcome::Selected(record) = outcome {
        display::write_record(out, &record, &config.theme)?;
    }
    Ok(())
}

fn version(out: &mut impl Write) -> Result<()> {
    writeln!(out, "httpcode version {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Commit: {}", option_env!("HTTPCODE_COMMIT").unwrap_or("unknown"))?;
    writeln!(out, "Built: {}", option_env!("HTTPCODE_BUILD_DATE").unwrap_or("unknown"))?;
    writeln!(out, "Source: {SOURCE_URL}")?;
    Ok(())
}
