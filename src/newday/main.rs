use clap::Parser;
use colored::*;
use newday::api::{CmdMessage, MessageLevel, NewDayApi};
use newday::commands::generate::GenerateOptions;
use newday::commands::include::IncludeOptions;
use newday::config::NewDayConfig;
use newday::error::Result;
use newday::format::DateKey;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match NewDayConfig::default_dir() {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading config");
            NewDayConfig::load(&dir)?
        }
        None => NewDayConfig::default(),
    };

    let date = match cli.date.as_deref() {
        Some(s) => DateKey::parse(s)?,
        None => DateKey::today(),
    };

    let page_break_override = cli.page_break_override();
    let generate = GenerateOptions {
        extension: cli.extension.unwrap_or_else(|| config.file_ext.clone()),
        subheadings: cli.subheading.unwrap_or(config.subheadings),
        overwrite: cli.overwrite,
        titles: cli.title,
    };
    let include = IncludeOptions {
        index_file: cli.index.unwrap_or_else(|| config.index_file.clone()),
        page_break: page_break_override.unwrap_or(config.page_break),
    };

    let cwd = std::env::current_dir()?;
    let api = NewDayApi::new(cwd, config);
    let result = api.new_day(date, &generate, &include)?;
    print_messages(&result.messages);

    if let Some(path) = &result.note_path {
        debug!(path = %path.display(), outcome = ?result.outcome, "done");
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
