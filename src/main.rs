// Fri Aug 28 2026 - Alex

use anyhow::Context;
use clap::Parser;
use log::{debug, error, info};
use mirror_header_gen::{
    config::Config,
    directive::DirectiveParser,
    emitter::MetaProgramEmitter,
    utils::LoggingUtils,
};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Generates a C checker program that mirrors host header definitions", long_about = None)]
struct Args {
    /// Input directive file
    input: PathBuf,

    /// Write the checker source here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    let config = Config::new()
        .with_input_file(args.input)
        .with_verbosity(args.verbose as usize)
        .with_color(!args.no_color);
    let config = match args.output {
        Some(output) => config.with_output_file(output),
        None => config,
    };

    LoggingUtils::init_logger(
        LoggingUtils::level_from_verbosity(config.verbosity),
        config.use_color,
    );

    if let Err(e) = run(&config) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    config.validate().map_err(anyhow::Error::msg)?;

    let input = config
        .input_file
        .as_deref()
        .context("input_file must be set")?;

    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let directives = DirectiveParser::parse(&text)?;
    info!("parsed {} directives from {}", directives.len(), input.display());

    let source = MetaProgramEmitter::emit(&directives)?;
    debug!("emitted {} bytes of checker source", source.len());

    match &config.output_file {
        Some(path) => {
            fs::write(path, source)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("checker source written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(source.as_bytes())?;
        }
    }

    Ok(())
}
