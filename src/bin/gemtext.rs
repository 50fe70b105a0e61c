//! Command-line interface for gemtext
//! Renders a Gemtext file to HTML, Gemtext, Markdown, a table of contents or a token dump.
//!
//! Usage:
//!   gemtext `<path>` [--format `<format>`] [--config `<file>`]   - Render a file (`-` reads stdin)
//!   gemtext `<path>` --title                                  - Print the document title
//!   gemtext --list-formats                                    - List all available formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use config::ConfigError;
use gemtext::{FormatError, FormatRegistry, GemParser, Loader, RenderConfig};
use std::io::{self, Read};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

fn main() -> ExitCode {
    let matches = Command::new("gemtext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Gemtext documents to HTML, Gemtext or Markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the Gemtext file, or '-' for stdin")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: html)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Drop pass-through blocks and horizontal rules from HTML")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-expand-images")
                .long("no-expand-images")
                .help("Render links to images as plain links")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-link-images")
                .long("no-link-images")
                .help("Do not wrap HTML images in a link to the image")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .help("Print the document title instead of rendering")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return ExitCode::SUCCESS;
    }

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("gemtext=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for (name, description) in registry.descriptions() {
        println!("  {:<12} {}", name, description);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    let source = read_source(path)?;

    let mut parser = GemParser::new();
    parser.parse(Some(&source));

    if matches.get_flag("title") {
        if let Some(title) = parser.title() {
            println!("{}", title);
        }
        return Ok(());
    }

    let format = resolve_format(&config);
    tracing::debug!(format, path, "rendering document");

    let registry = FormatRegistry::with_options(&config);
    if let Some(output) = registry.render(parser.tokens(), format)? {
        print!("{}", output);
        if !output.is_empty() && !output.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

/// Defaults, then `--config`, then command-line flags
fn load_config(matches: &ArgMatches) -> Result<RenderConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.format(format)?;
    }
    if matches.get_flag("strict") {
        loader = loader.strict()?;
    }
    if matches.get_flag("no-expand-images") {
        loader = loader.without_image_expansion()?;
    }
    if matches.get_flag("no-link-images") {
        loader = loader.without_image_links()?;
    }
    Ok(loader.build()?)
}

/// Strict mode turns a request for `html` into `html-strict`
fn resolve_format(config: &RenderConfig) -> &str {
    match config.output.format.as_str() {
        "html" if config.html.strict => "html-strict",
        format => format,
    }
}

fn read_source(path: &str) -> Result<String, CliError> {
    let result = if path == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).map(|_| source)
    } else {
        std::fs::read_to_string(path)
    };
    result.map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}
