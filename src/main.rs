//! Slide Templates CLI
//!
//! Usage:
//!   slide-templates list
//!   slide-templates schema <ID>
//!   slide-templates defaults <ID>
//!   slide-templates validate <ID> [FILE]
//!   slide-templates render <ID> [FILE] [--theme FILE] [--strict] [--no-fonts]
//!   slide-templates check

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::prelude::*;

use slide_templates::{
    catalog, render_validated, render_with_config, RenderConfig, RenderError, SlideTemplate,
    SvgConfig, Theme,
};

#[derive(Parser)]
#[command(name = "slide-templates")]
#[command(about = "Schema-validated presentation slide templates rendered to SVG")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every template in catalog order
    List,

    /// Print a template's data schema as JSON Schema
    Schema {
        /// Template id
        id: String,
    },

    /// Print a template's default slide data
    Defaults {
        /// Template id
        id: String,
    },

    /// Validate slide data (JSON) against a template's schema
    Validate {
        /// Template id
        id: String,
        /// Input file (reads from stdin if not provided)
        input: Option<PathBuf>,
    },

    /// Render slide data to SVG on stdout
    Render {
        /// Template id
        id: String,
        /// Input file (reads from stdin if not provided)
        input: Option<PathBuf>,
        /// Theme file overriding colors and fonts (TOML format)
        #[arg(short, long)]
        theme: Option<PathBuf>,
        /// Reject data that fails validation instead of rendering it
        #[arg(long)]
        strict: bool,
        /// Omit webfont imports from the SVG
        #[arg(long)]
        no_fonts: bool,
    },

    /// Check every template's defaults against its own schema
    Check,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slide_templates=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            for template in catalog().iter() {
                println!("{:<28} {:<18} {}", template.id, template.name, template.description);
            }
        }
        Command::Schema { id } => {
            let template = lookup(&id);
            print_json(&template.schema.to_json_schema());
        }
        Command::Defaults { id } => {
            let template = lookup(&id);
            print_json(&template.defaults());
        }
        Command::Validate { id, input } => {
            let template = lookup(&id);
            let data = read_data(input.as_deref()).unwrap_or(Value::Null);
            match template.validate(&data) {
                Ok(()) => println!("{}: ok", id),
                Err(errors) => {
                    for error in &errors {
                        eprintln!("error: {}", error);
                    }
                    std::process::exit(1);
                }
            }
        }
        Command::Render {
            id,
            input,
            theme,
            strict,
            no_fonts,
        } => {
            let theme = match &theme {
                Some(path) => load_theme(path),
                None => Theme::default(),
            };
            let config = RenderConfig::new()
                .with_theme(theme)
                .with_svg(SvgConfig::default().with_embed_fonts(!no_fonts));
            let data = read_data(input.as_deref());

            let result = if strict {
                render_validated(&id, data.as_ref().unwrap_or(&Value::Null), config)
            } else {
                render_with_config(&id, data.as_ref(), config)
            };
            match result {
                Ok(svg) => println!("{}", svg),
                Err(RenderError::Invalid { errors, .. }) => {
                    for error in &errors {
                        eprintln!("error: {}", error);
                    }
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Check => {
            let problems = catalog().check();
            if problems.is_empty() {
                info!(templates = catalog().len(), "all template defaults are valid");
                println!("{} templates ok", catalog().len());
                return;
            }
            for (id, errors) in &problems {
                for error in errors {
                    eprintln!("{}: {}", id, error);
                }
            }
            std::process::exit(1);
        }
    }
}

fn lookup(id: &str) -> &'static SlideTemplate {
    match catalog().lookup(id) {
        Ok(template) => template,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_theme(path: &Path) -> Theme {
    match Theme::from_file(path) {
        Ok(theme) => {
            for name in theme.unknown_variables() {
                tracing::warn!(variable = name, "theme variable is not used by any template");
            }
            theme
        }
        Err(e) => {
            eprintln!("Error loading theme '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

/// Read slide data from a file, or from stdin when it is piped
///
/// Returns None when there is no file and stdin is interactive.
fn read_data(input: Option<&Path>) -> Option<Value> {
    let source = match input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None if io::stdin().is_terminal() => return None,
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            buffer
        }
    };

    if source.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(&source) {
        Ok(value) => Some(value),
        Err(e) => {
            eprintln!("Error parsing slide data: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
