//! Command-line interface for the yumlgen utility
//!
//! Provides a CLI to turn a data-model schema document into yUML class
//! diagram DSL, printed to stdout or rendered remotely into an image file.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use yumlgen::core::logging::init_logging;
use yumlgen::{
    Application, Direction, FieldLabel, MetadataProvider, RenderOptions, SchemaProvider, Style,
    YumlClient, YumlFormatter,
};

/// Yumlgen - Generate model class diagrams using yUML (http://yuml.me)
#[derive(Parser)]
#[command(name = "yumlgen")]
#[command(about = "Generate model class diagrams using yUML (http://yuml.me)")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    /// Application labels to diagram
    pub apps: Vec<String>,

    /// Automatically include all applications from the schema
    #[arg(short = 'a', long)]
    pub all_applications: bool,

    /// Schema document describing applications and models (use - for stdin)
    #[arg(long, default_value = "-")]
    pub schema: PathBuf,

    /// Render output file. File format depends on file extension,
    /// use png, jpg or pdf. Without this the DSL is printed to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Choose the chart direction. Applies only for -o
    #[arg(short, long, value_enum, default_value_t = DirectionChoice::TB)]
    pub direction: DirectionChoice,

    /// Set a scale percentage. Applies only for -o
    #[arg(short = 'p', long, default_value_t = 100)]
    pub scale: u32,

    /// Choose the output style. Applies only for -o
    #[arg(short, long, value_enum, default_value_t = StyleChoice::Nofunky)]
    pub style: StyleChoice,

    /// Label to add to the field attributes. Can be used multiple times
    #[arg(short = 'l', long = "label", value_enum)]
    pub labels: Vec<LabelChoice>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Supported diagram styles
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StyleChoice {
    /// Plain text, geometric box, plain lines
    Nofunky,
    /// Plain text, geometric box, shadowed lines
    Plain,
    /// Hand-written text, paper box, shadowed lines
    Scruffy,
}

impl From<StyleChoice> for Style {
    fn from(value: StyleChoice) -> Self {
        match value {
            StyleChoice::Nofunky => Style::Nofunky,
            StyleChoice::Plain => Style::Plain,
            StyleChoice::Scruffy => Style::Scruffy,
        }
    }
}

/// Supported chart directions
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum DirectionChoice {
    /// Left to right
    #[value(name = "LR")]
    LR,
    /// Right to left
    #[value(name = "RL")]
    RL,
    /// Top down
    #[value(name = "TB")]
    TB,
}

impl From<DirectionChoice> for Direction {
    fn from(value: DirectionChoice) -> Self {
        match value {
            DirectionChoice::LR => Direction::LeftRight,
            DirectionChoice::RL => Direction::RightLeft,
            DirectionChoice::TB => Direction::TopBottom,
        }
    }
}

/// Supported field annotation labels
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LabelChoice {
    /// Annotate indexed fields
    #[value(name = "db_index")]
    DbIndex,
    /// Annotate nullable fields
    #[value(name = "null")]
    Null,
    /// Annotate fields with a default value
    #[value(name = "default")]
    Default,
}

impl From<LabelChoice> for FieldLabel {
    fn from(value: LabelChoice) -> Self {
        match value {
            LabelChoice::DbIndex => FieldLabel::DbIndex,
            LabelChoice::Null => FieldLabel::Null,
            LabelChoice::Default => FieldLabel::Default,
        }
    }
}

/// Main CLI application
pub struct YumlApp {
    client: YumlClient,
}

impl YumlApp {
    /// Create a new application instance pointed at the public service
    pub fn new() -> Self {
        Self {
            client: YumlClient::new(),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Initialize logging with CLI flags (environment variables take precedence)
        let log_level_str = std::env::var("YUMLGEN_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("YUMLGEN_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        // Reinitialize logging with CLI/environment settings
        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Yumlgen v{}", env!("CARGO_PKG_VERSION"));
        }

        let provider = self.load_provider(&cli.schema)?;
        let applications = self.select_applications(&provider, &cli)?;

        if cli.verbose {
            eprintln!("Diagramming {} application(s)", applications.len());
        }

        let labels: Vec<FieldLabel> = cli.labels.iter().map(|&l| l.into()).collect();
        let statements = YumlFormatter::with_labels(labels).format(&applications);
        tracing::debug!(statement_count = statements.len(), "generated DSL");

        match &cli.output {
            Some(path) => {
                let options =
                    RenderOptions::new(cli.style.into(), cli.direction.into(), cli.scale);
                self.client.render(&statements, &options, path)?;
                if cli.verbose {
                    eprintln!("Saved diagram to {}", path.display());
                }
            }
            None => {
                for statement in &statements {
                    println!("{}", statement);
                }
            }
        }
        Ok(())
    }

    /// Load the schema document from a file or stdin
    fn load_provider(&self, schema: &Path) -> Result<SchemaProvider> {
        if schema.to_string_lossy() == "-" {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(SchemaProvider::from_json(&content)?)
        } else {
            let content = fs::read_to_string(schema).with_context(|| {
                format!("Failed to read schema file '{}'", schema.display())
            })?;
            Ok(SchemaProvider::from_json(&content)?)
        }
    }

    /// Resolve the applications to diagram from positional args or `-a`
    fn select_applications<'a>(
        &self,
        provider: &'a SchemaProvider,
        cli: &Cli,
    ) -> Result<Vec<&'a Application>> {
        let labels = if cli.apps.is_empty() {
            if cli.all_applications {
                provider.application_labels()
            } else {
                return Err(anyhow!("Need one or more arguments for appname."));
            }
        } else {
            cli.apps.clone()
        };

        let applications = labels
            .iter()
            .map(|label| provider.application(label))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(applications)
    }
}

impl Default for YumlApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    const SCHEMA: &str = r#"{
        "applications": [
            {"label": "blog", "models": [
                {"name": "Post", "fields": [
                    {"name": "id", "type": "AutoField", "primary_key": true}
                ]}
            ]}
        ]
    }"#;

    #[test]
    fn test_cli_parsing_positional_apps() {
        let cli = Cli::try_parse_from(["yumlgen", "blog", "auth"]).unwrap();
        assert_eq!(cli.apps, vec!["blog", "auth"]);
        assert!(!cli.all_applications);
        assert_eq!(cli.direction, DirectionChoice::TB);
        assert_eq!(cli.style, StyleChoice::Nofunky);
        assert_eq!(cli.scale, 100);
        assert!(cli.labels.is_empty());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_parsing_all_options() {
        let cli = Cli::try_parse_from([
            "yumlgen",
            "blog",
            "-o",
            "diagram.pdf",
            "-d",
            "LR",
            "-p",
            "80",
            "-s",
            "scruffy",
            "-l",
            "db_index",
            "-l",
            "null",
            "--schema",
            "models.json",
        ])
        .unwrap();

        assert_eq!(cli.output.unwrap().to_string_lossy(), "diagram.pdf");
        assert_eq!(cli.direction, DirectionChoice::LR);
        assert_eq!(cli.scale, 80);
        assert_eq!(cli.style, StyleChoice::Scruffy);
        assert_eq!(cli.labels, vec![LabelChoice::DbIndex, LabelChoice::Null]);
        assert_eq!(cli.schema.to_string_lossy(), "models.json");
    }

    #[test]
    fn test_cli_rejects_invalid_style() {
        let result = Cli::try_parse_from(["yumlgen", "blog", "-s", "fancy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_invalid_direction() {
        let result = Cli::try_parse_from(["yumlgen", "blog", "-d", "BT"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_invalid_label() {
        let result = Cli::try_parse_from(["yumlgen", "blog", "-l", "unique"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_all_applications_flag() {
        let cli = Cli::try_parse_from(["yumlgen", "-a", "--schema", "models.json"]).unwrap();
        assert!(cli.all_applications);
        assert!(cli.apps.is_empty());
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["yumlgen", "--verbose", "blog"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_choice_conversions() {
        assert_eq!(Style::from(StyleChoice::Plain), Style::Plain);
        assert_eq!(Direction::from(DirectionChoice::RL), Direction::RightLeft);
        assert_eq!(FieldLabel::from(LabelChoice::Default), FieldLabel::Default);
    }

    #[test]
    fn test_load_provider_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("models.json");
        fs::write(&path, SCHEMA).unwrap();

        let app = YumlApp::new();
        let provider = app.load_provider(&path).unwrap();
        assert_eq!(provider.application_labels(), vec!["blog"]);
    }

    #[test]
    fn test_load_provider_missing_file() {
        let app = YumlApp::new();
        let result = app.load_provider(Path::new("/nonexistent/models.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_select_applications_requires_labels() {
        let provider = SchemaProvider::from_json(SCHEMA).unwrap();
        let cli = Cli::try_parse_from(["yumlgen"]).unwrap();

        let app = YumlApp::new();
        let err = app.select_applications(&provider, &cli).unwrap_err();
        assert!(format!("{}", err).contains("one or more arguments"));
    }

    #[test]
    fn test_select_applications_all() {
        let provider = SchemaProvider::from_json(SCHEMA).unwrap();
        let cli = Cli::try_parse_from(["yumlgen", "-a"]).unwrap();

        let app = YumlApp::new();
        let applications = app.select_applications(&provider, &cli).unwrap();
        assert_eq!(applications.len(), 1);
        assert_eq!(applications[0].label, "blog");
    }

    #[test]
    fn test_select_applications_unknown_label() {
        let provider = SchemaProvider::from_json(SCHEMA).unwrap();
        let cli = Cli::try_parse_from(["yumlgen", "shop"]).unwrap();

        let app = YumlApp::new();
        let err = app.select_applications(&provider, &cli).unwrap_err();
        assert!(format!("{:#}", err).contains("shop"));
    }
}
