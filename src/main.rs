//! Distro Icons CLI - inspect the frozen icon catalog

mod commands;

use clap::{Parser, Subcommand};
use distro_icons::config::{self, IconsConfig};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "distro-icons")]
#[command(version)]
#[command(about = "Frozen catalog of operating-system icon descriptors")]
#[command(long_about = r#"
Distro Icons exposes the ordered icon list used by icon pickers:
  • List every icon with its index, title and path
  • Look up an icon by index, title or slug
  • Validate the catalog invariants
  • Serve the metadata as read-only JSON

Example usage:
  distro-icons list
  distro-icons get 7
  distro-icons --json find opensuse
  distro-icons serve --port 8080
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit machine-readable JSON instead of human output
    #[arg(long, global = true)]
    json: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every icon in display order
    List,

    /// Show the icon at an index
    Get {
        /// Catalog index (0-based)
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Find an icon by title (case-insensitive) or slug
    Find {
        /// Title or slug, e.g. "Pop!_OS" or "pop-os"
        query: String,
    },

    /// Print the number of icons
    Count,

    /// Check the catalog invariants
    Validate,

    /// Serve the catalog as JSON over HTTP
    Serve {
        /// Port to listen on (defaults to the config value, then 8080)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn is_human(self) -> bool {
        self == OutputMode::Human
    }
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::List => "list",
            Commands::Get { .. } => "get",
            Commands::Find { .. } => "find",
            Commands::Count => "count",
            Commands::Validate => "validate",
            Commands::Serve { .. } => "serve",
            Commands::Init { .. } => "init",
            Commands::Version => "version",
        }
    }
}

fn success_envelope(command: &str, data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "ok": true,
        "command": command,
        "data": data,
    })
}

fn error_envelope(command: &str, err: &anyhow::Error) -> serde_json::Value {
    serde_json::json!({
        "ok": false,
        "command": command,
        "error": format!("{:#}", err),
    })
}

pub fn emit_success(
    output_mode: OutputMode,
    command: &str,
    data: serde_json::Value,
) -> anyhow::Result<()> {
    if output_mode == OutputMode::Json {
        println!("{}", serde_json::to_string(&success_envelope(command, data))?);
    }
    Ok(())
}

fn emit_error(output_mode: OutputMode, command: &str, err: &anyhow::Error) {
    match output_mode {
        OutputMode::Human => distro_icons::ui::error(&format!("{:#}", err)),
        OutputMode::Json => println!("{}", error_envelope(command, err)),
    }
}

fn run(cli: Cli, output_mode: OutputMode) -> anyhow::Result<()> {
    let config_path = cli.config.unwrap_or_else(config::default_config_path);
    // Only commands that read settings parse the file, so `init --force` can replace a broken one
    let load = || -> anyhow::Result<IconsConfig> {
        Ok(config::load_config(Some(&config_path))?.unwrap_or_default())
    };

    match cli.command {
        Commands::List => commands::run_list(output_mode, &load()?),
        Commands::Get { index } => commands::run_get(output_mode, &load()?, index),
        Commands::Find { query } => commands::run_find(output_mode, &load()?, &query),
        Commands::Count => commands::run_count(output_mode),
        Commands::Validate => commands::run_validate(output_mode),
        Commands::Serve { port } => commands::run_serve(output_mode, &load()?, port),
        Commands::Init { force } => commands::run_init(output_mode, &config_path, force),
        Commands::Version => commands::run_version(output_mode),
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output_mode = if cli.json { OutputMode::Json } else { OutputMode::Human };
    let command = cli.command.name();

    if let Err(err) = run(cli, output_mode) {
        tracing::debug!("{} failed: {:?}", command, err);
        emit_error(output_mode, command, &err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_accepts_negative_index() {
        let cli = Cli::try_parse_from(["distro-icons", "get", "-1"]).unwrap();
        match cli.command {
            Commands::Get { index } => assert_eq!(index, -1),
            _ => panic!("expected get"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["distro-icons", "count", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.command.name(), "count");
    }

    #[test]
    fn test_serve_port() {
        let cli = Cli::try_parse_from(["distro-icons", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Commands::Serve { port } => assert_eq!(port, Some(9000)),
            _ => panic!("expected serve"),
        }
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("distro-icons").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_envelopes() {
        let ok = success_envelope("count", serde_json::json!({ "count": 10 }));
        assert_eq!(
            ok,
            serde_json::json!({ "ok": true, "command": "count", "data": { "count": 10 } })
        );

        let err = anyhow::Error::from(distro_icons::Error::NotFound { index: -1, count: 10 });
        let body = error_envelope("get", &err);
        assert_eq!(body["ok"], false);
        assert_eq!(body["command"], "get");
        assert!(body["error"].as_str().unwrap().contains("index -1"));
    }

    #[test]
    fn test_get_negative_index_fails_with_not_found() {
        let err = run(parse(&["get", "-1"]), OutputMode::Json).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<distro_icons::Error>(),
            Some(distro_icons::Error::NotFound { index: -1, count: 10 })
        ));
    }

    #[test]
    fn test_malformed_config_only_breaks_commands_that_read_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("distro-icons.toml");
        std::fs::write(&path, "port = \"x\"\n").unwrap();
        let path_arg = path.to_str().unwrap();

        assert!(run(parse(&["--config", path_arg, "list"]), OutputMode::Json).is_err());
        assert!(run(parse(&["--config", path_arg, "version"]), OutputMode::Json).is_ok());
        assert!(run(parse(&["--config", path_arg, "count"]), OutputMode::Json).is_ok());
        assert!(run(parse(&["--config", path_arg, "validate"]), OutputMode::Json).is_ok());

        run(parse(&["--config", path_arg, "init", "--force"]), OutputMode::Json).unwrap();
        let rewritten = config::load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(rewritten.port_or_default(), config::DEFAULT_PORT);
        assert!(run(parse(&["--config", path_arg, "list"]), OutputMode::Json).is_ok());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
