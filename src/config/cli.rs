use crate::config::toml_config::AppConfig;
use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "singleton-sort")]
#[command(about = "Track decklists and find the cards they share")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory holding the saved card lists
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Directory exported files are written to
    #[arg(long, global = true)]
    pub export_dir: Option<String>,

    /// Storage key (file name without extension) for the saved card lists
    #[arg(long, global = true)]
    pub key: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse a card list from FILE ("-" reads stdin) and append it
    Add {
        file: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Show every stored list with its index
    List,
    /// Print one list in `quantity name` form
    Show { index: usize },
    /// Remove a list; later lists move up one index
    Remove { index: usize },
    /// Give a list a new name
    Rename { index: usize, name: String },
    /// Flip a list's collapsed flag (display only)
    Toggle { index: usize },
    /// Remove every list
    Clear,
    /// Show the cards shared by two or more lists
    Common {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Write one list to a text file named after the list
    Export {
        index: usize,
        /// Output file (defaults to <export-dir>/<list name>.txt)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Write every list into a zip archive
    ExportAll {
        /// Output file (defaults to <export-dir>/card-lists.zip)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl CliConfig {
    /// Loads the TOML file (if any) and applies command line overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config.storage.data_dir = data_dir.clone();
        }
        if let Some(export_dir) = &self.export_dir {
            config.export.output_dir = export_dir.clone();
        }
        if let Some(key) = &self.key {
            config.storage.key = key.clone();
        }
        if self.log_json {
            config.logging.json = true;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = CliConfig::parse_from(["singleton-sort", "rename", "2", "Elf Ball"]);
        assert!(matches!(cli.command, Command::Rename { index: 2, ref name } if name == "Elf Ball"));

        let cli = CliConfig::parse_from(["singleton-sort", "common", "--format", "csv"]);
        assert!(matches!(cli.command, Command::Common { format: OutputFormat::Csv }));

        let cli = CliConfig::parse_from(["singleton-sort", "common"]);
        assert!(matches!(cli.command, Command::Common { format: OutputFormat::Text }));
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::parse_from([
            "singleton-sort",
            "list",
            "--data-dir",
            "/tmp/lists",
            "--key",
            "pod",
        ]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.storage.data_dir, "/tmp/lists");
        assert_eq!(config.storage.key, "pod");
        assert_eq!(config.export.output_dir, "./exports");
    }
}
