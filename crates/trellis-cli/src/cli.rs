use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trellis", author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging filter (e.g. "debug", "trellis_textstore=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Config file to use instead of ~/.trellis/config.toml
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Snapshot file to use instead of the configured one
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Text node operations
    Node {
        #[command(subcommand)]
        command: NodeCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum NodeCommands {
    /// Create an empty node
    Create {
        /// Node id (random when omitted)
        #[arg(long)]
        id: Option<String>,
    },
    /// List node ids
    List,
    /// Print all properties of a node as JSON
    Show {
        /// Node id
        id: String,
    },
    /// Print one property
    Get {
        /// Node id
        id: String,
        /// Property key
        key: String,
        /// Printed when the key is absent
        #[arg(long)]
        default: Option<String>,
    },
    /// Set one property; a blank value removes the key
    Set {
        /// Node id
        id: String,
        /// Property key
        key: String,
        /// New value
        value: String,
    },
    /// Remove one property
    Unset {
        /// Node id
        id: String,
        /// Property key
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_get_with_default() {
        let cli = Cli::parse_from([
            "trellis", "--store", "s.json", "node", "get", "page1", "title", "--default", "x",
        ]);
        assert_eq!(cli.store, Some(PathBuf::from("s.json")));
        match cli.command {
            Commands::Node {
                command: NodeCommands::Get { id, key, default },
            } => {
                assert_eq!(id, "page1");
                assert_eq!(key, "title");
                assert_eq!(default.as_deref(), Some("x"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
