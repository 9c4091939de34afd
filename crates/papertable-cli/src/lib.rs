//! Shared CLI definitions for papertable.
//!
//! Used by the main application and by the build script (manpage) and
//! gen_docs binary (command-line-options markdown).

use clap::{CommandFactory, Parser, ValueEnum};

/// What the rendered output contains.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputMode {
    /// Standalone HTML page with minimal inline styling (preview)
    Page,
    /// Inner markup of the paper-table-container element only (embedding)
    Fragment,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Page => "page",
            OutputMode::Fragment => "fragment",
        }
    }
}

/// Command-line arguments for papertable
#[derive(Clone, Parser, Debug)]
#[command(
    name = "papertable",
    version,
    about = "Render the survey paper table to HTML",
    long_about = include_str!("../long_about.txt")
)]
pub struct Args {
    /// Path to the paper summary CSV (falls back to [data] csv in config.toml)
    #[arg(value_name = "CSV")]
    pub csv: Option<std::path::PathBuf>,

    /// Path to the legend/icon mapping JSON (falls back to [data] mappings in config.toml)
    #[arg(value_name = "MAPPINGS")]
    pub mappings: Option<std::path::PathBuf>,

    /// Apply an action before rendering; repeatable, applied in order.
    /// Syntax: NAME, NAME:COLUMN, or NAME:COLUMN=VALUE (e.g. toggle-sort:Year,
    /// "toggle-filter:Group=Deep", show-filter:Group, filter-search:Group=de)
    #[arg(long = "action", value_name = "SPEC")]
    pub actions: Vec<String>,

    /// Write the rendered HTML to this file instead of stdout
    #[arg(long = "out", short = 'o', value_name = "PATH")]
    pub out: Option<std::path::PathBuf>,

    /// Render a standalone page or just the container fragment
    #[arg(long = "mode", value_enum, default_value = "page")]
    pub mode: OutputMode,

    /// Enable debug logging (same as PAPERTABLE_LOG=debug)
    #[arg(long = "debug", action)]
    pub debug: bool,

    /// Generate default configuration file at ~/.config/papertable/config.toml
    #[arg(long = "generate-config", action)]
    pub generate_config: bool,

    /// Force overwrite existing config file when using --generate-config
    #[arg(long = "force", requires = "generate_config", action)]
    pub force: bool,
}

fn escape_table_cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\n', '\r'], " ")
}

fn value_placeholder(arg: &clap::Arg) -> String {
    arg.get_value_names()
        .map(|names| {
            names
                .iter()
                .map(|n: &clap::builder::Str| format!("<{}>", n.as_ref() as &str))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

/// Render the command-line options as a markdown table (used by gen_docs).
pub fn render_options_markdown() -> String {
    let mut cmd = Args::command();
    cmd.build();

    let mut out = String::from("# Command Line Options\n\n");

    out.push_str("## Usage\n\n```\n");
    let usage = cmd.render_usage();
    out.push_str(&usage.to_string());
    out.push_str("\n```\n\n");

    out.push_str("## Options\n\n");
    out.push_str("| Option | Description |\n");
    out.push_str("|--------|-------------|\n");

    for arg in cmd.get_arguments() {
        let id = arg.get_id().as_ref().to_string();
        if id == "help" || id == "version" {
            continue;
        }

        let option_str = if arg.is_positional() {
            let placeholder = value_placeholder(arg);
            if arg.is_required_set() {
                placeholder
            } else {
                format!("[{placeholder}]")
            }
        } else {
            let mut parts = Vec::new();
            if let Some(s) = arg.get_short() {
                parts.push(format!("-{s}"));
            }
            if let Some(l) = arg.get_long() {
                parts.push(format!("--{l}"));
            }
            let op = parts.join(", ");
            let placeholder = if arg.get_action().takes_values() {
                value_placeholder(arg)
            } else {
                String::new()
            };
            if placeholder.is_empty() {
                op
            } else {
                format!("{op} {placeholder}")
            }
        };

        let help = arg
            .get_help()
            .map(|h| escape_table_cell(&h.to_string()))
            .unwrap_or_else(|| "-".to_string());

        out.push_str(&format!("| `{option_str}` | {help} |\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_as_str() {
        assert_eq!(OutputMode::Page.as_str(), "page");
        assert_eq!(OutputMode::Fragment.as_str(), "fragment");
    }

    #[test]
    fn test_args_parse_minimal() {
        let args = Args::parse_from(["papertable", "papers.csv", "mappings.json"]);
        assert_eq!(args.csv.as_deref().unwrap().to_str(), Some("papers.csv"));
        assert_eq!(
            args.mappings.as_deref().unwrap().to_str(),
            Some("mappings.json")
        );
        assert!(args.actions.is_empty());
        assert_eq!(args.mode, OutputMode::Page);
        assert!(!args.debug);
    }

    #[test]
    fn test_args_parse_actions_in_order() {
        let args = Args::parse_from([
            "papertable",
            "p.csv",
            "m.json",
            "--action",
            "toggle-sort:Year",
            "--action",
            "toggle-filter:Group=Deep",
            "--mode",
            "fragment",
        ]);
        assert_eq!(
            args.actions,
            vec!["toggle-sort:Year", "toggle-filter:Group=Deep"]
        );
        assert_eq!(args.mode, OutputMode::Fragment);
    }

    #[test]
    fn test_args_generate_config_needs_no_paths() {
        let args = Args::parse_from(["papertable", "--generate-config"]);
        assert!(args.generate_config);
        assert!(args.csv.is_none());
    }

    #[test]
    fn test_args_paths_optional_on_command_line() {
        // Input paths may come from the config file instead, so a bare
        // invocation must parse; resolution happens later.
        let args = Args::parse_from(["papertable"]);
        assert!(args.csv.is_none());
        assert!(args.mappings.is_none());
    }

    #[test]
    fn test_render_options_markdown() {
        let md = render_options_markdown();
        assert!(md.contains("# Command Line Options"));
        assert!(md.contains("--action"));
        assert!(md.contains("--mode"));
        assert!(md.contains("--generate-config"));
        assert!(!md.contains("| `--help` |"));
    }
}
