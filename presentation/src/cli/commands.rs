//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use silfira_application::ListingParams;
use silfira_domain::{FilterCriteria, PropertyStatus};
use std::path::PathBuf;

/// Output format for listing results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable cards for the terminal
    Table,
    /// JSON output
    Json,
}

/// Market status filter value
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    ForSale,
    ForRent,
}

impl From<StatusArg> for PropertyStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::ForSale => PropertyStatus::ForSale,
            StatusArg::ForRent => PropertyStatus::ForRent,
        }
    }
}

/// CLI arguments for silfira
#[derive(Parser, Debug)]
#[command(name = "silfira")]
#[command(author, version, about = "Silfira Realtors - browse the property catalog")]
#[command(long_about = r#"
Silfira presents the property catalog and narrows it by free-text search,
category, status and price. Every filter flag is optional; omitting them all
shows the full catalog. Prices are quoted in whole rupees and range listings
(multi-unit developments) are filtered by the lower bound of their range.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./silfira.toml      Project-level config
3. ~/.config/silfira/config.toml   Global config

Example:
  silfira browse --search atmos
  silfira browse --type Apartment --max-price 9000000
  silfira featured --limit 3
  silfira show 2
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress decorative headers
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

/// Catalog views
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse the catalog with optional filters
    Browse {
        /// Free-text search against title and location (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Property category, e.g. "Apartment"
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<String>,

        /// Market status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        /// Lower price bound in rupees (inclusive)
        #[arg(long, value_name = "RUPEES")]
        min_price: Option<u64>,

        /// Upper price bound in rupees (inclusive)
        #[arg(long, value_name = "RUPEES")]
        max_price: Option<u64>,
    },

    /// Show the featured highlight set
    Featured {
        /// Maximum number of records to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one property in detail, with its agent
    Show {
        /// Property id
        id: String,
    },

    /// List the agent directory
    Agents,
}

impl Command {
    /// Build filter criteria for a browse, filling unset price bounds from
    /// the configured slider window.
    pub fn criteria(&self, params: &ListingParams) -> FilterCriteria {
        let Command::Browse {
            search,
            kind,
            status,
            min_price,
            max_price,
        } = self
        else {
            return FilterCriteria::default();
        };

        let (floor, ceiling) = params.full_window();
        let mut criteria = FilterCriteria::default()
            .with_price_bounds(min_price.unwrap_or(floor), max_price.unwrap_or(ceiling));
        if let Some(search) = search {
            criteria = criteria.with_search(search.clone());
        }
        if let Some(kind) = kind {
            criteria = criteria.with_kind(kind.clone());
        }
        if let Some(status) = status {
            criteria = criteria.with_status((*status).into());
        }
        criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silfira_domain::{KindFilter, StatusFilter};

    fn browse(
        search: Option<&str>,
        kind: Option<&str>,
        status: Option<StatusArg>,
        min_price: Option<u64>,
        max_price: Option<u64>,
    ) -> Command {
        Command::Browse {
            search: search.map(String::from),
            kind: kind.map(String::from),
            status,
            min_price,
            max_price,
        }
    }

    #[test]
    fn test_bare_browse_uses_slider_window() {
        let params = ListingParams::default();
        let criteria = browse(None, None, None, None, None).criteria(&params);

        assert!(criteria.search.is_empty());
        assert_eq!(criteria.kind, KindFilter::All);
        assert_eq!(criteria.status, StatusFilter::All);
        assert_eq!(criteria.price.min, 0);
        assert_eq!(criteria.price.max, 20_000_000);
    }

    #[test]
    fn test_flags_map_to_criteria() {
        let params = ListingParams::default();
        let criteria = browse(
            Some("atmos"),
            Some("Apartments"),
            Some(StatusArg::ForSale),
            Some(1_000_000),
            Some(15_000_000),
        )
        .criteria(&params);

        assert_eq!(criteria.search, "atmos");
        assert_eq!(criteria.kind, KindFilter::Only("Apartments".to_string()));
        assert_eq!(
            criteria.status,
            StatusFilter::Only(PropertyStatus::ForSale)
        );
        assert_eq!((criteria.price.min, criteria.price.max), (1_000_000, 15_000_000));
    }

    #[test]
    fn test_non_browse_commands_use_default_criteria() {
        let params = ListingParams::default();
        assert!(Command::Agents.criteria(&params).is_default());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "silfira", "browse", "--search", "atmos", "--max-price", "20000000",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Browse { .. }));

        let cli = Cli::try_parse_from(["silfira", "show", "2", "--output", "json"]).unwrap();
        assert!(matches!(cli.command, Command::Show { ref id } if id == "2"));
        assert!(matches!(cli.output, OutputFormat::Json));
    }

    #[test]
    fn test_status_arg_values() {
        let cli =
            Cli::try_parse_from(["silfira", "browse", "--status", "for-rent"]).unwrap();
        let Command::Browse { status, .. } = cli.command else {
            panic!("expected browse");
        };
        assert_eq!(
            PropertyStatus::from(status.unwrap()),
            PropertyStatus::ForRent
        );
    }
}
