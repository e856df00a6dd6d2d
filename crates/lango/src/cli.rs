use clap::{Parser, Subcommand};

/// Lango — locale label catalog for installer frontends.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Locale identifiers to build the catalog from, overriding the
    /// bundled translation list.
    #[arg(long, value_delimiter = ',', env = "LANGO_LOCALES")]
    pub locales: Vec<String>,

    /// Compose display names without the country suffix.
    #[arg(long)]
    pub language_only: bool,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every catalog entry.
    List,
    /// Find the row matching a locale identifier.
    Locale {
        /// Locale identifier, e.g. `fr_FR`.
        id: String,
    },
    /// Find the best row for a 2-letter country code.
    Country {
        /// ISO 3166-1 alpha-2 code, e.g. `GB`.
        code: String,
    },
    /// Print the entry at a row. Out-of-range rows resolve to the default
    /// entry rather than failing.
    Show {
        /// Row index; negative values demonstrate the fallback policy.
        #[arg(allow_hyphen_values = true)]
        row: isize,
    },
}
