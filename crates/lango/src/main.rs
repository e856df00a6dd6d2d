mod cli;
mod render;

use clap::Parser;
use eyre::{bail, WrapErr};

use lango_core::translations::BUNDLED_TRANSLATIONS;
use lango_core::{available_translations, LabelFormat, LabelStore, Locale};

fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let format = if args.language_only {
        LabelFormat::LanguageOnly
    } else {
        LabelFormat::WithCountry
    };

    // The shared catalog covers the default configuration; any override
    // builds a private store instead.
    let custom;
    let store: &LabelStore = if args.locales.is_empty() && format == LabelFormat::WithCountry {
        available_translations()
    } else {
        let ids: Vec<&str> = if args.locales.is_empty() {
            BUNDLED_TRANSLATIONS.to_vec()
        } else {
            args.locales.iter().map(String::as_str).collect()
        };
        custom = LabelStore::with_format(ids, format);
        &custom
    };

    tracing::debug!(entries = store.count(), "catalog ready");

    match args.command {
        cli::Command::List => render::print_catalog(store, args.json)?,
        cli::Command::Locale { id } => {
            let target = Locale::parse(&id)
                .wrap_err_with(|| format!("parse locale identifier `{id}`"))?;
            match store.find_locale(&target) {
                Some(row) => render::print_row(store, row, args.json)?,
                None => bail!("no catalog entry matches locale `{id}`"),
            }
        }
        cli::Command::Country { code } => match store.find_country_code(&code) {
            Some(row) => render::print_row(store, row, args.json)?,
            None => bail!("no catalog entry matches country code `{code}`"),
        },
        cli::Command::Show { row } => render::print_entry(store.entry_at(row), args.json)?,
    }

    Ok(())
}
