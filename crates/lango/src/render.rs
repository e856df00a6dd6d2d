//! Text and JSON rendering for catalog entries.

use serde::Serialize;

use lango_core::{Label, LabelStore};

#[derive(Serialize)]
struct RowView<'a> {
    row: usize,
    entry: &'a Label,
}

pub fn print_catalog(store: &LabelStore, json: bool) -> eyre::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(store.entries())?);
    } else {
        print!("{}", render_catalog_text(store));
    }
    Ok(())
}

pub fn print_row(store: &LabelStore, row: usize, json: bool) -> eyre::Result<()> {
    let entry = store
        .get(row)
        .expect("search results are always in range");
    if json {
        println!("{}", serde_json::to_string_pretty(&RowView { row, entry })?);
    } else {
        println!("{}", row_line(row, entry));
    }
    Ok(())
}

/// Used by `show`, where the entry may be the out-of-range fallback and
/// thus carries no row of its own.
pub fn print_entry(entry: &Label, json: bool) -> eyre::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entry)?);
    } else {
        println!("{}  {}  ({})", entry.id(), entry.label(), entry.english_label());
    }
    Ok(())
}

fn render_catalog_text(store: &LabelStore) -> String {
    store
        .entries()
        .iter()
        .enumerate()
        .map(|(row, entry)| format!("{}\n", row_line(row, entry)))
        .collect()
}

fn row_line(row: usize, entry: &Label) -> String {
    format!(
        "{row:>3}  {:<12} {:<32} {}",
        entry.id(),
        entry.label(),
        entry.english_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lango_core::LabelFormat;

    #[test]
    fn row_line_carries_id_and_both_labels() {
        let entry = Label::new("fr_FR", LabelFormat::WithCountry);
        let line = row_line(4, &entry);
        assert!(line.starts_with("  4  fr_FR"));
        assert!(line.contains("Français (France)"));
        assert!(line.ends_with("French (France)"));
    }

    #[test]
    fn catalog_text_has_one_line_per_entry() {
        let store = LabelStore::new(["en_US", "de_DE"]);
        let text = render_catalog_text(&store);
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().next().expect("first line").contains("en_US"));
    }

    #[test]
    fn row_view_serializes_row_and_entry() {
        let store = LabelStore::new(["en_US"]);
        let view = RowView {
            row: 0,
            entry: store.get(0).expect("row 0 exists"),
        };
        let json = serde_json::to_value(&view).expect("view should serialize");
        assert_eq!(json["row"], 0);
        assert_eq!(json["entry"]["id"], "en_US");
    }
}
