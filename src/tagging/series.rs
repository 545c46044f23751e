//! Series disambiguation.
//!
//! A known franchise name directly followed by a subtitle word has no
//! colon separator yet; inserting one lets the structuring stage turn
//! the franchise and its subtitle into separate tags.

use regex::Regex;

use super::rules::compile_pattern;

/// Ordered table of franchise names with their separator probes.
#[derive(Debug)]
pub struct SeriesTable {
    entries: Vec<SeriesEntry>,
}

#[derive(Debug)]
struct SeriesEntry {
    name: String,
    /// Matches `<name><whitespace><non-colon>`: the name is followed by a
    /// subtitle word and no separator exists yet.
    probe: Regex,
}

impl SeriesTable {
    /// Build a table from franchise names, preserving their order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .map(Into::into)
            .filter_map(|name| {
                let pattern = format!(r"{}\s[^:]", regex::escape(&name));
                compile_pattern(&pattern).map(|probe| SeriesEntry { name, probe })
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `: ` after each franchise name missing its separator. One
    /// pass over the table, one replacement round per name.
    pub fn insert_separators(&self, title: &str) -> String {
        let mut out = title.to_string();
        for entry in &self.entries {
            if entry.probe.is_match(&out) {
                out = out.replace(&entry.name, &format!("{}: ", entry.name));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(names: &[&str]) -> SeriesTable {
        SeriesTable::new(names.iter().copied())
    }

    #[test]
    fn test_separator_inserted_before_subtitle() {
        let table = table(&["Pandemic"]);
        assert_eq!(table.insert_separators("Pandemic Legacy"), "Pandemic:  Legacy");
    }

    #[test]
    fn test_existing_colon_blocks_insertion() {
        let table = table(&["Pandemic"]);
        assert_eq!(table.insert_separators("Pandemic: Legacy"), "Pandemic: Legacy");
    }

    #[test]
    fn test_name_at_end_is_untouched() {
        let table = table(&["Carcassonne"]);
        assert_eq!(table.insert_separators("Carcassonne"), "Carcassonne");
        assert_eq!(table.insert_separators("Carcassonne "), "Carcassonne ");
    }

    #[test]
    fn test_names_with_regex_metacharacters() {
        let table = table(&["7 Wonders", "T.I.M.E.", "Dungeons & Dragons"]);
        assert_eq!(table.insert_separators("7 Wonders Duel"), "7 Wonders:  Duel");
        assert_eq!(
            table.insert_separators("Dungeons & Dragons Waterdeep"),
            "Dungeons & Dragons:  Waterdeep"
        );
        // The dots are literal: "TIME Stories" is a different title.
        assert_eq!(table.insert_separators("TIME Stories"), "TIME Stories");
    }

    #[test]
    fn test_single_pass_no_duplicate_insertion() {
        let table = table(&["Star Wars", "Star Wars: Destiny"]);
        assert_eq!(
            table.insert_separators("Star Wars Destiny"),
            "Star Wars:  Destiny"
        );
    }

    #[test]
    fn test_longest_first_ordering_is_caller_controlled() {
        let table = table(&["Advanced Dungeons & Dragons", "Dungeons & Dragons"]);
        assert_eq!(
            table.insert_separators("Advanced Dungeons & Dragons Handbook"),
            "Advanced Dungeons & Dragons:  Handbook"
        );
    }
}
