//! Tab-separated vocabulary files.
//!
//! German files carry `english`, `german`, `plural`; Lithuanian files carry
//! `number`, `lithuanian`, `type`, `english`, `examples`. The first line is a
//! header. Rows that do not fit the columns are skipped with a warning.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::drill_engine::{
    error::Result,
    grading::extract_noun,
    models::{Variant, VocabItem, WordSet},
};

#[derive(Debug, Deserialize)]
struct GermanRow {
    english: String,
    german: String,
    #[serde(default)]
    plural: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LithuanianRow {
    #[serde(default)]
    number: Option<u32>,
    lithuanian: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    english: String,
    #[serde(default)]
    examples: Option<String>,
}

impl From<GermanRow> for VocabItem {
    fn from(row: GermanRow) -> Self {
        VocabItem {
            front: extract_noun(&row.german),
            back: row.german,
            gloss: Some(row.english),
            // "-" marks nouns without a plural.
            example: row.plural.filter(|p| !p.is_empty() && p != "-"),
            kind: None,
            audio_id: None,
        }
    }
}

impl From<LithuanianRow> for VocabItem {
    fn from(row: LithuanianRow) -> Self {
        VocabItem {
            front: row.lithuanian,
            back: row.english,
            gloss: None,
            example: row.examples.filter(|e| !e.is_empty()),
            kind: row.kind.filter(|k| !k.is_empty()),
            audio_id: row.number,
        }
    }
}

/// Result of parsing one file: the items plus how many rows were dropped.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub items: Vec<VocabItem>,
    pub skipped: usize,
}

/// Parse TSV text from any reader.
pub fn parse_tsv<R: Read>(reader: R, variant: Variant) -> Result<LoadReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .trim(csv::Trim::All)
        .quoting(false)
        .from_reader(reader);

    // Surface header problems as errors rather than skipping every row.
    rdr.headers()?;

    let report = match variant {
        Variant::German => collect_rows::<GermanRow, _>(&mut rdr),
        Variant::Lithuanian => collect_rows::<LithuanianRow, _>(&mut rdr),
    };
    Ok(report)
}

fn collect_rows<T, R>(rdr: &mut csv::Reader<R>) -> LoadReport
where
    T: for<'de> Deserialize<'de> + Into<VocabItem>,
    R: Read,
{
    let mut items = Vec::new();
    let mut skipped = 0;
    for (line, result) in rdr.deserialize::<T>().enumerate() {
        match result {
            Ok(row) => items.push(row.into()),
            Err(e) => {
                // +2: one for the header, one for 1-based line numbers.
                warn!(line = line + 2, error = %e, "skipping malformed row");
                skipped += 1;
            }
        }
    }
    LoadReport { items, skipped }
}

/// Parse TSV held in a string.
pub fn parse_tsv_str(text: &str, variant: Variant) -> Result<LoadReport> {
    parse_tsv(text.as_bytes(), variant)
}

/// Load one file as a named word set.
pub fn load_word_set(name: &str, path: impl AsRef<Path>, variant: Variant) -> Result<WordSet> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let report = parse_tsv(file, variant)?;
    info!(
        set = name,
        path = %path.display(),
        items = report.items.len(),
        skipped = report.skipped,
        "loaded word set"
    );
    Ok(WordSet::new(name, variant, report.items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GERMAN: &str = "english\tgerman\tplural\n\
        Time\tDie Zeit\tDie Zeiten\n\
        People\tDie Leute\t-\n\
        Man\tDer Mann\tDie Männer\n";

    const LITHUANIAN: &str = "number\tlithuanian\ttype\tenglish\texamples\n\
        1\tlabas\tinterjection\thello\tLabas rytas!\n\
        2\tačiū\tinterjection\tthank you\t\n";

    #[test]
    fn parses_german_rows() {
        let report = parse_tsv_str(GERMAN, Variant::German).unwrap();
        assert_eq!(report.skipped, 0);
        assert_eq!(report.items.len(), 3);

        let time = &report.items[0];
        assert_eq!(time.front, "Zeit");
        assert_eq!(time.back, "Die Zeit");
        assert_eq!(time.gloss.as_deref(), Some("Time"));
        assert_eq!(time.example.as_deref(), Some("Die Zeiten"));

        assert_eq!(report.items[1].example, None, "'-' plural is treated as absent");
    }

    #[test]
    fn parses_lithuanian_rows() {
        let report = parse_tsv_str(LITHUANIAN, Variant::Lithuanian).unwrap();
        assert_eq!(report.items.len(), 2);
        let hello = &report.items[0];
        assert_eq!(hello.front, "labas");
        assert_eq!(hello.back, "hello");
        assert_eq!(hello.audio_id, Some(1));
        assert_eq!(hello.kind.as_deref(), Some("interjection"));
        assert_eq!(hello.example.as_deref(), Some("Labas rytas!"));
        assert_eq!(report.items[1].example, None);
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let text = "number\tlithuanian\ttype\tenglish\texamples\n\
            x\tlabas\tinterjection\thello\t\n\
            3\tsveiki\tinterjection\thi\t\n\
            4\n";
        let report = parse_tsv_str(text, Variant::Lithuanian).unwrap();
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].front, "sveiki");
        assert_eq!(report.skipped, 2);
    }

    #[test]
    fn empty_input_gives_empty_set() {
        let report = parse_tsv_str("", Variant::German).unwrap();
        assert!(report.items.is_empty());
    }

    #[test]
    fn loads_word_set_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GERMAN.as_bytes()).unwrap();
        let set = load_word_set("initial", file.path(), Variant::German).unwrap();
        assert_eq!(set.name, "initial");
        assert_eq!(set.variant, Variant::German);
        assert_eq!(set.items.len(), 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_word_set("x", "/definitely/not/here.tsv", Variant::German).unwrap_err();
        assert!(matches!(err, crate::drill_engine::error::DrillError::Io(_)));
    }
}
