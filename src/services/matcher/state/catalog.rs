use crate::services::matcher::core::name_parser::{parse_year, NameParser};
use crate::services::matcher::models::types::{CatalogRecord, NameRecord, RecordField};

/// A catalog record with its name records parsed once up front.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub record: CatalogRecord,
    /// Parsed from the canonical table/file name.
    pub table: NameRecord,
    /// Parsed from the description.
    pub description: NameRecord,
    /// Lowercased raw name, for second-chance containment checks.
    pub(crate) name_lower: String,
    /// Lowercased raw description, for second-chance containment checks.
    pub(crate) description_lower: String,
    /// Canonical name length in characters (ranking tie-break).
    pub(crate) name_len: usize,
    pub is_original: bool,
}

impl CatalogEntry {
    pub fn new(record: CatalogRecord, parser: &NameParser) -> Self {
        let table = with_record_details(parser.parse_name(&record.name), &record, parser);
        let description =
            with_record_details(parser.parse_name(&record.description), &record, parser);
        let is_original = table.is_original
            || description.is_original
            || parser
                .originals()
                .is_original(None, record.manufacturer.as_deref());

        Self {
            name_lower: record.name.to_lowercase(),
            description_lower: record.description.to_lowercase(),
            name_len: record.name.chars().count(),
            table,
            description,
            is_original,
            record,
        }
    }

    pub fn name_record(&self, field: RecordField) -> &NameRecord {
        match field {
            RecordField::Table => &self.table,
            RecordField::Description => &self.description,
        }
    }

    /// Lowercased raw name or description contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        !needle.is_empty()
            && (self.name_lower.contains(needle) || self.description_lower.contains(needle))
    }
}

/// Fill manufacturer and year from the record's own columns when the
/// parsed name carries none.
fn with_record_details(
    mut parsed: NameRecord,
    record: &CatalogRecord,
    parser: &NameParser,
) -> NameRecord {
    if parsed.manufacturer.is_none() {
        if let Some(manufacturer) = record.manufacturer.as_deref() {
            let normalizer = parser.normalizer();
            parsed.manufacturer = non_blank(normalizer.normalize(manufacturer, false));
            parsed.manufacturer_no_whitespace =
                non_blank(normalizer.normalize(manufacturer, true));
        }
    }
    if parsed.year.is_none() {
        parsed.year = record.year.as_deref().and_then(parse_year);
    }
    parsed
}

fn non_blank(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}

/// The set of candidates a source name is matched against.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Parse every record once.
    pub fn new(records: Vec<CatalogRecord>, parser: &NameParser) -> Self {
        let entries: Vec<CatalogEntry> = records
            .into_iter()
            .map(|record| CatalogEntry::new(record, parser))
            .collect();
        log::debug!("Catalog built with {} entries", entries.len());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, entry_id: usize) -> Option<&CatalogEntry> {
        self.entries.get(entry_id)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
