use std::sync::Once;

use crate::services::matcher::{Catalog, CatalogRecord, NameMatcher};

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Catalog whose description equals the name for every entry.
pub fn catalog_of(matcher: &NameMatcher, names: &[&str]) -> Catalog {
    init_test_logger();
    let records = names
        .iter()
        .map(|name| CatalogRecord::new(*name, *name))
        .collect();
    matcher.build_catalog(records)
}
