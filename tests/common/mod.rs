use std::sync::Once;

use pinmatch::{Catalog, CatalogRecord, NameMatcher};

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn table(name: &str, manufacturer: &str, year: &str) -> CatalogRecord {
    CatalogRecord {
        name: format!("{name} ({manufacturer} {year})"),
        description: format!("{name} ({manufacturer} {year})"),
        manufacturer: Some(manufacturer.to_string()),
        year: Some(year.to_string()),
    }
}

/// Small table database shared by the integration suites.
pub fn fixture_catalog(matcher: &NameMatcher) -> Catalog {
    init_test_logger();
    matcher.build_catalog(vec![
        // 0
        table("Medieval Madness", "Williams", "1997"),
        // 1
        table("Attack from Mars", "Bally", "1995"),
        // 2
        table("Twilight Zone", "Bally", "1993"),
        // 3
        table("Cactus Canyon", "Bally", "1998"),
        // 4
        table("Cactus Canyon Continued", "Bally", "1998"),
        // 5: homebrew
        table("Jurassic Fun", "Original", "2021"),
        // 6
        table("The Addams Family", "Bally", "1992"),
    ])
}
