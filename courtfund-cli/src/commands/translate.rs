use courtfund_core::i18n::DEFAULT_LANGUAGE;
use courtfund_core::{Catalog, Result};

pub fn handle_translate(language: &str, key: &str, catalog: &Catalog) -> Result<()> {
    if !catalog.has_language(language) {
        tracing::debug!(
            "unknown language '{language}', falling back to '{DEFAULT_LANGUAGE}' \
             (available: {})",
            catalog.languages().join(", ")
        );
    }

    println!("{}", catalog.lookup(language, key));
    Ok(())
}
