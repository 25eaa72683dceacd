//! Hardcoded fallback catalog.
//!
//! Used when the packaged default catalog cannot be parsed. Mirrors the
//! packaged entry so the launcher always has something to offer.

use std::collections::BTreeMap;

use super::schema::{Catalog, LaunchStrategy, ModuleDescriptor};

/// Build the single-entry fallback catalog.
pub fn builtin_catalog() -> Catalog {
    let mut modules = BTreeMap::new();
    modules.insert(
        "Ageing Analysis".to_string(),
        ModuleDescriptor {
            url: "https://github.com/mateuszpolis/AgeingAnalysis.git".to_string(),
            branch: "main".to_string(),
            description: "Analyze and visualize ageing factors in the FIT detector.".to_string(),
            entry_point: "ageing_analysis.main".to_string(),
            version: "latest".to_string(),
            icon: "📊".to_string(),
            launch: LaunchStrategy::EntryModule,
        },
    );
    Catalog::from_modules(modules)
}
