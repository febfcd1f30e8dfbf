//! The literal table catalog, grouped by subject area.

mod admin;
mod agents;
mod collections;
mod fieldwork;
mod taxonomy;

use crate::catalog::SchemaBundle;

/// Assemble the base bundle, before enrichment.
pub(super) fn base_bundle() -> SchemaBundle {
    SchemaBundle::new(0)
        // Specimen records
        .with_table(collections::collection_object())
        .with_table(collections::determination())
        .with_table(collections::preparation())
        .with_table(collections::prep_type())
        // Field collecting
        .with_table(fieldwork::collecting_event())
        .with_table(fieldwork::locality())
        .with_table(fieldwork::geography())
        .with_table(fieldwork::geography_tree_def())
        .with_table(fieldwork::geography_tree_def_item())
        // Taxonomy
        .with_table(taxonomy::taxon())
        .with_table(taxonomy::taxon_tree_def())
        .with_table(taxonomy::taxon_tree_def_item())
        // People
        .with_table(agents::agent())
        .with_table(agents::address())
        .with_table(agents::collector())
        .with_table(agents::accession_agent())
        // Institutional scaffolding
        .with_table(admin::accession())
        .with_table(admin::division())
        .with_table(admin::discipline())
        .with_table(admin::collection())
        .with_table(admin::app_user())
}
