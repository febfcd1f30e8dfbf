//! The taxonomic tree: Taxon and its tree definition.

use crate::catalog::{FieldAlias, FieldDef, IndexDef, RelationshipDef, TableDef};

pub(super) fn taxon() -> TableDef {
    TableDef::new("Taxon", "taxon", 4, FieldDef::id("taxonId", "TaxonID"))
        .with_timestamps()
        .with_field(FieldDef::text("name", "Name", 256).required().with_index())
        .with_field(FieldDef::text("fullName", "FullName", 512).with_index())
        .with_field(FieldDef::text("commonName", "CommonName", 128).with_index())
        .with_field(FieldDef::text("author", "Author", 128))
        .with_field(FieldDef::text("source", "Source", 64))
        .with_field(FieldDef::integer("rankId", "RankID").required())
        .with_field(FieldDef::integer("nodeNumber", "NodeNumber").with_index())
        .with_field(FieldDef::integer("highestChildNodeNumber", "HighestChildNodeNumber"))
        .with_field(FieldDef::boolean("isAccepted", "IsAccepted").required())
        .with_field(FieldDef::boolean("isHybrid", "IsHybrid").required())
        .with_field(FieldDef::text("cultivarName", "CultivarName", 64))
        .with_field(FieldDef::text("citesStatus", "CitesStatus", 32))
        .with_field(FieldDef::text("esaStatus", "EsaStatus", 64))
        .with_field(FieldDef::text("guid", "GUID", 128).with_index())
        .with_field(FieldDef::blob("remarks", "Remarks"))
        .with_index(IndexDef::new("TaxonNameIDX", ["Name"]))
        .with_index(IndexDef::new("TaxonFullNameIDX", ["FullName"]))
        .with_index(IndexDef::new("TaxonCommonNameIDX", ["CommonName"]))
        .with_index(IndexDef::new("TaxonGuidIDX", ["GUID"]))
        .with_relationship(
            RelationshipDef::many_to_one("parent", "Taxon", "ParentID")
                .with_other_side("children"),
        )
        .with_relationship(
            RelationshipDef::one_to_many("children", "Taxon").with_other_side("parent"),
        )
        .with_relationship(
            RelationshipDef::many_to_one("acceptedTaxon", "Taxon", "AcceptedID")
                .with_other_side("acceptedChildren"),
        )
        .with_relationship(
            RelationshipDef::one_to_many("acceptedChildren", "Taxon")
                .with_other_side("acceptedTaxon"),
        )
        .with_relationship(
            RelationshipDef::many_to_one("definition", "TaxonTreeDef", "TaxonTreeDefID")
                .required()
                .with_other_side("treeEntries"),
        )
        .with_relationship(
            RelationshipDef::many_to_one(
                "definitionItem",
                "TaxonTreeDefItem",
                "TaxonTreeDefItemID",
            )
            .required()
            .with_other_side("treeEntries"),
        )
        .with_relationship(
            RelationshipDef::one_to_many("determinations", "Determination")
                .with_other_side("taxon"),
        )
        .with_alias(FieldAlias::new("acceptedParent", "acceptedTaxon"))
        .with_view("Taxon")
        .with_search_dialog("TaxonSearch")
}

pub(super) fn taxon_tree_def() -> TableDef {
    TableDef::new(
        "TaxonTreeDef",
        "taxontreedef",
        76,
        FieldDef::id("taxonTreeDefId", "TaxonTreeDefID"),
    )
    .with_timestamps()
    .with_field(FieldDef::text("name", "Name", 64).required())
    .with_field(FieldDef::integer("fullNameDirection", "FullNameDirection"))
    .with_field(FieldDef::blob("remarks", "Remarks"))
    .with_relationship(
        RelationshipDef::one_to_one("discipline", "Discipline", None)
            .with_other_side("taxonTreeDef"),
    )
    .with_relationship(
        RelationshipDef::one_to_many("treeDefItems", "TaxonTreeDefItem")
            .with_other_side("treeDef"),
    )
    .with_relationship(
        RelationshipDef::one_to_many("treeEntries", "Taxon").with_other_side("definition"),
    )
}

pub(super) fn taxon_tree_def_item() -> TableDef {
    TableDef::new(
        "TaxonTreeDefItem",
        "taxontreedefitem",
        77,
        FieldDef::id("taxonTreeDefItemId", "TaxonTreeDefItemID"),
    )
    .with_timestamps()
    .with_field(FieldDef::text("name", "Name", 64).required())
    .with_field(FieldDef::text("title", "Title", 64))
    .with_field(FieldDef::integer("rankId", "RankID").required())
    .with_field(FieldDef::boolean("isEnforced", "IsEnforced"))
    .with_field(FieldDef::boolean("isInFullName", "IsInFullName"))
    .with_field(FieldDef::text("fullNameSeparator", "FullNameSeparator", 32))
    .with_field(FieldDef::text("textBefore", "TextBefore", 64))
    .with_field(FieldDef::text("textAfter", "TextAfter", 64))
    .with_relationship(
        RelationshipDef::many_to_one("treeDef", "TaxonTreeDef", "TaxonTreeDefID")
            .required()
            .with_other_side("treeDefItems"),
    )
    .with_relationship(
        RelationshipDef::many_to_one("parent", "TaxonTreeDefItem", "ParentItemID")
            .with_other_side("children"),
    )
    .with_relationship(
        RelationshipDef::one_to_many("children", "TaxonTreeDefItem").with_other_side("parent"),
    )
    .with_relationship(
        RelationshipDef::one_to_many("treeEntries", "Taxon").with_other_side("definitionItem"),
    )
}
