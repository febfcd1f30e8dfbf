//! Specimen records: CollectionObject, Determination, Preparation,
//! PrepType.

use crate::catalog::{FieldAlias, FieldDef, IndexDef, RelationshipDef, TableDef};

pub(super) fn collection_object() -> TableDef {
    TableDef::new(
        "CollectionObject",
        "collectionobject",
        1,
        FieldDef::id("collectionObjectId", "CollectionObjectID"),
    )
    .with_timestamps()
    .with_field(FieldDef::text("catalogNumber", "CatalogNumber", 32).with_index())
    .with_field(FieldDef::text("altCatalogNumber", "AltCatalogNumber", 64))
    .with_field(FieldDef::text("fieldNumber", "FieldNumber", 50).with_index())
    .with_field(FieldDef::date("catalogedDate", "CatalogedDate").with_index())
    .with_field(FieldDef::text("catalogedDateVerbatim", "CatalogedDateVerbatim", 50))
    .with_field(FieldDef::integer("countAmt", "CountAmt"))
    .with_field(FieldDef::text("availability", "Availability", 32))
    .with_field(FieldDef::text("restrictions", "Restrictions", 32))
    .with_field(FieldDef::text("notifications", "Notifications", 32))
    .with_field(FieldDef::text("modifier", "Modifier", 50))
    .with_field(FieldDef::text("name", "Name", 64))
    .with_field(FieldDef::text("projectNumber", "ProjectNumber", 64))
    .with_field(FieldDef::text("description", "Description", 255))
    .with_field(FieldDef::text("guid", "GUID", 128).with_index())
    .with_field(FieldDef::blob("remarks", "Remarks"))
    .with_index(IndexDef::new("CatalogNumberIDX", ["CatalogNumber"]))
    .with_index(IndexDef::new("FieldNumberIDX", ["FieldNumber"]))
    .with_index(IndexDef::new("CatalogedDateIDX", ["CatalogedDate"]))
    .with_index(IndexDef::new("ColObjGuidIDX", ["GUID"]))
    .with_relationship(
        RelationshipDef::many_to_one("collection", "Collection", "CollectionID")
            .required()
            .with_other_side("collectionObjects"),
    )
    .with_relationship(
        RelationshipDef::many_to_one("accession", "Accession", "AccessionID")
            .with_other_side("collectionObjects"),
    )
    .with_relationship(
        RelationshipDef::many_to_one("collectingEvent", "CollectingEvent", "CollectingEventID")
            .with_other_side("collectionObjects"),
    )
    .with_relationship(RelationshipDef::many_to_one("cataloger", "Agent", "CatalogerID"))
    .with_relationship(
        RelationshipDef::one_to_many("determinations", "Determination")
            .with_other_side("collectionObject"),
    )
    .with_relationship(
        RelationshipDef::one_to_many("preparations", "Preparation")
            .with_other_side("collectionObject"),
    )
    .with_alias(FieldAlias::new("catalogNbr", "catalogNumber"))
    .with_view("CollectionObject")
    .with_search_dialog("CollectionObjectSearch")
}

pub(super) fn determination() -> TableDef {
    TableDef::new(
        "Determination",
        "determination",
        9,
        FieldDef::id("determinationId", "DeterminationID"),
    )
    .with_timestamps()
    .with_field(FieldDef::boolean("isCurrent", "IsCurrent").required())
    .with_field(FieldDef::date("determinedDate", "DeterminedDate").with_index())
    .with_field(FieldDef::text("determinedDateVerbatim", "DeterminedDateVerbatim", 50))
    .with_field(FieldDef::text("typeStatusName", "TypeStatusName", 50).with_index())
    .with_field(FieldDef::text("confidence", "Confidence", 50))
    .with_field(FieldDef::text("qualifier", "Qualifier", 16))
    .with_field(FieldDef::text("method", "Method", 50))
    .with_field(FieldDef::text("featureOrBasis", "FeatureOrBasis", 250))
    .with_field(FieldDef::text("guid", "GUID", 128).with_index())
    .with_field(FieldDef::blob("remarks", "Remarks"))
    .with_index(IndexDef::new("DeterminedDateIDX", ["DeterminedDate"]))
    .with_index(IndexDef::new("TypeStatusNameIDX", ["TypeStatusName"]))
    .with_index(IndexDef::new("DeterminationGuidIDX", ["GUID"]))
    .with_relationship(
        RelationshipDef::many_to_one("collectionObject", "CollectionObject", "CollectionObjectID")
            .required()
            .with_other_side("determinations"),
    )
    .with_relationship(
        RelationshipDef::many_to_one("taxon", "Taxon", "TaxonID")
            .with_other_side("determinations"),
    )
    .with_relationship(RelationshipDef::many_to_one("determiner", "Agent", "DeterminerID"))
    .with_relationship(RelationshipDef::many_to_one(
        "preferredTaxon",
        "Taxon",
        "PreferredTaxonID",
    ))
    .with_view("Determination")
}

pub(super) fn preparation() -> TableDef {
    TableDef::new(
        "Preparation",
        "preparation",
        63,
        FieldDef::id("preparationId", "PreparationID"),
    )
    .with_timestamps()
    .with_field(FieldDef::integer("countAmt", "CountAmt"))
    .with_field(FieldDef::text("storageLocation", "StorageLocation", 50))
    .with_field(FieldDef::text("sampleNumber", "SampleNumber", 32))
    .with_field(FieldDef::text("status", "Status", 32))
    .with_field(FieldDef::date("preparedDate", "PreparedDate").with_index())
    .with_field(FieldDef::text("description", "Description", 255))
    .with_field(FieldDef::text("guid", "GUID", 128).with_index())
    .with_field(FieldDef::blob("remarks", "Remarks"))
    .with_index(IndexDef::new("PreparedDateIDX", ["PreparedDate"]))
    .with_index(IndexDef::new("PreparationGuidIDX", ["GUID"]))
    .with_relationship(
        RelationshipDef::many_to_one("collectionObject", "CollectionObject", "CollectionObjectID")
            .required()
            .with_other_side("preparations"),
    )
    .with_relationship(
        RelationshipDef::many_to_one("prepType", "PrepType", "PrepTypeID")
            .required()
            .with_other_side("preparations"),
    )
    .with_relationship(RelationshipDef::many_to_one(
        "preparedByAgent",
        "Agent",
        "PreparedByID",
    ))
    .with_view("Preparation")
}

pub(super) fn prep_type() -> TableDef {
    TableDef::new("PrepType", "preptype", 65, FieldDef::id("prepTypeId", "PrepTypeID"))
        .with_timestamps()
        .with_field(FieldDef::text("name", "Name", 64).required())
        .with_field(FieldDef::boolean("isLoanable", "IsLoanable").required())
        .with_relationship(
            RelationshipDef::one_to_many("preparations", "Preparation")
                .with_other_side("prepType"),
        )
        .with_view("PrepType")
}
