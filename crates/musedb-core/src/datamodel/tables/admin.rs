//! Institutional scaffolding: Accession, Division, Discipline,
//! Collection, AppUser.

use crate::catalog::{FieldAlias, FieldDef, IndexDef, RelationshipDef, TableDef};

pub(super) fn accession() -> TableDef {
    TableDef::new("Accession", "accession", 7, FieldDef::id("accessionId", "AccessionID"))
        .with_timestamps()
        .with_field(
            FieldDef::text("accessionNumber", "AccessionNumber", 60)
                .required()
                .with_index(),
        )
        .with_field(FieldDef::text("status", "Status", 32))
        .with_field(FieldDef::text("type", "Type", 32))
        .with_field(FieldDef::text("accessionCondition", "AccessionCondition", 255))
        .with_field(FieldDef::date("dateAccessioned", "DateAccessioned").with_index())
        .with_field(FieldDef::date("dateReceived", "DateReceived"))
        .with_field(FieldDef::text("verbatimDate", "VerbatimDate", 50))
        .with_field(FieldDef::decimal("totalValue", "TotalValue"))
        .with_field(FieldDef::text("guid", "GUID", 128).with_index())
        .with_field(FieldDef::blob("remarks", "Remarks"))
        .with_index(IndexDef::new("AccessionNumberIDX", ["AccessionNumber"]))
        .with_index(IndexDef::new("AccessionDateIDX", ["DateAccessioned"]))
        .with_index(IndexDef::new("AccessionGuidIDX", ["GUID"]))
        .with_relationship(
            RelationshipDef::one_to_many("accessionAgents", "AccessionAgent")
                .with_other_side("accession"),
        )
        .with_relationship(
            RelationshipDef::one_to_many("collectionObjects", "CollectionObject")
                .with_other_side("accession"),
        )
        .with_relationship(
            RelationshipDef::many_to_one("division", "Division", "DivisionID").required(),
        )
        .with_view("Accession")
        .with_search_dialog("AccessionSearch")
}

pub(super) fn division() -> TableDef {
    TableDef::new("Division", "division", 96, FieldDef::id("divisionId", "DivisionID"))
        .with_timestamps()
        .with_field(FieldDef::text("name", "Name", 255).with_index())
        .with_field(FieldDef::text("abbrev", "Abbrev", 64))
        .with_field(FieldDef::blob("remarks", "Remarks"))
        .with_index(IndexDef::new("DivisionNameIDX", ["Name"]))
        .with_relationship(
            RelationshipDef::one_to_many("disciplines", "Discipline")
                .with_other_side("division"),
        )
        .with_relationship(
            RelationshipDef::one_to_many("members", "Agent").with_other_side("division"),
        )
        .with_view("Division")
}

pub(super) fn discipline() -> TableDef {
    TableDef::new("Discipline", "discipline", 26, FieldDef::id("disciplineId", "DisciplineID"))
        .with_timestamps()
        .with_field(FieldDef::text("name", "Name", 64).with_index())
        .with_field(FieldDef::text("type", "Type", 64).required())
        .with_field(FieldDef::text("regNumber", "RegNumber", 24))
        .with_index(IndexDef::new("DisciplineNameIDX", ["Name"]))
        .with_relationship(
            RelationshipDef::many_to_one("division", "Division", "DivisionID")
                .required()
                .with_other_side("disciplines"),
        )
        .with_relationship(
            RelationshipDef::one_to_many("collections", "Collection")
                .with_other_side("discipline"),
        )
        .with_relationship(
            RelationshipDef::one_to_one("taxonTreeDef", "TaxonTreeDef", Some("TaxonTreeDefID"))
                .with_other_side("discipline"),
        )
        .with_relationship(
            RelationshipDef::many_to_one(
                "geographyTreeDef",
                "GeographyTreeDef",
                "GeographyTreeDefID",
            )
            .required()
            .with_other_side("disciplines"),
        )
        .with_view("Discipline")
}

pub(super) fn collection() -> TableDef {
    TableDef::new("Collection", "collection", 23, FieldDef::id("collectionId", "CollectionID"))
        .with_timestamps()
        .with_field(FieldDef::text("collectionName", "CollectionName", 50).with_index())
        .with_field(FieldDef::text("code", "Code", 50))
        .with_field(FieldDef::text("collectionType", "CollectionType", 32))
        .with_field(
            FieldDef::text("catalogNumFormatName", "CatalogFormatNumName", 64).required(),
        )
        .with_field(
            FieldDef::boolean("isEmbeddedCollectingEvent", "IsEmbeddedCollectingEvent")
                .required(),
        )
        .with_field(FieldDef::text("description", "Description", 2048))
        .with_field(FieldDef::text("guid", "GUID", 128).with_index())
        .with_index(IndexDef::new("CollectionNameIDX", ["CollectionName"]))
        .with_index(IndexDef::new("CollectionGuidIDX", ["GUID"]))
        .with_relationship(
            RelationshipDef::many_to_one("discipline", "Discipline", "DisciplineID")
                .required()
                .with_other_side("collections"),
        )
        .with_relationship(
            RelationshipDef::one_to_many("collectionObjects", "CollectionObject")
                .with_other_side("collection"),
        )
        .with_view("Collection")
}

pub(super) fn app_user() -> TableDef {
    TableDef::new("AppUser", "appuser", 72, FieldDef::id("appUserId", "AppUserID"))
        .with_timestamps()
        .with_field(
            FieldDef::text("name", "Name", 64)
                .required()
                .unique()
                .with_index(),
        )
        .with_field(FieldDef::text("password", "Password", 255).required())
        .with_field(FieldDef::text("userType", "UserType", 32))
        .with_field(FieldDef::boolean("isLoggedIn", "IsLoggedIn").required())
        .with_field(FieldDef::timestamp("loginOutTime", "LoginOutTime"))
        .with_index(IndexDef::new("AppUserNameIDX", ["Name"]))
        .with_relationship(
            RelationshipDef::one_to_many("agents", "Agent").with_other_side("appUser"),
        )
        .with_alias(FieldAlias::new("username", "name"))
        .with_view("AppUser")
}
