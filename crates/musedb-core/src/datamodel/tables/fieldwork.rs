//! Field collecting: CollectingEvent, Locality, Geography and the
//! geography tree definition.
//!
//! Locality's `collectingEvents` reverse side is intentionally absent
//! from the literal here; catalog enrichment adds it.

use crate::catalog::{FieldDef, IndexDef, RelationshipDef, TableDef};

pub(super) fn collecting_event() -> TableDef {
    TableDef::new(
        "CollectingEvent",
        "collectingevent",
        10,
        FieldDef::id("collectingEventId", "CollectingEventID"),
    )
    .with_timestamps()
    .with_field(FieldDef::text("stationFieldNumber", "StationFieldNumber", 50).with_index())
    .with_field(FieldDef::text("method", "Method", 50))
    .with_field(FieldDef::date("startDate", "StartDate").with_index())
    .with_field(FieldDef::text("startDateVerbatim", "StartDateVerbatim", 50))
    .with_field(FieldDef::date("endDate", "EndDate").with_index())
    .with_field(FieldDef::text("endDateVerbatim", "EndDateVerbatim", 50))
    .with_field(FieldDef::short("startTime", "StartTime"))
    .with_field(FieldDef::short("endTime", "EndTime"))
    .with_field(FieldDef::text("verbatimDate", "VerbatimDate", 50))
    .with_field(FieldDef::text("verbatimLocality", "VerbatimLocality", 2048))
    .with_field(FieldDef::text("guid", "GUID", 128).with_index())
    .with_field(FieldDef::blob("remarks", "Remarks"))
    .with_index(IndexDef::new("CEStationFieldNumberIDX", ["StationFieldNumber"]))
    .with_index(IndexDef::new("CEStartDateIDX", ["StartDate"]))
    .with_index(IndexDef::new("CEEndDateIDX", ["EndDate"]))
    .with_index(IndexDef::new("CEGuidIDX", ["GUID"]))
    .with_relationship(
        RelationshipDef::many_to_one("locality", "Locality", "LocalityID")
            .with_other_side("collectingEvents"),
    )
    .with_relationship(
        RelationshipDef::one_to_many("collectors", "Collector")
            .with_other_side("collectingEvent"),
    )
    .with_relationship(
        RelationshipDef::one_to_many("collectionObjects", "CollectionObject")
            .with_other_side("collectingEvent"),
    )
    .with_relationship(
        RelationshipDef::many_to_one("discipline", "Discipline", "DisciplineID").required(),
    )
    .with_view("CollectingEvent")
}

pub(super) fn locality() -> TableDef {
    TableDef::new("Locality", "locality", 2, FieldDef::id("localityId", "LocalityID"))
        .with_timestamps()
        .with_field(
            FieldDef::text("localityName", "LocalityName", 1024)
                .required()
                .with_index(),
        )
        .with_field(FieldDef::text("shortName", "ShortName", 32))
        .with_field(FieldDef::text("namedPlace", "NamedPlace", 255).with_index())
        .with_field(FieldDef::text("relationToNamedPlace", "RelationToNamedPlace", 120))
        .with_field(FieldDef::decimal("latitude1", "Latitude1"))
        .with_field(FieldDef::decimal("longitude1", "Longitude1"))
        .with_field(FieldDef::decimal("latitude2", "Latitude2"))
        .with_field(FieldDef::decimal("longitude2", "Longitude2"))
        .with_field(FieldDef::text("lat1text", "Lat1Text", 50))
        .with_field(FieldDef::text("long1text", "Long1Text", 50))
        .with_field(FieldDef::text("latLongType", "LatLongType", 50))
        .with_field(FieldDef::text("latLongMethod", "LatLongMethod", 50))
        .with_field(FieldDef::double("latLongAccuracy", "LatLongAccuracy"))
        .with_field(FieldDef::integer("originalLatLongUnit", "OriginalLatLongUnit"))
        .with_field(FieldDef::text("datum", "Datum", 50))
        .with_field(FieldDef::text("elevationMethod", "ElevationMethod", 50))
        .with_field(FieldDef::double("minElevation", "MinElevation"))
        .with_field(FieldDef::double("maxElevation", "MaxElevation"))
        .with_field(FieldDef::text("verbatimElevation", "VerbatimElevation", 50))
        .with_field(FieldDef::text("verbatimLatitude", "VerbatimLatitude", 50))
        .with_field(FieldDef::text("verbatimLongitude", "VerbatimLongitude", 50))
        .with_field(FieldDef::text("guid", "GUID", 128).with_index())
        .with_field(FieldDef::blob("remarks", "Remarks"))
        .with_index(IndexDef::new("LocalityNameIDX", ["LocalityName"]))
        .with_index(IndexDef::new("NamedPlaceIDX", ["NamedPlace"]))
        .with_index(IndexDef::new("LocalityGuidIDX", ["GUID"]))
        .with_relationship(
            RelationshipDef::many_to_one("geography", "Geography", "GeographyID")
                .with_other_side("localities"),
        )
        .with_relationship(
            RelationshipDef::many_to_one("discipline", "Discipline", "DisciplineID").required(),
        )
        .with_view("Locality")
        .with_search_dialog("LocalitySearch")
}

pub(super) fn geography() -> TableDef {
    TableDef::new("Geography", "geography", 3, FieldDef::id("geographyId", "GeographyID"))
        .with_timestamps()
        .with_field(FieldDef::text("name", "Name", 128).required().with_index())
        .with_field(FieldDef::text("fullName", "FullName", 500).with_index())
        .with_field(FieldDef::text("abbrev", "Abbrev", 16))
        .with_field(FieldDef::text("commonName", "CommonName", 128))
        .with_field(FieldDef::text("geographyCode", "GeographyCode", 24))
        .with_field(FieldDef::integer("rankId", "RankID").required())
        .with_field(FieldDef::integer("nodeNumber", "NodeNumber").with_index())
        .with_field(FieldDef::integer("highestChildNodeNumber", "HighestChildNodeNumber"))
        .with_field(FieldDef::boolean("isAccepted", "IsAccepted").required())
        .with_field(FieldDef::boolean("isCurrent", "IsCurrent"))
        .with_field(FieldDef::text("guid", "GUID", 128))
        .with_index(IndexDef::new("GeoNameIDX", ["Name"]))
        .with_index(IndexDef::new("GeoFullNameIDX", ["FullName"]))
        .with_relationship(
            RelationshipDef::many_to_one("parent", "Geography", "ParentID")
                .with_other_side("children"),
        )
        .with_relationship(
            RelationshipDef::one_to_many("children", "Geography").with_other_side("parent"),
        )
        .with_relationship(
            RelationshipDef::many_to_one("definition", "GeographyTreeDef", "GeographyTreeDefID")
                .required()
                .with_other_side("treeEntries"),
        )
        .with_relationship(
            RelationshipDef::many_to_one(
                "definitionItem",
                "GeographyTreeDefItem",
                "GeographyTreeDefItemID",
            )
            .required()
            .with_other_side("treeEntries"),
        )
        .with_relationship(
            RelationshipDef::one_to_many("localities", "Locality").with_other_side("geography"),
        )
        .with_view("Geography")
        .with_search_dialog("GeographySearch")
}

pub(super) fn geography_tree_def() -> TableDef {
    TableDef::new(
        "GeographyTreeDef",
        "geographytreedef",
        44,
        FieldDef::id("geographyTreeDefId", "GeographyTreeDefID"),
    )
    .with_timestamps()
    .with_field(FieldDef::text("name", "Name", 64).required())
    .with_field(FieldDef::integer("fullNameDirection", "FullNameDirection"))
    .with_field(FieldDef::blob("remarks", "Remarks"))
    .with_relationship(
        RelationshipDef::one_to_many("disciplines", "Discipline")
            .with_other_side("geographyTreeDef"),
    )
    .with_relationship(
        RelationshipDef::one_to_many("treeDefItems", "GeographyTreeDefItem")
            .with_other_side("treeDef"),
    )
    .with_relationship(
        RelationshipDef::one_to_many("treeEntries", "Geography").with_other_side("definition"),
    )
}

pub(super) fn geography_tree_def_item() -> TableDef {
    TableDef::new(
        "GeographyTreeDefItem",
        "geographytreedefitem",
        45,
        FieldDef::id("geographyTreeDefItemId", "GeographyTreeDefItemID"),
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
        RelationshipDef::many_to_one("treeDef", "GeographyTreeDef", "GeographyTreeDefID")
            .required()
            .with_other_side("treeDefItems"),
    )
    .with_relationship(
        RelationshipDef::many_to_one("parent", "GeographyTreeDefItem", "ParentItemID")
            .with_other_side("children"),
    )
    .with_relationship(
        RelationshipDef::one_to_many("children", "GeographyTreeDefItem")
            .with_other_side("parent"),
    )
    .with_relationship(
        RelationshipDef::one_to_many("treeEntries", "Geography")
            .with_other_side("definitionItem"),
    )
}
