//! People and organizations: Agent, Address, Collector, AccessionAgent.

use crate::catalog::{FieldDef, IndexDef, RelationshipDef, TableDef};

pub(super) fn agent() -> TableDef {
    TableDef::new("Agent", "agent", 5, FieldDef::id("agentId", "AgentID"))
        .with_timestamps()
        .with_field(FieldDef::byte("agentType", "AgentType").required().with_index())
        .with_field(FieldDef::text("firstName", "FirstName", 50))
        .with_field(FieldDef::text("middleInitial", "MiddleInitial", 50))
        .with_field(FieldDef::text("lastName", "LastName", 256).with_index())
        .with_field(FieldDef::text("title", "Title", 50))
        .with_field(FieldDef::text("abbreviation", "Abbreviation", 50).with_index())
        .with_field(FieldDef::text("initials", "Initials", 8))
        .with_field(FieldDef::text("jobTitle", "JobTitle", 50))
        .with_field(FieldDef::text("email", "Email", 50))
        .with_field(FieldDef::text("url", "URL", 1024))
        .with_field(FieldDef::text("interests", "Interests", 255))
        .with_field(FieldDef::date("dateOfBirth", "DateOfBirth"))
        .with_field(FieldDef::date("dateOfDeath", "DateOfDeath"))
        .with_field(FieldDef::text("guid", "GUID", 128).with_index())
        .with_field(FieldDef::blob("remarks", "Remarks"))
        .with_index(IndexDef::new("AgentLastNameIDX", ["LastName"]))
        .with_index(IndexDef::new("AgentTypeIDX", ["AgentType"]))
        .with_index(IndexDef::new("AbbreviationIDX", ["Abbreviation"]))
        .with_index(IndexDef::new("AgentGuidIDX", ["GUID"]))
        .with_relationship(
            RelationshipDef::one_to_many("addresses", "Address").with_other_side("agent"),
        )
        .with_relationship(
            RelationshipDef::one_to_many("collectors", "Collector").with_other_side("agent"),
        )
        .with_relationship(
            RelationshipDef::many_to_one("division", "Division", "DivisionID")
                .with_other_side("members"),
        )
        .with_relationship(
            RelationshipDef::many_to_one("appUser", "AppUser", "AppUserID")
                .with_other_side("agents"),
        )
        .with_view("Agent")
        .with_search_dialog("AgentSearch")
}

pub(super) fn address() -> TableDef {
    TableDef::new("Address", "address", 8, FieldDef::id("addressId", "AddressID"))
        .with_timestamps()
        .with_field(FieldDef::text("address", "Address", 255))
        .with_field(FieldDef::text("address2", "Address2", 255))
        .with_field(FieldDef::text("city", "City", 64))
        .with_field(FieldDef::text("state", "State", 64))
        .with_field(FieldDef::text("country", "Country", 64))
        .with_field(FieldDef::text("postalCode", "PostalCode", 32))
        .with_field(FieldDef::text("phone1", "Phone1", 50))
        .with_field(FieldDef::text("phone2", "Phone2", 50))
        .with_field(FieldDef::text("fax", "Fax", 50))
        .with_field(FieldDef::boolean("isPrimary", "IsPrimary"))
        .with_field(FieldDef::boolean("isCurrent", "IsCurrent"))
        .with_field(FieldDef::date("startDate", "StartDate"))
        .with_field(FieldDef::date("endDate", "EndDate"))
        .with_relationship(
            RelationshipDef::many_to_one("agent", "Agent", "AgentID")
                .required()
                .with_other_side("addresses"),
        )
        .with_view("Address")
}

pub(super) fn collector() -> TableDef {
    TableDef::new("Collector", "collector", 30, FieldDef::id("collectorId", "CollectorID"))
        .with_timestamps()
        .with_field(FieldDef::integer("orderNumber", "OrderNumber").required())
        .with_field(FieldDef::boolean("isPrimary", "IsPrimary").required())
        .with_field(FieldDef::blob("remarks", "Remarks"))
        .with_index(IndexDef::new("CollectorOrderIDX", ["OrderNumber"]))
        .with_relationship(
            RelationshipDef::many_to_one("agent", "Agent", "AgentID")
                .required()
                .with_other_side("collectors"),
        )
        .with_relationship(
            RelationshipDef::many_to_one("collectingEvent", "CollectingEvent", "CollectingEventID")
                .required()
                .with_other_side("collectors"),
        )
        .with_relationship(RelationshipDef::many_to_one("division", "Division", "DivisionID"))
        .with_view("Collector")
}

pub(super) fn accession_agent() -> TableDef {
    TableDef::new(
        "AccessionAgent",
        "accessionagent",
        12,
        FieldDef::id("accessionAgentId", "AccessionAgentID"),
    )
    .with_timestamps()
    .with_field(FieldDef::text("role", "Role", 50).required())
    .with_field(FieldDef::blob("remarks", "Remarks"))
    .with_index(IndexDef::new("AccessionAgentIDX", ["Role", "AgentID", "AccessionID"]))
    .with_relationship(
        RelationshipDef::many_to_one("accession", "Accession", "AccessionID")
            .with_other_side("accessionAgents"),
    )
    .with_relationship(
        RelationshipDef::many_to_one("agent", "Agent", "AgentID").required(),
    )
    .with_view("AccessionAgent")
}
