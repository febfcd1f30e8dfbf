//! Scripted form workflows.
//!
//! Each workflow is the harness equivalent of one browser regression
//! script: a fixed sequence of form actions with a bounded wait
//! wherever the application needs time to catch up.

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::wait::wait_until;
use crate::workbench::Workbench;
use tracing::info;

/// Log in and wait for the session to establish.
pub fn login_workflow(
    wb: &mut dyn Workbench,
    config: &HarnessConfig,
    username: &str,
    password: &str,
) -> Result<(), HarnessError> {
    wb.login(username, password)?;
    wait_until(config, "login session", || wb.is_logged_in())?;
    info!(username, "logged in");
    Ok(())
}

/// Create a taxon record and wait until it is queryable.
///
/// Returns the new record's id.
pub fn create_taxon_workflow(
    wb: &mut dyn Workbench,
    config: &HarnessConfig,
    name: &str,
    rank_id: u32,
) -> Result<u64, HarnessError> {
    wb.open_form("Taxon")?;
    wb.set_field("name", name)?;
    wb.set_field("rankId", &rank_id.to_string())?;
    wb.set_field("isAccepted", "true")?;
    wb.set_field("isHybrid", "false")?;
    let id = wb.save()?;

    wait_until(config, "saved taxon visible", || {
        wb.field_value("Taxon", id, "name").as_deref() == Some(name)
    })?;
    info!(name, id, "created taxon");
    Ok(id)
}

/// Create a collection object, attach an accession through the query
/// dialog, and add a determination naming a taxon.
///
/// The accession and taxon are looked up by value and must already
/// exist (or become visible within the wait window). Returns the new
/// collection object's id.
pub fn create_collection_object_workflow(
    wb: &mut dyn Workbench,
    config: &HarnessConfig,
    catalog_number: &str,
    accession_number: &str,
    taxon_name: &str,
) -> Result<u64, HarnessError> {
    wb.open_form("CollectionObject")?;
    wb.set_field("catalogNumber", catalog_number)?;
    pick_with_wait(wb, config, "accession", accession_number)?;

    wb.open_subform("determinations")?;
    wb.set_field("isCurrent", "true")?;
    pick_with_wait(wb, config, "taxon", taxon_name)?;
    wb.close_subform()?;

    let id = wb.save()?;
    wait_until(config, "saved collection object visible", || {
        wb.field_value("CollectionObject", id, "catalogNumber").as_deref() == Some(catalog_number)
    })?;
    info!(catalog_number, id, "created collection object");
    Ok(id)
}

/// Drive a query-dialog pick, polling while the target record is not
/// yet visible. A structurally bad pick (unknown relationship) fails
/// immediately; an empty result polls until the window closes.
fn pick_with_wait(
    wb: &mut dyn Workbench,
    config: &HarnessConfig,
    relationship: &str,
    query: &str,
) -> Result<(), HarnessError> {
    if wb.pick_related(relationship, query)? {
        return Ok(());
    }
    wait_until(config, &format!("{relationship} matching {query}"), || {
        matches!(wb.pick_related(relationship, query), Ok(true))
    })
}
