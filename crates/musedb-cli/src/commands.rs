//! Subcommand implementations.

use musedb_core::{datamodel, ensure_valid, validate_bundle, CatalogStore, Error, TableDef};
use std::path::Path;
use tracing::info;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// List the tables in the built-in datamodel.
pub fn tables() -> CommandResult {
    let bundle = datamodel();
    println!("{:<24} {:>5}  {:<22} {}", "NAME", "ID", "TABLE", "SYSTEM");
    for table in bundle.sorted_tables() {
        println!(
            "{:<24} {:>5}  {:<22} {}",
            table.name,
            table.table_id,
            table.table,
            if table.system { "yes" } else { "" }
        );
    }
    Ok(())
}

/// Show one table in full.
pub fn describe(name: &str) -> CommandResult {
    let bundle = datamodel();
    let table = bundle
        .get_table(name)
        .ok_or_else(|| Error::UnknownTable(name.to_string()))?;

    print_header(table);

    println!("\nfields:");
    print_field(&table.id_field, true);
    for field in &table.fields {
        print_field(field, false);
    }

    if !table.relationships.is_empty() {
        println!("\nrelationships:");
        for rel in &table.relationships {
            let column = rel.column.as_deref().unwrap_or("-");
            let other = rel.other_side.as_deref().unwrap_or("-");
            println!(
                "  {:<22} {:<12?} -> {:<22} column={} otherSide={}{}{}",
                rel.name,
                rel.cardinality,
                rel.related_table,
                column,
                other,
                if rel.required { " required" } else { "" },
                if rel.dependent { " dependent" } else { "" },
            );
        }
    }

    if !table.indexes.is_empty() {
        println!("\nindexes:");
        for index in &table.indexes {
            println!("  {:<26} ({})", index.name, index.columns.join(", "));
        }
    }

    if !table.aliases.is_empty() {
        println!("\naliases:");
        for alias in &table.aliases {
            println!("  {} -> {}", alias.alias, alias.field);
        }
    }

    Ok(())
}

fn print_header(table: &TableDef) {
    println!("{} (id {}, table {})", table.name, table.table_id, table.table);
    if let Some(view) = &table.view {
        println!("view: {}", view);
    }
    if let Some(dialog) = &table.search_dialog {
        println!("search dialog: {}", dialog);
    }
    if table.system {
        println!("system table");
    }
}

fn print_field(field: &musedb_core::FieldDef, is_id: bool) {
    let length = field
        .length
        .map(|l| format!("({})", l))
        .unwrap_or_default();
    println!(
        "  {:<26} {:<10} {}{}{}{}{}",
        field.name,
        format!("{:?}{}", field.kind, length),
        field.column,
        if is_id { " [pk]" } else { "" },
        if field.required { " required" } else { "" },
        if field.unique { " unique" } else { "" },
        if field.indexed { " indexed" } else { "" },
    );
}

/// Run the consistency checks; non-zero exit on findings.
pub fn validate() -> CommandResult {
    let findings = validate_bundle(datamodel());
    if findings.is_empty() {
        println!("datamodel is consistent ({} tables)", datamodel().tables.len());
        return Ok(());
    }

    for finding in &findings {
        eprintln!("{}", finding);
    }
    Err(format!("{} finding(s)", findings.len()).into())
}

/// Dump the enriched datamodel as JSON.
pub fn export(pretty: bool) -> CommandResult {
    let bundle = datamodel();
    let json = if pretty {
        serde_json::to_string_pretty(bundle)?
    } else {
        serde_json::to_string(bundle)?
    };
    println!("{}", json);
    Ok(())
}

/// Publish the built-in datamodel into a catalog store.
pub fn publish(data_dir: &Path) -> CommandResult {
    ensure_valid(datamodel())?;

    let db = sled::open(data_dir)?;
    let store = CatalogStore::open(&db)?;
    let version = store.publish(datamodel().clone())?;
    store.flush()?;

    info!(version, path = %data_dir.display(), "published");
    println!("published version {}", version);
    Ok(())
}

/// Show a catalog store's current version and table count.
pub fn status(data_dir: &Path) -> CommandResult {
    let db = sled::open(data_dir)?;
    let store = CatalogStore::open(&db)?;

    let version = store.current_version();
    if version == 0 {
        println!("empty store (nothing published)");
        return Ok(());
    }

    let tables = store.list_tables();
    println!("version {} ({} tables)", version, tables.len());
    for name in tables {
        println!("  {}", name);
    }
    Ok(())
}
