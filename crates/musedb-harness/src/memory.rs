//! In-memory reference workbench.
//!
//! Backed by the core datamodel: field writes are checked against the
//! catalog, saves allocate record ids, and an optional latency delays
//! session establishment and record visibility so the polling paths get
//! exercised the way they would be against a live application.

use crate::error::HarnessError;
use crate::workbench::Workbench;
use musedb_core::{datamodel, FieldKind, SchemaBundle, TableDef};
use std::collections::HashMap;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tracing::debug;

/// How a nested form hangs off its parent record.
struct SubformLink {
    /// Reverse relationship name; the child stores the parent id under it.
    other_side: Option<String>,
}

/// One open form: a pending record plus any closed subform records.
struct FormFrame {
    /// Entity name backing the form.
    table: String,
    /// Link to the parent frame, for subforms.
    link: Option<SubformLink>,
    /// Pending values, keyed by canonical field/relationship name.
    values: HashMap<String, String>,
    /// Closed subforms awaiting the save.
    children: Vec<FormFrame>,
}

/// A committed record.
struct StoredRecord {
    id: u64,
    /// The record is invisible to queries until this instant.
    visible_after: Instant,
    values: HashMap<String, String>,
}

/// An in-memory [`Workbench`] over the built-in datamodel.
pub struct MemoryWorkbench {
    bundle: &'static SchemaBundle,
    users: HashMap<String, String>,
    latency: Duration,
    login: Option<(Instant, bool)>,
    form_stack: Vec<FormFrame>,
    records: HashMap<String, Vec<StoredRecord>>,
    next_id: u64,
}

impl MemoryWorkbench {
    /// Create an empty workbench with no users and no latency.
    pub fn new() -> Self {
        Self {
            bundle: datamodel(),
            users: HashMap::new(),
            latency: Duration::ZERO,
            login: None,
            form_stack: Vec::new(),
            records: HashMap::new(),
            next_id: 1,
        }
    }

    /// Register a login.
    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.insert(username.into(), password.into());
        self
    }

    /// Delay session establishment and record visibility, simulating
    /// application processing time.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Insert a record directly, bypassing forms. Used to stage
    /// fixtures a workflow will look up. The record is immediately
    /// visible.
    pub fn seed_record(
        &mut self,
        table: &str,
        fields: &[(&str, &str)],
    ) -> Result<u64, HarnessError> {
        let table_def = self.table_def(table)?;
        let table_key = table_def.table.clone();

        let mut values = HashMap::new();
        for (field, value) in fields {
            let canonical = resolve_field(table_def, field)?;
            values.insert(canonical, (*value).to_string());
        }
        stamp_created(&mut values);

        let id = self.next_id;
        self.next_id += 1;
        self.records.entry(table_key).or_default().push(StoredRecord {
            id,
            visible_after: Instant::now(),
            values,
        });
        Ok(id)
    }

    fn table_def(&self, table: &str) -> Result<&'static TableDef, HarnessError> {
        self.bundle
            .get_table(table)
            .ok_or_else(|| HarnessError::UnknownTable(table.to_string()))
    }

    fn innermost(&mut self) -> Result<&mut FormFrame, HarnessError> {
        self.form_stack.last_mut().ok_or(HarnessError::NoOpenForm)
    }

    fn require_session(&self) -> Result<(), HarnessError> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(HarnessError::NotLoggedIn)
        }
    }

    /// Commit a frame and its children, linking children to the parent.
    fn commit_frame(
        &mut self,
        frame: FormFrame,
        parent: Option<(String, u64)>,
    ) -> Result<u64, HarnessError> {
        let table_def = self.table_def(&frame.table)?;
        let table_key = table_def.table.clone();

        let mut values = frame.values;
        stamp_created(&mut values);
        if let Some((other_side, parent_id)) = parent {
            values.insert(other_side, parent_id.to_string());
        }

        // Required scalar fields must be filled; timestamps are stamped
        // by the application, and required to-one relationships are a
        // save-rules concern the forms do not enforce.
        for field in &table_def.fields {
            if field.required
                && field.kind != FieldKind::Timestamp
                && !values.contains_key(&field.name)
            {
                return Err(HarnessError::MissingRequired {
                    table: table_def.name.clone(),
                    field: field.name.clone(),
                });
            }
        }

        let id = self.next_id;
        self.next_id += 1;
        self.records.entry(table_key).or_default().push(StoredRecord {
            id,
            visible_after: Instant::now() + self.latency,
            values,
        });
        debug!(table = %frame.table, id, "committed record");

        for child in frame.children {
            let link = child
                .link
                .as_ref()
                .and_then(|l| l.other_side.clone())
                .map(|other_side| (other_side, id));
            self.commit_frame(child, link)?;
        }

        Ok(id)
    }

    fn visible_records(&self, table: &str) -> impl Iterator<Item = &StoredRecord> {
        let now = Instant::now();
        self.bundle
            .get_table(table)
            .and_then(|t| self.records.get(&t.table))
            .into_iter()
            .flatten()
            .filter(move |r| r.visible_after <= now)
    }
}

impl Default for MemoryWorkbench {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbench for MemoryWorkbench {
    fn login(&mut self, username: &str, password: &str) -> Result<(), HarnessError> {
        // The submission itself always goes through; bad credentials
        // just never establish a session, like a login page re-render.
        let accepted = self
            .users
            .get(username)
            .is_some_and(|p| p.as_str() == password);
        self.login = Some((Instant::now(), accepted));
        Ok(())
    }

    fn is_logged_in(&self) -> bool {
        self.login
            .is_some_and(|(at, accepted)| accepted && at.elapsed() >= self.latency)
    }

    fn open_form(&mut self, table: &str) -> Result<(), HarnessError> {
        self.require_session()?;
        let table_def = self.table_def(table)?;
        self.form_stack = vec![FormFrame {
            table: table_def.name.clone(),
            link: None,
            values: HashMap::new(),
            children: Vec::new(),
        }];
        Ok(())
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), HarnessError> {
        self.require_session()?;
        let table = self.innermost()?.table.clone();
        let table_def = self.table_def(&table)?;
        let canonical = resolve_field(table_def, field)?;
        self.innermost()?.values.insert(canonical, value.to_string());
        Ok(())
    }

    fn open_subform(&mut self, relationship: &str) -> Result<(), HarnessError> {
        self.require_session()?;
        let table = self.innermost()?.table.clone();
        let table_def = self.table_def(&table)?;

        let rel = table_def
            .get_relationship(relationship)
            .filter(|r| r.is_to_many())
            .ok_or_else(|| HarnessError::UnknownRelationship {
                table: table_def.name.clone(),
                relationship: relationship.to_string(),
            })?;
        let related = self.table_def(&rel.related_table)?;

        let frame = FormFrame {
            table: related.name.clone(),
            link: Some(SubformLink {
                other_side: rel.other_side.clone(),
            }),
            values: HashMap::new(),
            children: Vec::new(),
        };
        self.form_stack.push(frame);
        Ok(())
    }

    fn close_subform(&mut self) -> Result<(), HarnessError> {
        self.require_session()?;
        if self.form_stack.len() < 2 {
            return Err(HarnessError::NoOpenForm);
        }
        let frame = self.form_stack.pop().expect("stack checked above");
        self.form_stack
            .last_mut()
            .expect("stack checked above")
            .children
            .push(frame);
        Ok(())
    }

    fn pick_related(&mut self, relationship: &str, query: &str) -> Result<bool, HarnessError> {
        self.require_session()?;
        let table = self.innermost()?.table.clone();
        let table_def = self.table_def(&table)?;

        let rel = table_def
            .get_relationship(relationship)
            .filter(|r| !r.is_to_many())
            .ok_or_else(|| HarnessError::UnknownRelationship {
                table: table_def.name.clone(),
                relationship: relationship.to_string(),
            })?;
        let rel_name = rel.name.clone();
        let related_name = rel.related_table.clone();

        let hit = self
            .visible_records(&related_name)
            .find(|r| r.values.values().any(|v| v == query))
            .map(|r| r.id);

        match hit {
            Some(id) => {
                self.innermost()?.values.insert(rel_name, id.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn save(&mut self) -> Result<u64, HarnessError> {
        self.require_session()?;
        // Fold any still-open subforms down onto the root.
        while self.form_stack.len() > 1 {
            self.close_subform()?;
        }
        let root = self.form_stack.pop().ok_or(HarnessError::NoOpenForm)?;
        self.commit_frame(root, None)
    }

    fn record_count(&self, table: &str) -> usize {
        self.visible_records(table).count()
    }

    fn field_value(&self, table: &str, record_id: u64, field: &str) -> Option<String> {
        let table_def = self.bundle.get_table(table)?;
        let canonical = resolve_field(table_def, field).ok()?;
        self.visible_records(table)
            .find(|r| r.id == record_id)
            .and_then(|r| r.values.get(&canonical).cloned())
    }
}

/// Resolve a field name, following aliases, to its canonical name.
/// Relationship names resolve too, for to-one reference values.
fn resolve_field(table: &TableDef, field: &str) -> Result<String, HarnessError> {
    let name = table.resolve_alias(field).unwrap_or(field);
    if let Some(field_def) = table.get_field(name) {
        return Ok(field_def.name.clone());
    }
    if let Some(rel) = table.get_relationship(name) {
        return Ok(rel.name.clone());
    }
    Err(HarnessError::UnknownField {
        table: table.name.clone(),
        field: field.to_string(),
    })
}

/// Stamp the audit timestamp the way the application would.
fn stamp_created(values: &mut HashMap<String, String>) {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    values
        .entry("timestampCreated".to_string())
        .or_insert_with(|| now.to_string());
}
