//! The application seam.
//!
//! The harness never talks to the live application directly; it drives
//! whatever implements [`Workbench`]. The application under test is an
//! opaque collaborator behind this trait, and changes it makes may
//! become visible asynchronously, which is why the workflows poll.

use crate::error::HarnessError;

/// A form-driving surface over the application under test.
///
/// Form operations act on the innermost open form; `open_subform`
/// nests a form for a to-many relationship of the current form's
/// record, and `save` commits the whole form stack.
pub trait Workbench {
    /// Submit the login form.
    ///
    /// An accepted submission may take time to establish a session,
    /// and bad credentials simply never establish one, so callers poll
    /// [`Workbench::is_logged_in`] rather than inspect the result.
    fn login(&mut self, username: &str, password: &str) -> Result<(), HarnessError>;

    /// Check whether a session is established.
    fn is_logged_in(&self) -> bool;

    /// Open a new-record form for a table.
    fn open_form(&mut self, table: &str) -> Result<(), HarnessError>;

    /// Set a field on the innermost open form. Aliases resolve the way
    /// they do in stored form definitions.
    fn set_field(&mut self, field: &str, value: &str) -> Result<(), HarnessError>;

    /// Open a nested form for a to-many relationship of the innermost
    /// form.
    fn open_subform(&mut self, relationship: &str) -> Result<(), HarnessError>;

    /// Close the innermost subform, keeping its pending record.
    fn close_subform(&mut self) -> Result<(), HarnessError>;

    /// Drive the query dialog for a to-one relationship: search the
    /// related table for `query` and attach the first hit.
    ///
    /// Returns false when nothing matched yet; callers poll, since the
    /// searched record may not be visible to the application yet.
    fn pick_related(&mut self, relationship: &str, query: &str) -> Result<bool, HarnessError>;

    /// Commit the form stack. Returns the root record's id; the record
    /// may not be visible to queries until the application catches up.
    fn save(&mut self) -> Result<u64, HarnessError>;

    /// Count the records of a table currently visible to queries.
    fn record_count(&self, table: &str) -> usize;

    /// Read a field of a visible record, if both exist.
    fn field_value(&self, table: &str, record_id: u64, field: &str) -> Option<String>;
}
