//! Harness error types.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while driving a workbench through a workflow.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A bounded wait expired before its condition held.
    #[error("timed out after {waited:?} waiting for {what}")]
    WaitTimeout {
        /// Description of the awaited condition.
        what: String,
        /// How long the harness polled.
        waited: Duration,
    },

    /// A form operation was issued with no form open.
    #[error("no form is open")]
    NoOpenForm,

    /// A form operation was issued before logging in.
    #[error("not logged in")]
    NotLoggedIn,

    /// The requested form's table is not in the catalog.
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// The open form's table has no such field.
    #[error("{table} has no field {field}")]
    UnknownField {
        /// Table backing the open form.
        table: String,
        /// The unresolved field name.
        field: String,
    },

    /// The open form's table has no such relationship.
    #[error("{table} has no relationship {relationship}")]
    UnknownRelationship {
        /// Table backing the open form.
        table: String,
        /// The unresolved relationship name.
        relationship: String,
    },

    /// A required field was left empty at save time.
    #[error("missing required field {field} on {table}")]
    MissingRequired {
        /// Table backing the form.
        table: String,
        /// The empty required field.
        field: String,
    },

    /// Any other failure reported by the workbench implementation.
    #[error("workbench error: {0}")]
    Workbench(String),
}
