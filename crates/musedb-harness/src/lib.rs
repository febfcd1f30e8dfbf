//! MuseDB workflow regression harness.
//!
//! Drives form workflows (login, create a taxon, create a collection
//! object with an accession and a determination) against anything that
//! implements [`Workbench`], with bounded waits wherever the
//! application needs time to catch up. [`MemoryWorkbench`] is the
//! in-memory reference implementation, backed by the core datamodel.

pub mod config;
pub mod error;
pub mod memory;
pub mod wait;
pub mod workbench;
pub mod workflows;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use memory::MemoryWorkbench;
pub use wait::{wait_for, wait_until};
pub use workbench::Workbench;
pub use workflows::{create_collection_object_workflow, create_taxon_workflow, login_workflow};
