//! Form definitions and the logic that runs on field values.
//!
//! - `registry`: Static tab, field and button tables
//! - `store`: Per-tab memory of field values across tab switches
//! - `validation`: Naming-convention and format validators
//! - `import`: JSON ticket import for the new-tenant tab

pub mod import;
pub mod registry;
pub mod store;
pub mod validation;

pub use registry::{TabId, tab_config};
pub use store::{ClearScope, FieldStore};
