//! Domain types shared across the equipment issue reporting crates.
//!
//! - [`EquipmentRecord`] — a row describing one piece of hospital
//!   equipment, keyed by an external identifier. Owned and maintained by
//!   the external record store; read-only here.
//! - [`NewIssueReport`] — a user-submitted report describing a problem
//!   with a specific equipment record, built for insertion into the store.

pub mod equipment;
pub mod report;

pub use equipment::EquipmentRecord;
pub use report::{NewIssueReport, STATUS_PENDING};
