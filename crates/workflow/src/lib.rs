//! Report workflow controller.
//!
//! The whole reporting flow is two sequential round-trips against the
//! external record store, wrapped in the form state of a single session:
//!
//! 1. [`ReportWorkflow::lookup_equipment`] — keyed fetch of one equipment
//!    row.
//! 2. [`ReportWorkflow::submit_report`] — insert of one issue report
//!    against the fetched equipment.
//!
//! The controller owns the session state (operator name, equipment id
//! input, fetched record, issue text, busy flag, transient notice) and is
//! generic over [`RecordStore`](equipreport_store::RecordStore) so the
//! hosted service can be replaced with a test double.

pub mod controller;
pub mod error;
pub mod notice;
pub mod session;

pub use controller::ReportWorkflow;
pub use error::{ValidationError, WorkflowError};
pub use notice::{Notice, NoticeKind, NOTICE_TTL, SUBMIT_SUCCESS_MESSAGE, SUBMIT_SUCCESS_TTL};
pub use session::SessionSnapshot;
