//! Issue report insert payload and status constant.

use serde::{Deserialize, Serialize};

/// Initial status for a newly submitted issue report.
///
/// The store owns any further status lifecycle; this system only ever
/// writes reports with this fixed initial value and never reads them back.
pub const STATUS_PENDING: &str = "pending";

/// Payload inserted into the `reports` table of the external record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIssueReport {
    pub user_name: String,
    /// Foreign reference to an equipment row. Not re-verified at insert
    /// time beyond the preceding successful fetch in the same session.
    pub equipment_id: String,
    pub issue_description: String,
    pub status: String,
}

impl NewIssueReport {
    /// Build a report from user-entered fields.
    ///
    /// Trims all three inputs and pins `status` to [`STATUS_PENDING`].
    pub fn new(user_name: &str, equipment_id: &str, issue_description: &str) -> Self {
        Self {
            user_name: user_name.trim().to_string(),
            equipment_id: equipment_id.trim().to_string(),
            issue_description: issue_description.trim().to_string(),
            status: STATUS_PENDING.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_fields_and_pins_status() {
        let report = NewIssueReport::new("  J. Mensah ", " 50377 ", " Alarm won't silence \n");
        assert_eq!(report.user_name, "J. Mensah");
        assert_eq!(report.equipment_id, "50377");
        assert_eq!(report.issue_description, "Alarm won't silence");
        assert_eq!(report.status, STATUS_PENDING);
    }

    #[test]
    fn serializes_with_status_field() {
        let report = NewIssueReport::new("J. Mensah", "50377", "Alarm won't silence");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "pending");
        assert_eq!(value["user_name"], "J. Mensah");
        assert_eq!(value["equipment_id"], "50377");
        assert_eq!(value["issue_description"], "Alarm won't silence");
    }
}
