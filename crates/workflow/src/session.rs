//! Single-session form state.

use equipreport_core::EquipmentRecord;

use crate::notice::Notice;

/// Mutable state of one reporting session.
///
/// All of it is transient: nothing survives the process, and a successful
/// submission resets every field to its initial empty value.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    /// Operator name input.
    pub user_name: String,
    /// Equipment id input. Stays editable after a successful lookup.
    pub equipment_id: String,
    /// The record fetched by the last successful lookup, if any.
    pub equipment: Option<EquipmentRecord>,
    /// Issue description input.
    pub issue_description: String,
    /// True while a store call is in flight.
    pub busy: bool,
    /// Active transient message, if any.
    pub notice: Option<Notice>,
}

impl SessionState {
    /// Reset the form to its initial empty values.
    ///
    /// Leaves `busy` and `notice` alone; the caller decides those.
    pub fn reset_form(&mut self) {
        self.user_name.clear();
        self.equipment_id.clear();
        self.equipment = None;
        self.issue_description.clear();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user_name: self.user_name.clone(),
            equipment_id: self.equipment_id.clone(),
            equipment: self.equipment.clone(),
            issue_description: self.issue_description.clone(),
            busy: self.busy,
            notice: self.notice.clone(),
        }
    }
}

/// A point-in-time copy of the session state, used for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user_name: String,
    pub equipment_id: String,
    pub equipment: Option<EquipmentRecord>,
    pub issue_description: String,
    pub busy: bool,
    pub notice: Option<Notice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_form_clears_fields_but_not_notice() {
        let mut state = SessionState {
            user_name: "J. Mensah".into(),
            equipment_id: "50377".into(),
            equipment: None,
            issue_description: "Alarm won't silence".into(),
            busy: false,
            notice: Some(Notice::success("done")),
        };

        state.reset_form();

        assert!(state.user_name.is_empty());
        assert!(state.equipment_id.is_empty());
        assert!(state.equipment.is_none());
        assert!(state.issue_description.is_empty());
        assert!(state.notice.is_some());
    }
}
