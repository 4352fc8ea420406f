//! Workflow failure taxonomy.
//!
//! Every failure is terminal for the triggering operation — nothing is
//! retried. The `Display` text of each variant is exactly what the user
//! sees in the transient notice banner.

/// A client-side precondition failure. Never reaches the store and never
/// mutates stored session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The equipment id input is empty after trimming.
    #[error("Please enter an equipment ID")]
    MissingEquipmentId,

    /// The operator name is empty after trimming.
    #[error("Please enter your name")]
    MissingName,

    /// No equipment record has been fetched in this session.
    #[error("Please fetch equipment details first")]
    NoEquipmentSelected,

    /// The issue description is empty after trimming.
    #[error("Please describe the issue")]
    MissingDescription,
}

/// Outcome taxonomy for the two workflow operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    /// A precondition failed before any store call was made.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The store confirmed that no equipment row matches the id.
    #[error("Equipment ID not found. Please check the ID and try again.")]
    NotFound,

    /// The store reported a failure (other than not-found) during lookup.
    #[error("Error fetching equipment details. Please try again.")]
    Lookup,

    /// The store reported a failure during report insertion.
    #[error("Error submitting report. Please try again.")]
    Submit,

    /// The call never reached the store or the response never arrived.
    #[error("Network error. Please check your connection.")]
    Transport,

    /// Rejected because another operation is already in flight.
    #[error("Another operation is already in progress")]
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_form_banners() {
        assert_eq!(
            ValidationError::MissingEquipmentId.to_string(),
            "Please enter an equipment ID"
        );
        assert_eq!(ValidationError::MissingName.to_string(), "Please enter your name");
        assert_eq!(
            ValidationError::NoEquipmentSelected.to_string(),
            "Please fetch equipment details first"
        );
        assert_eq!(
            ValidationError::MissingDescription.to_string(),
            "Please describe the issue"
        );
    }

    #[test]
    fn not_found_message_names_the_id_problem() {
        assert_eq!(
            WorkflowError::NotFound.to_string(),
            "Equipment ID not found. Please check the ID and try again."
        );
    }

    #[test]
    fn validation_wraps_transparently() {
        let err = WorkflowError::from(ValidationError::MissingName);
        assert_eq!(err.to_string(), "Please enter your name");
    }
}
