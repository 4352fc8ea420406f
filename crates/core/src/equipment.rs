//! Equipment record entity.

use serde::{Deserialize, Serialize};

/// A row from the `equipment` table of the external record store.
///
/// The store owns the full lifecycle of these rows; this system only ever
/// fetches them by `equipment_id` and holds a transient copy in session
/// state until the form is reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    /// External identifier, unique within the store (e.g. `50377`).
    pub equipment_id: String,
    pub equipment_name: String,
    pub location: String,
    pub model_name: String,
    pub serial_number: String,
    pub manufacturer: String,
    pub condition: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_store_row() {
        let row = serde_json::json!({
            "equipment_id": "50377",
            "equipment_name": "Infusion Pump",
            "location": "ICU",
            "model_name": "IP-200",
            "serial_number": "SN-4411",
            "manufacturer": "Medline",
            "condition": "In service",
        });

        let record: EquipmentRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.equipment_id, "50377");
        assert_eq!(record.equipment_name, "Infusion Pump");
        assert_eq!(record.location, "ICU");
    }
}
