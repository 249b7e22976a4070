use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// A category of `Transaction`s. The `fields` list declares which payload
/// keys records of this type carry; the engine treats them as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionType {
    pub id: ID,
    pub name: String,
    pub level: i64,
    pub parent_id: Option<ID>,
    pub fields: Vec<String>,
    pub active: bool,
}

impl TransactionType {
    pub fn new(name: &str, fields: &[&str]) -> Self {
        Self {
            id: Default::default(),
            name: name.to_string(),
            level: 0,
            parent_id: None,
            fields: fields.iter().map(|f| f.to_string()).collect(),
            active: true,
        }
    }

    /// The fixed set seeded when the store holds no types yet
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "Employment contract",
                &["employer", "position", "contract_number"],
            ),
            Self::new("Leave", &["leave_kind", "approver"]),
            Self::new("Vehicle documents", &["plate_number", "document_number"]),
            Self::new("Licence", &["authority", "licence_number"]),
            Self::new("Court hearing", &["court", "case_number"]),
            Self::new("Other", &[]),
        ]
    }
}

impl Entity for TransactionType {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_types_are_active_roots() {
        let types = TransactionType::defaults();
        assert_eq!(types.len(), 6);
        for t in types {
            assert!(t.active);
            assert!(t.parent_id.is_none());
            assert_eq!(t.level, 0);
        }
    }
}
