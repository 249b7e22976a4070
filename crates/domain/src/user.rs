use serde::{Deserialize, Serialize};

/// A chat user. The id is the opaque integer assigned by the chat transport,
/// so users are created on first contact and never deleted, only deactivated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: Option<String>,
    pub active: bool,
    pub first_seen: i64,
    pub last_active: i64,
}

impl User {
    pub fn new(id: i64, name: String, now: i64) -> Self {
        Self {
            id,
            name,
            username: None,
            active: true,
            first_seen: now,
            last_active: now,
        }
    }
}
