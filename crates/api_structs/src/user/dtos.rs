use plazo_domain::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: i64,
    pub name: String,
    pub username: Option<String>,
    pub active: bool,
    pub first_seen: i64,
    pub last_active: i64,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            active: user.active,
            first_seen: user.first_seen,
            last_active: user.last_active,
        }
    }
}
