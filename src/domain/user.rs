//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity.
///
/// The id is assigned by the repository at creation time and never
/// changes afterwards; only the name is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: u32,
    /// User display name
    #[schema(example = "Fernando")]
    pub name: String,
}

impl User {
    /// Create a new user record
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Replace the user's name, keeping the id untouched
    pub fn rename(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_keeps_id() {
        let mut user = User::new(4, "Javier");
        user.rename("Javi".to_string());
        assert_eq!(user.id, 4);
        assert_eq!(user.name, "Javi");
    }
}
