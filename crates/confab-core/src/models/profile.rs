/// Read-only record describing the local user.
///
/// The store stamps its `name` onto outgoing messages; everything else is
/// only displayed, never interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub avatar: String,
    pub contact: String,
    pub registered_at: String,
}

impl UserProfile {
    pub fn new(name: &str, avatar: &str, contact: &str, registered_at: &str) -> Self {
        Self {
            name: name.to_string(),
            avatar: avatar.to_string(),
            contact: contact.to_string(),
            registered_at: registered_at.to_string(),
        }
    }
}
