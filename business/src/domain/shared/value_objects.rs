use serde::{Deserialize, Serialize};

/// Identity of the authenticated user issuing a request.
///
/// The value is the opaque subject supplied by the identity provider. It is passed
/// explicitly into every use case and scopes all shopping list reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds a user id from a token subject, rejecting blank subjects.
    pub fn from_subject(subject: &str) -> Option<Self> {
        let trimmed = subject.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
