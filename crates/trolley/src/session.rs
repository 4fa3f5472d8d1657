use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one in-memory cart instance.
///
/// A session is bounded by application load and reload/close; a fresh id is
/// generated when the UI session starts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh session id.
    pub fn generate() -> Self {
        SessionId(Uuid::new_v4())
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        SessionId(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
