use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one chat session in log output.
///
/// Sessions are never persisted, so the id only has to be unique within a
/// process. It is a v4 UUID; `short()` gives the first eight hex digits for
/// compact log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(uuid::Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    pub fn short(&self) -> String {
        let bytes = self.0.as_bytes();
        format!(
            "{:02x}{:02x}{:02x}{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3]
        )
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_is_v4() {
        let sid = SessionId::new();
        let uuid = uuid::Uuid::parse_str(&sid.to_string()).unwrap();
        assert_eq!(uuid.get_version_num(), 4);
    }

    #[test]
    fn short_is_eight_hex_digits_prefix() {
        let sid = SessionId::new();
        let short = sid.short();
        assert_eq!(short.len(), 8);
        assert!(short.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(sid.to_string().starts_with(&short));
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::default());
    }

    #[test]
    fn serializes_as_plain_uuid_string() {
        let sid = SessionId::new();
        let json = serde_json::to_string(&sid).unwrap();
        assert_eq!(json, format!("\"{sid}\""));
        let back: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sid);
    }
}
