// src/core/ids.rs

use uuid::Uuid;

use crate::config::consts::UNIQUE_ID_LEN;

/// Fresh 32-hex-character record id. Time-ordered, so ids minted by one
/// process sort roughly by creation time; collisions are negligible.
pub fn new_unique_id() -> String {
    Uuid::now_v7().simple().to_string()
}

/// Shape check used by the archive store: exactly 32 hex characters.
pub fn is_unique_id(s: &str) -> bool {
    s.len() == UNIQUE_ID_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_32_hex_and_distinct() {
        let a = new_unique_id();
        let b = new_unique_id();
        assert!(is_unique_id(&a));
        assert!(is_unique_id(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn shape_check_rejects_near_misses() {
        assert!(is_unique_id("582ef18c485c11ebb1f1c9ee1740fa9b"));
        assert!(!is_unique_id("582ef18c485c11ebb1f1c9ee1740fa9"));   // 31 chars
        assert!(!is_unique_id("582ef18c485c11ebb1f1c9ee1740fa9bb")); // 33 chars
        assert!(!is_unique_id("582ef18c485c11ebb1f1c9ee1740fa9z")); // non-hex
    }
}
