use core::fmt;

use sha2::{Digest, Sha256};

pub const PIN_LENGTH: usize = 4;

/// SHA-256 digest of the PIN text. The plaintext is hashed once at account
/// creation and only ever compared, never stored or recovered.
#[derive(Clone, PartialEq, Eq)]
pub struct PinHash([u8; 32]);

impl PinHash {
    pub fn digest(pin: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(pin.as_bytes());
        Self(hasher.finalize().into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        *self == Self::digest(candidate)
    }
}

// Keep the digest out of debug output and logs.
impl fmt::Debug for PinHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PinHash(..)")
    }
}

/// A PIN is exactly four ASCII digits.
pub fn is_well_formed(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::{PinHash, is_well_formed};

    #[test]
    fn equal_pins_hash_equal() {
        assert_eq!(PinHash::digest("1234"), PinHash::digest("1234"));
        assert_ne!(PinHash::digest("1234"), PinHash::digest("1235"));
    }

    #[test]
    fn matches_compares_against_the_stored_digest() {
        let hash = PinHash::digest("4321");
        assert!(hash.matches("4321"));
        assert!(!hash.matches("0000"));
    }

    #[test]
    fn well_formed_pins_are_exactly_four_digits() {
        assert!(is_well_formed("0000"));
        assert!(is_well_formed("9876"));
        for bad in ["123", "12345", "12a4", "12 4", "", "١٢٣٤"] {
            assert!(!is_well_formed(bad), "accepted {:?}", bad);
        }
    }

    #[test]
    fn debug_output_is_redacted() {
        assert_eq!(format!("{:?}", PinHash::digest("1234")), "PinHash(..)");
    }
}
