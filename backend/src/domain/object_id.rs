//! Document identifiers.
//!
//! An [`ObjectId`] is a 12-byte value rendered as 24 lowercase hexadecimal
//! characters. Freshly generated ids are laid out as a 4-byte big-endian
//! Unix timestamp, 5 process-unique random bytes and a 3-byte counter, so ids
//! minted by one process sort in creation order.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of raw bytes in an identifier.
pub const OBJECT_ID_LEN: usize = 12;
/// Number of hexadecimal characters in the textual form.
pub const OBJECT_ID_HEX_LEN: usize = OBJECT_ID_LEN * 2;

const COUNTER_MASK: u32 = 0x00FF_FFFF;

static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

/// Error returned when text is not a 24-character hexadecimal identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectIdError {
    value: String,
}

impl ObjectIdError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl fmt::Display for ObjectIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} is not a {OBJECT_ID_HEX_LEN}-character hexadecimal object id",
            self.value
        )
    }
}

impl std::error::Error for ObjectIdError {}

/// Twelve-byte document identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId([u8; OBJECT_ID_LEN]);

impl ObjectId {
    /// Report whether `candidate` is exactly 24 ASCII hex digits.
    ///
    /// Either case is accepted. No prefix, whitespace or sign is allowed.
    ///
    /// # Examples
    /// ```
    /// use hobbies_api::domain::ObjectId;
    ///
    /// assert!(ObjectId::is_valid("507f1f77bcf86cd799439011"));
    /// assert!(ObjectId::is_valid("507F1F77BCF86CD799439011"));
    /// assert!(!ObjectId::is_valid("507f1f77bcf86cd79943901"));
    /// assert!(!ObjectId::is_valid("not-an-id"));
    /// ```
    pub fn is_valid(candidate: &str) -> bool {
        candidate.len() == OBJECT_ID_HEX_LEN && candidate.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Parse the textual form of an identifier.
    pub fn parse_str(candidate: &str) -> Result<Self, ObjectIdError> {
        let invalid = || ObjectIdError {
            value: candidate.to_owned(),
        };
        if !Self::is_valid(candidate) {
            return Err(invalid());
        }
        let mut bytes = [0_u8; OBJECT_ID_LEN];
        hex::decode_to_slice(candidate, &mut bytes).map_err(|_| invalid())?;
        Ok(Self(bytes))
    }

    /// Mint a new identifier stamped with `now`.
    pub fn generate(now: DateTime<Utc>) -> Self {
        let seconds = u32::try_from(now.timestamp().max(0)).unwrap_or(u32::MAX);
        let process = PROCESS_UNIQUE.get_or_init(rand::random::<[u8; 5]>);
        let counter = COUNTER
            .get_or_init(|| AtomicU32::new(rand::random::<u32>() & COUNTER_MASK))
            .fetch_add(1, Ordering::Relaxed)
            & COUNTER_MASK;

        let mut bytes = [0_u8; OBJECT_ID_LEN];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(process);
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Lowercase hexadecimal rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl TryFrom<String> for ObjectId {
    type Error = ObjectIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_str(&value)
    }
}

impl From<ObjectId> for String {
    fn from(value: ObjectId) -> Self {
        value.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("507f1f77bcf86cd799439011", true)]
    #[case("507F1F77BCF86CD799439011", true)]
    #[case("000000000000000000000000", true)]
    #[case("507f1f77bcf86cd79943901", false)]
    #[case("507f1f77bcf86cd7994390111", false)]
    #[case("507f1f77bcf86cd79943901g", false)]
    #[case("0x7f1f77bcf86cd799439011", false)]
    #[case(" 507f1f77bcf86cd79943901", false)]
    #[case("", false)]
    #[case("not-an-id", false)]
    fn validates_textual_form(#[case] candidate: &str, #[case] expected: bool) {
        assert_eq!(ObjectId::is_valid(candidate), expected);
        assert_eq!(ObjectId::parse_str(candidate).is_ok(), expected);
    }

    #[rstest]
    fn displays_lowercase_hex() {
        let id = ObjectId::parse_str("507F1F77BCF86CD799439011").expect("valid id");
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[rstest]
    fn parse_error_reports_input() {
        let err = ObjectId::parse_str("abc").expect_err("short id is rejected");
        assert_eq!(err.value(), "abc");
        assert!(err.to_string().contains("24-character"));
    }

    #[rstest]
    fn generated_ids_embed_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().expect("valid time");
        let id = ObjectId::generate(now);
        let seconds = u32::from_be_bytes([id.0[0], id.0[1], id.0[2], id.0[3]]);
        assert_eq!(i64::from(seconds), now.timestamp());
    }

    #[rstest]
    fn generated_ids_are_unique_and_share_process_prefix() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().expect("valid time");
        let first = ObjectId::generate(now);
        let second = ObjectId::generate(now);
        assert_ne!(first, second);
        assert_eq!(first.0[..9], second.0[..9]);
    }

    #[rstest]
    fn serde_uses_hex_string() {
        let id = ObjectId::parse_str("507f1f77bcf86cd799439011").expect("valid id");
        let json = serde_json::to_string(&id).expect("id serialises");
        assert_eq!(json, "\"507f1f77bcf86cd799439011\"");
        let back: ObjectId = serde_json::from_str(&json).expect("id deserialises");
        assert_eq!(back, id);
        assert!(serde_json::from_str::<ObjectId>("\"nope\"").is_err());
    }
}
