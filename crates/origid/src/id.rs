use crate::base32;
use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Binary length of an id, in bytes.
pub(crate) const RAW_LEN: usize = 12;
/// Length of the base32 text form, in characters.
pub(crate) const ENCODED_LEN: usize = 20;

/// A 12-byte, lexicographically sortable identifier.
///
/// Layout, most significant byte first and big-endian throughout:
///
/// ```text
/// +----------------+--------------+----------+--------------+
/// | timestamp (4B) | machine (3B) | pid (2B) | counter (3B) |
/// +----------------+--------------+----------+--------------+
/// ```
///
/// Sorting ids as raw bytes (or as their text form, which preserves
/// the bit order) orders them by generation time first, then by
/// origin and sequence. Ids are immutable `Copy` values; the field
/// accessors are total on any id produced by a generator or parser.
///
/// # Example
/// ```
/// use origid::OrigId;
///
/// let id = OrigId::parse("9m4e2mr0ui3e8a215n4g").unwrap();
/// assert_eq!(id.to_string(), "9m4e2mr0ui3e8a215n4g");
/// assert_eq!(id.pid(), 0xE428);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrigId([u8; RAW_LEN]);

impl OrigId {
    /// Parses the 20-character text form of an id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if the input is not exactly 20
    /// characters or contains a character outside `0-9a-v`. Decoding
    /// is case-sensitive.
    pub fn parse(s: &str) -> Result<Self> {
        let src: &[u8; ENCODED_LEN] = s.as_bytes().try_into().map_err(|_| Error::InvalidId)?;
        let mut raw = [0u8; RAW_LEN];
        base32::decode(&mut raw, src)?;
        Ok(Self(raw))
    }

    /// Returns the 20-character text form as an owned [`String`].
    ///
    /// [`OrigId`] also implements [`fmt::Display`], which writes the
    /// same form without heap allocation.
    pub fn encode(&self) -> String {
        let mut buf = [0u8; ENCODED_LEN];
        base32::encode(&mut buf, &self.0);
        // SAFETY: the id alphabet is ASCII.
        unsafe { String::from_utf8_unchecked(buf.to_vec()) }
    }

    /// Constructs an id from its raw 12-byte representation.
    pub const fn from_bytes(bytes: [u8; RAW_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw 12-byte representation.
    pub const fn as_bytes(&self) -> &[u8; RAW_LEN] {
        &self.0
    }

    /// Seconds since the Unix epoch at generation time.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// The timestamp as a [`SystemTime`], at whole-second precision.
    pub fn datetime(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(u64::from(self.timestamp()))
    }

    /// The 3-byte fingerprint of the issuing host, as a read-only view.
    pub fn machine(&self) -> &[u8] {
        &self.0[4..7]
    }

    /// The issuing process id, truncated to 16 bits.
    pub fn pid(&self) -> u16 {
        u16::from_be_bytes([self.0[7], self.0[8]])
    }

    /// The 24-bit sequence counter value (< 2^24).
    pub fn counter(&self) -> u32 {
        u32::from(self.0[9]) << 16 | u32::from(self.0[10]) << 8 | u32::from(self.0[11])
    }
}

impl fmt::Display for OrigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; ENCODED_LEN];
        base32::encode(&mut buf, &self.0);
        // SAFETY: the id alphabet is ASCII.
        f.write_str(unsafe { core::str::from_utf8_unchecked(&buf) })
    }
}

impl fmt::Debug for OrigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrigId({self})")
    }
}

impl FromStr for OrigId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<[u8; RAW_LEN]> for OrigId {
    fn from(bytes: [u8; RAW_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for OrigId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; RAW_LEN] = bytes.try_into().map_err(|_| Error::InvalidId)?;
        Ok(Self(raw))
    }
}

impl AsRef<[u8]> for OrigId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
