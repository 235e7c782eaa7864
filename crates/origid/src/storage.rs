use crate::{Error, OrigId, Result};

/// Scalar value union exchanged with database binding layers.
///
/// Mirrors the value set storage drivers typically bind: a nullable
/// scalar that is an integer, a float, text, or a byte payload. Ids
/// travel as [`StorageValue::Text`]; on the way back in, text and
/// bytes are both accepted and every other variant is a type
/// mismatch.
#[derive(Clone, Debug, PartialEq)]
pub enum StorageValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl StorageValue {
    /// The variant's name, used in conversion error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
        }
    }
}

impl From<OrigId> for StorageValue {
    fn from(id: OrigId) -> Self {
        id.to_storage()
    }
}

impl OrigId {
    /// Converts the id into the value bound to storage: its 20-char
    /// text form.
    pub fn to_storage(&self) -> StorageValue {
        StorageValue::Text(self.encode())
    }

    /// Reads an id back from a storage value.
    ///
    /// Text and byte values are both parsed as the 20-character text
    /// form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for any other variant, and
    /// [`Error::InvalidId`] when the payload is not a well-formed id.
    pub fn from_storage(value: StorageValue) -> Result<Self> {
        match value {
            StorageValue::Text(s) => s.parse(),
            StorageValue::Bytes(b) => {
                let s = core::str::from_utf8(&b).map_err(|_| Error::InvalidId)?;
                s.parse()
            }
            other => Err(Error::TypeMismatch(other.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "9m4e2mr0ui3e8a215n4g";

    #[test]
    fn text_value_roundtrip() {
        let id = OrigId::parse(TEXT).unwrap();
        let value = id.to_storage();
        assert_eq!(value, StorageValue::Text(TEXT.to_owned()));
        assert_eq!(OrigId::from_storage(value).unwrap(), id);
        assert_eq!(StorageValue::from(id), StorageValue::Text(TEXT.to_owned()));
    }

    #[test]
    fn byte_values_are_parsed_as_text() {
        let id = OrigId::parse(TEXT).unwrap();
        let value = StorageValue::Bytes(TEXT.as_bytes().to_vec());
        assert_eq!(OrigId::from_storage(value).unwrap(), id);
    }

    #[test]
    fn empty_text_is_an_invalid_id() {
        assert_eq!(
            OrigId::from_storage(StorageValue::Text(String::new())),
            Err(Error::InvalidId)
        );
    }

    #[test]
    fn non_utf8_bytes_are_an_invalid_id() {
        assert_eq!(
            OrigId::from_storage(StorageValue::Bytes(vec![0xFF; 20])),
            Err(Error::InvalidId)
        );
    }

    #[test]
    fn other_scalars_are_type_mismatches() {
        assert_eq!(
            OrigId::from_storage(StorageValue::Integer(42)),
            Err(Error::TypeMismatch("integer"))
        );
        assert_eq!(
            OrigId::from_storage(StorageValue::Real(4.2)),
            Err(Error::TypeMismatch("real"))
        );
        assert_eq!(
            OrigId::from_storage(StorageValue::Null),
            Err(Error::TypeMismatch("null"))
        );
    }

    #[test]
    fn type_mismatch_names_the_offender() {
        let err = OrigId::from_storage(StorageValue::Integer(42)).unwrap_err();
        assert_eq!(err.to_string(), "unsupported storage value type: integer");
    }
}
