use crate::OrigId;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl Serialize for OrigId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OrigId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TextVisitor;

        impl de::Visitor<'_> for TextVisitor {
            type Value = OrigId;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a 20 character base32 id string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                OrigId::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(TextVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_roundtrip() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            event_id: OrigId,
        }
        let row = Row {
            event_id: OrigId::parse("9m4e2mr0ui3e8a215n4g").unwrap(),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":"9m4e2mr0ui3e8a215n4g"}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(serde_json::from_str::<OrigId>(r#""not an id""#).is_err());
        assert!(serde_json::from_str::<OrigId>("42").is_err());
    }
}
