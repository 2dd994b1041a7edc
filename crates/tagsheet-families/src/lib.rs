//! Fiducial tag families for printable tag sheets.
//!
//! This crate focuses on:
//! - embedded built-in families (compiled into the binary),
//! - name lookup with a descriptive error for unknown names,
//! - cell-level access to a tag's printed pattern.
//!
//! It does **not** decode tags. Families are read-only and `'static`, so
//! placement requests hold plain `&'static Family` references.

pub mod builtins;
mod family;

pub use builtins::{builtin_family, builtin_names, BUILTIN_FAMILIES};
pub use family::{Family, Polarity};

/// Error returned when a family name is not registered.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tag family '{name}' (known: {})", .known.join(", "))]
pub struct UnknownFamily {
    pub name: String,
    pub known: Vec<&'static str>,
}

/// Resolve a family name to its built-in definition.
pub fn lookup_family(name: &str) -> Result<&'static Family, UnknownFamily> {
    builtin_family(name).ok_or_else(|| UnknownFamily {
        name: name.to_string(),
        known: builtin_names(),
    })
}

/// Serde adapter storing a `&'static Family` as its name.
///
/// Use with `#[serde(with = "tagsheet_families::serde_name")]`.
pub mod serde_name {
    use super::{lookup_family, Family};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(family: &&'static Family, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(family.name)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<&'static Family, D::Error> {
        let name = String::deserialize(d)?;
        lookup_family(&name).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_family_lists_known_names() {
        let err = lookup_family("badfamily").unwrap_err();
        assert_eq!(err.name, "badfamily");
        let msg = err.to_string();
        assert!(msg.contains("badfamily"));
        assert!(msg.contains("tag36h11"));
    }

    #[test]
    fn serde_name_round_trips_through_json() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Holder {
            #[serde(with = "serde_name")]
            family: &'static Family,
        }

        let json = serde_json::to_string(&Holder {
            family: &builtins::TAG16H5,
        })
        .expect("serialize");
        assert_eq!(json, r#"{"family":"tag16h5"}"#);

        let back: Holder = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.family.name, "tag16h5");
        assert!(serde_json::from_str::<Holder>(r#"{"family":"nope"}"#).is_err());
    }
}
