//! Salesforce field type to Apex type mapping.
//!
//! The mapping is a total, pure function: every possible type tag maps to
//! some Apex type, with `Object` as the fallback for tags this crate does
//! not know about. That way an org that grows a new field type degrades to
//! a usable (if loosely typed) stub instead of failing generation.
//!
//! The tables are declarative statics rather than conditional chains so the
//! mapping can be read, tested, and extended row by row.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Type tags that all render as Apex `String`.
const STRING_TYPES: &[&str] = &[
    "id",
    "string",
    "email",
    "phone",
    "url",
    "textarea",
    "picklist",
    "multipicklist",
    "combobox",
    "encryptedstring",
];

/// Numeric-with-precision tags that all render as Apex `Double`.
const DOUBLE_TYPES: &[&str] = &["double", "currency", "percent"];

/// Exact-match rows for the remaining known tags.
static EXACT_TYPES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("int", "Integer"),
        ("boolean", "Boolean"),
        ("date", "Date"),
        ("datetime", "Datetime"),
        ("time", "Time"),
        ("location", "Location"),
        ("address", "Address"),
        ("base64", "Blob"),
    ])
});

/// Maps a Salesforce field type tag to the Apex type used in the stub.
///
/// `reference_to` is consulted only for `reference` fields: the stub uses
/// the first target object's name, or `Id` when the target list is empty.
///
/// Total over all inputs; unrecognized tags map to `Object`.
///
/// ## Examples
///
/// ```
/// use sobjgen_lib::typemap::apex_type;
///
/// assert_eq!(apex_type("string", &[]), "String");
/// assert_eq!(apex_type("currency", &[]), "Double");
/// assert_eq!(apex_type("reference", &["Account".to_string()]), "Account");
/// assert_eq!(apex_type("bogus-tag", &[]), "Object");
/// ```
pub fn apex_type(field_type: &str, reference_to: &[String]) -> String {
    if STRING_TYPES.contains(&field_type) {
        return "String".to_string();
    }

    if DOUBLE_TYPES.contains(&field_type) {
        return "Double".to_string();
    }

    if field_type == "reference" {
        return match reference_to.first() {
            Some(target) => target.clone(),
            None => "Id".to_string(),
        };
    }

    EXACT_TYPES
        .get(field_type)
        .map(|t| (*t).to_string())
        .unwrap_or_else(|| "Object".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_like_tags_map_to_string() {
        for tag in STRING_TYPES {
            assert_eq!(apex_type(tag, &[]), "String", "tag: {tag}");
        }
    }

    #[test]
    fn numeric_tags_map_to_double() {
        for tag in DOUBLE_TYPES {
            assert_eq!(apex_type(tag, &[]), "Double", "tag: {tag}");
        }
    }

    #[test]
    fn exact_table_rows() {
        assert_eq!(apex_type("int", &[]), "Integer");
        assert_eq!(apex_type("boolean", &[]), "Boolean");
        assert_eq!(apex_type("date", &[]), "Date");
        assert_eq!(apex_type("datetime", &[]), "Datetime");
        assert_eq!(apex_type("time", &[]), "Time");
        assert_eq!(apex_type("location", &[]), "Location");
        assert_eq!(apex_type("address", &[]), "Address");
        assert_eq!(apex_type("base64", &[]), "Blob");
    }

    #[test]
    fn reference_uses_first_target() {
        let targets = vec!["Account".to_string(), "Lead".to_string()];
        assert_eq!(apex_type("reference", &targets), "Account");
    }

    #[test]
    fn reference_without_targets_falls_back_to_id() {
        assert_eq!(apex_type("reference", &[]), "Id");
    }

    #[test]
    fn unknown_tags_fall_back_to_object() {
        assert_eq!(apex_type("bogus-tag", &[]), "Object");
        assert_eq!(apex_type("", &[]), "Object");
        assert_eq!(apex_type("anyType", &[]), "Object");
    }

    #[test]
    fn mapping_ignores_targets_for_non_reference_tags() {
        let targets = vec!["Account".to_string()];
        assert_eq!(apex_type("string", &targets), "String");
        assert_eq!(apex_type("bogus", &targets), "Object");
    }
}
