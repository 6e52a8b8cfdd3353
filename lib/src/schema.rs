//! Wire types for the Salesforce describe API and category filtering.
//!
//! The structs here mirror the subset of the describe payloads the
//! generator actually consumes: the global describe gives one
//! [`SObjectSummary`] per object, and the per-object describe gives an
//! [`SObjectDescribe`] with the full field list.

use serde::Deserialize;

/// One entry of the global describe: an SObject's name and whether it is
/// a tenant-defined (custom) object.
#[derive(Debug, Clone, Deserialize)]
pub struct SObjectSummary {
    /// API name of the object (e.g. `Account`, `Widget__c`).
    pub name: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// `true` for custom objects, `false` for standard ones.
    pub custom: bool,
}

/// Envelope of the global describe response.
#[derive(Debug, Deserialize)]
pub(crate) struct GlobalDescribeResponse {
    pub sobjects: Vec<SObjectSummary>,
}

/// One field of a described SObject.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDescribe {
    /// API name of the field.
    pub name: String,
    /// Display label, when the org defines one.
    #[serde(default)]
    pub label: Option<String>,
    /// Salesforce field type tag (e.g. `string`, `currency`, `reference`).
    #[serde(rename = "type")]
    pub field_type: String,
    /// Target object names for `reference` fields; empty otherwise.
    #[serde(rename = "referenceTo", default)]
    pub reference_to: Vec<String>,
}

/// Full describe result for one SObject.
#[derive(Debug, Clone, Deserialize)]
pub struct SObjectDescribe {
    /// API name of the object.
    pub name: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// `true` for custom objects.
    #[serde(default)]
    pub custom: bool,
    /// Fields in the order the org reports them.
    #[serde(default)]
    pub fields: Vec<FieldDescribe>,
}

/// Which SObjects a generation run should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SObjectCategory {
    /// Every object in the org.
    #[default]
    All,
    /// Only custom (tenant-defined) objects.
    Custom,
    /// Only standard (platform-provided) objects.
    Standard,
}

impl SObjectCategory {
    /// Returns whether `summary` belongs to this category.
    pub fn matches(self, summary: &SObjectSummary) -> bool {
        match self {
            SObjectCategory::All => true,
            SObjectCategory::Custom => summary.custom,
            SObjectCategory::Standard => !summary.custom,
        }
    }

    /// Reduces `objects` to the ones in this category.
    ///
    /// Pure and side-effect free; `All` returns the input unchanged.
    pub fn filter(self, objects: Vec<SObjectSummary>) -> Vec<SObjectSummary> {
        match self {
            SObjectCategory::All => objects,
            _ => objects.into_iter().filter(|o| self.matches(o)).collect(),
        }
    }
}
