//! # sobjgen
//!
//! Generates faux Apex classes for a Salesforce org's SObjects so the Apex
//! Language Server can offer code completion against org-specific schema.
//!
//! The pipeline is a single pass: list the org's objects, filter by
//! category, describe each object's fields in parallel, map each field type
//! to an Apex type, and write one `.cls` stub per object under
//! `<output>/tools/sobjects/{standardObjects,customObjects}/`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sobjgen_lib::{GenerateOptions, OrgConnection, SObjectCategory, generate};
//!
//! # async fn example() -> sobjgen_lib::Result<()> {
//! let connection = OrgConnection::new("https://example.my.salesforce.com", "00D...token");
//! let options = GenerateOptions::new("/path/to/project")
//!     .category(SObjectCategory::All);
//! let result = generate(&connection, &options).await?;
//! println!("generated {} stubs", result.total_objects);
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod error;
pub mod generator;
pub mod render;
pub mod schema;
pub mod typemap;

pub use connection::{DEFAULT_API_VERSION, OrgConnection};
pub use error::{Result, SobjgenError};
pub use generator::{
    DEFAULT_CONCURRENCY, GenerateOptions, GenerateResult, ProgressEvent, ProgressSink, generate,
};
pub use schema::{FieldDescribe, SObjectCategory, SObjectDescribe, SObjectSummary};
