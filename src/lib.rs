//! Resource Name Binding Generator
//!
//! Derives strongly-typed resource name bindings from schema resource
//! annotations: a resource type (`logging.example.com/LogEntry`) plus one or
//! more slash-delimited name patterns
//! (`projects/{project}/logEntries/{log_entry}`). Patterns of one type are
//! reconciled into a shared field schema, discriminator names and matching
//! expressions are derived per pattern, and the result is emitted as a Rust
//! module of records and parse functions.
//!
//! # Example
//!
//! ```
//! use rsn_gen::{Resource, ResourceDescriptor, ResourceMatcher};
//!
//! let descriptor = ResourceDescriptor {
//!     type_name: "logging.example.com/LogEntry".to_string(),
//!     patterns: vec![
//!         "projects/{project}/logEntries/{log_entry}".to_string(),
//!         "organizations/{organization}/logEntries/{log_entry}".to_string(),
//!     ],
//! };
//!
//! let resource = Resource::from_descriptor(&descriptor).unwrap();
//! assert_eq!(resource.parent_fields(), ["OrganizationId", "ProjectId"]);
//!
//! let matcher = ResourceMatcher::new(resource).unwrap();
//! let parsed = matcher.parse("projects/p1/logEntries/e7").unwrap();
//! assert_eq!(parsed.parent.parent_type, "project");
//! assert_eq!(parsed.fields["LogEntryId"], "e7");
//! ```
//!
//! # Derivation Rules
//!
//! | Pattern | Discriminator constant | Tag value |
//! |---------|------------------------|-----------|
//! | `projects/{project}/logEntries/{log_entry}` | `ProjectLogEntryParentType` | `project` |
//! | `organizations/{organization}` | `OrganizationRootParentType` | (empty) |
//!
//! Parent fields are the union of every pattern's non-final variables
//! (`UpperCamel` + `Id`, sorted); the final variable of each pattern is its
//! identifier field. Names parse against patterns in declaration order, and
//! the first match wins.
//!
//! # Annotation Format
//!
//! Schema files declare resources file-wide or per message:
//! ```json
//! {
//!     "resourceDefinition": [
//!         {
//!             "type": "logging.example.com/LogEntry",
//!             "pattern": ["projects/{project}/logEntries/{log_entry}"]
//!         }
//!     ],
//!     "messages": [
//!         {
//!             "name": "Bucket",
//!             "resource": {
//!                 "type": "storage.example.com/Bucket",
//!                 "pattern": ["buckets/{bucket}"]
//!             }
//!         }
//!     ]
//! }
//! ```

mod check;
mod error;
mod generator;
mod loader;
mod matcher;
mod pattern;
mod resource;

pub use check::{
    check, check_file, CheckResult, Diagnostic, FileResult, FileStatus, Severity,
};
pub use error::{DescriptorError, GenerateError, NameError, PatternError};
pub use generator::{generate_module, generated_file_name};
pub use loader::{
    discover_resources, load_schema_file, load_schema_file_str, located_descriptors, Discovery,
    MessageSchema, Rejection, SchemaFile,
};
pub use matcher::{ParentName, ResourceMatcher, ResourceName};
pub use pattern::Pattern;
pub use resource::{Resource, ResourceDescriptor};
