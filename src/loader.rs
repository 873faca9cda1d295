//! Schema file loading and resource discovery.
//!
//! Schema descriptor files are JSON documents with a file-scoped
//! `resourceDefinition` list and per-message `resource` annotations.
//! Discovery walks both, assembles each payload independently, and turns
//! failures into skip diagnostics instead of aborting the file.

use std::path::Path;

use serde::Deserialize;

use crate::error::{DescriptorError, GenerateError};
use crate::resource::{Resource, ResourceDescriptor};

/// One message entry in a schema file; `resource` is its optional
/// annotation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageSchema {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub resource: Option<ResourceDescriptor>,
}

/// A parsed schema descriptor file.
///
/// Absent keys deserialize to empty values; a document with no annotations
/// at all is valid and simply discovers nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaFile {
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub resource_definition: Vec<ResourceDescriptor>,
    #[serde(default)]
    pub messages: Vec<MessageSchema>,
}

/// A descriptor that failed assembly, with the JSON location it came from
/// (`/resourceDefinition/2`, `/messages/Bucket/resource`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub location: String,
    pub error: DescriptorError,
}

/// The outcome of walking one schema file: accepted resources in
/// declaration order, plus one rejection per skipped payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub resources: Vec<Resource>,
    pub rejections: Vec<Rejection>,
}

/// Load a schema file from a path.
///
/// # Errors
///
/// Returns `GenerateError::FileNotFound` if the file doesn't exist,
/// `GenerateError::Read` if it can't be read, or
/// `GenerateError::InvalidJson` if it isn't a valid JSON document.
pub fn load_schema_file(path: &Path) -> Result<SchemaFile, GenerateError> {
    if !path.exists() {
        return Err(GenerateError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    load_schema_file_str(&content)
}

/// Load a schema file from a JSON string.
///
/// # Errors
///
/// Returns `GenerateError::InvalidJson` if the string isn't valid JSON.
pub fn load_schema_file_str(content: &str) -> Result<SchemaFile, GenerateError> {
    serde_json::from_str(content).map_err(|source| GenerateError::InvalidJson { source })
}

/// Annotation payloads in declaration order, paired with their JSON
/// locations: file-scoped definitions first, then message annotations.
pub fn located_descriptors(schema: &SchemaFile) -> Vec<(String, &ResourceDescriptor)> {
    let mut located = Vec::new();
    for (index, descriptor) in schema.resource_definition.iter().enumerate() {
        located.push((format!("/resourceDefinition/{index}"), descriptor));
    }
    for (index, message) in schema.messages.iter().enumerate() {
        if let Some(descriptor) = &message.resource {
            located.push((message_location(message, index), descriptor));
        }
    }
    located
}

/// Walk a schema file's annotations and assemble every resource payload.
///
/// Payload order follows [`located_descriptors`] and is the emission order
/// downstream. Each payload is assembled independently: a bad descriptor
/// becomes a [`Rejection`] and its siblings still go through.
pub fn discover_resources(schema: &SchemaFile) -> Discovery {
    let mut discovery = Discovery::default();
    for (location, descriptor) in located_descriptors(schema) {
        match Resource::from_descriptor(descriptor) {
            Ok(resource) => discovery.resources.push(resource),
            Err(error) => discovery.rejections.push(Rejection { location, error }),
        }
    }
    discovery
}

fn message_location(message: &MessageSchema, index: usize) -> String {
    if message.name.is_empty() {
        format!("/messages/{index}/resource")
    } else {
        format!("/messages/{}/resource", message.name)
    }
}
