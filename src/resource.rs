//! Resource assembly: turning a raw annotation payload into a validated
//! [`Resource`] and reconciling its patterns into one field schema.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::error::DescriptorError;
use crate::pattern::{snake, Pattern};

/// Raw resource annotation payload as it appears in a schema file.
///
/// `type` carries `<service>/<TypeName>`; `pattern` lists the accepted name
/// shapes in declaration order. Absent keys deserialize to empty values and
/// are rejected during assembly, not during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceDescriptor {
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(rename = "pattern", default)]
    pub patterns: Vec<String>,
}

/// A declared resource type with its validated patterns.
///
/// Assembly is all-or-none: one bad pattern rejects the whole descriptor.
/// Pattern order is preserved and is the match-attempt order everywhere
/// downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    service_name: String,
    type_name: String,
    patterns: Vec<Pattern>,
}

impl Resource {
    /// Validate and assemble a descriptor.
    ///
    /// # Errors
    ///
    /// - [`DescriptorError::MissingType`] when `type` is empty.
    /// - [`DescriptorError::MissingPattern`] when no patterns are declared.
    /// - [`DescriptorError::InvalidTypeFormat`] when `type` does not split on
    ///   `/` into exactly two parts.
    /// - [`DescriptorError::InvalidPattern`] for the first pattern that fails
    ///   to parse; sibling patterns of the same descriptor are not kept.
    pub fn from_descriptor(descriptor: &ResourceDescriptor) -> Result<Resource, DescriptorError> {
        if descriptor.type_name.is_empty() {
            return Err(DescriptorError::MissingType);
        }
        if descriptor.patterns.is_empty() {
            return Err(DescriptorError::MissingPattern);
        }
        let parts: Vec<&str> = descriptor.type_name.split('/').collect();
        if parts.len() != 2 {
            return Err(DescriptorError::InvalidTypeFormat {
                type_name: descriptor.type_name.clone(),
            });
        }

        let mut patterns = Vec::with_capacity(descriptor.patterns.len());
        for raw in &descriptor.patterns {
            let pattern =
                Pattern::parse(raw).map_err(|source| DescriptorError::InvalidPattern {
                    pattern: raw.clone(),
                    source,
                })?;
            patterns.push(pattern);
        }

        Ok(Resource {
            service_name: parts[0].to_string(),
            type_name: parts[1].to_string(),
            patterns,
        })
    }

    /// Service part of the declared type (`logging.example.com`).
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Bare type name (`LogEntry`).
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The declared `<service>/<TypeName>` pair.
    pub fn full_type(&self) -> String {
        format!("{}/{}", self.service_name, self.type_name)
    }

    /// Patterns in declaration order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Reconciled parent fields: the union of every pattern's non-final
    /// variables, mapped through the field naming rule, sorted
    /// lexicographically and deduplicated.
    pub fn parent_fields(&self) -> Vec<String> {
        let mut fields = BTreeSet::new();
        for pattern in &self.patterns {
            fields.extend(pattern.parent_fields());
        }
        fields.into_iter().collect()
    }

    /// Reconciled identifier fields: every pattern's final variable mapped
    /// through the field naming rule, sorted and deduplicated.
    ///
    /// Usually a single name; patterns disagreeing on their final variable
    /// all pass through, and each parsed name populates only its own.
    pub fn identifier_fields(&self) -> Vec<String> {
        let mut fields = BTreeSet::new();
        for pattern in &self.patterns {
            fields.insert(pattern.last_field());
        }
        fields.into_iter().collect()
    }

    /// Discriminator constant names declared by more than one pattern.
    ///
    /// Colliding names are emitted as-is; this exists so `check` can warn
    /// about them beforehand.
    pub fn duplicate_parent_type_consts(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for pattern in &self.patterns {
            let name = pattern.parent_type_const();
            if !seen.insert(name.clone()) {
                duplicates.insert(name);
            }
        }
        duplicates.into_iter().collect()
    }

    /// Name of the emitted discriminator enum (`LogEntryParentType`).
    pub fn parent_type_name(&self) -> String {
        format!("{}ParentType", self.type_name)
    }

    /// Name of the emitted parent record (`LogEntryParentRsn`).
    pub fn parent_struct_name(&self) -> String {
        format!("{}ParentRsn", self.type_name)
    }

    /// Name of the emitted resource record (`LogEntryRsn`).
    pub fn struct_name(&self) -> String {
        format!("{}Rsn", self.type_name)
    }

    /// Name of the emitted full-name parse function
    /// (`parse_log_entry_resource_name`).
    pub fn parse_fn_name(&self) -> String {
        snake(&format!("Parse{}ResourceName", self.type_name))
    }

    /// Name of the emitted parent-name parse function
    /// (`parse_log_entry_parent_resource_name`).
    pub fn parse_parent_fn_name(&self) -> String {
        snake(&format!("Parse{}ParentResourceName", self.type_name))
    }
}
