//! Runtime matching: the behavior generated bindings implement, callable
//! directly on an assembled [`Resource`].
//!
//! A [`ResourceMatcher`] compiles every pattern's full and parent matching
//! expression once, then parses and formats names dynamically. The `resolve`
//! subcommand and the derivation tests run on this; emitted code mirrors its
//! semantics with static types.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;

use crate::error::{GenerateError, NameError};
use crate::pattern::Pattern;
use crate::resource::Resource;

/// A parsed parent prefix: discriminator value plus the reconciled parent
/// fields, keyed by derived field name.
///
/// Every reconciled field is always present; fields the matched pattern does
/// not bind stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentName {
    pub parent_type: String,
    pub fields: BTreeMap<String, String>,
}

impl ParentName {
    /// True when every field is empty and the discriminator value is empty.
    ///
    /// A root pattern's discriminator value is the empty string, so a parsed
    /// root parent is still zero.
    pub fn is_zero(&self) -> bool {
        self.parent_type.is_empty() && self.fields.values().all(|value| value.is_empty())
    }
}

/// A parsed full resource name: the parent prefix plus the reconciled
/// identifier fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceName {
    pub parent: ParentName,
    pub fields: BTreeMap<String, String>,
}

impl ResourceName {
    /// True when the parent is zero and every identifier field is empty.
    pub fn is_zero(&self) -> bool {
        self.parent.is_zero() && self.fields.values().all(|value| value.is_empty())
    }
}

/// Compiled matching state for one resource.
///
/// Expressions are compiled once at construction and reused read-only;
/// match attempts always run in pattern declaration order and the first
/// match wins.
#[derive(Debug)]
pub struct ResourceMatcher {
    resource: Resource,
    full: Vec<Regex>,
    parent: Vec<Regex>,
}

impl ResourceMatcher {
    /// Compile all matching expressions for `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Matcher`] if an expression fails to compile.
    /// Literal segments are escaped while building the expressions, so this
    /// is unreachable for patterns that parsed successfully, but the
    /// constructor stays total rather than panicking.
    pub fn new(resource: Resource) -> Result<ResourceMatcher, GenerateError> {
        let mut full = Vec::with_capacity(resource.patterns().len());
        let mut parent = Vec::with_capacity(resource.patterns().len());
        for pattern in resource.patterns() {
            full.push(Self::compile(pattern, &pattern.regex_string())?);
            parent.push(Self::compile(pattern, &pattern.parent_regex_string())?);
        }
        Ok(ResourceMatcher {
            resource,
            full,
            parent,
        })
    }

    fn compile(pattern: &Pattern, source: &str) -> Result<Regex, GenerateError> {
        Regex::new(source).map_err(|err| GenerateError::Matcher {
            pattern: pattern.to_string(),
            source: err,
        })
    }

    /// The resource this matcher was built from.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Zero-valued parent record carrying every reconciled parent field.
    pub fn empty_parent(&self) -> ParentName {
        ParentName {
            parent_type: String::new(),
            fields: self
                .resource
                .parent_fields()
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
        }
    }

    /// Zero-valued resource record carrying every reconciled field.
    pub fn empty_name(&self) -> ResourceName {
        ResourceName {
            parent: self.empty_parent(),
            fields: self
                .resource
                .identifier_fields()
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
        }
    }

    /// Parse a parent prefix against the parent expressions in declaration
    /// order; the first match wins.
    ///
    /// # Errors
    ///
    /// [`NameError::InvalidParentResourceName`] when no pattern matches.
    pub fn parse_parent(&self, name: &str) -> Result<ParentName, NameError> {
        for (pattern, regex) in self.resource.patterns().iter().zip(&self.parent) {
            if let Some(captures) = regex.captures(name) {
                let mut parent = self.empty_parent();
                parent.parent_type = pattern.parent_type_value();
                for (i, field) in pattern.parent_fields().iter().enumerate() {
                    if let Some(value) = captures.get(i + 1) {
                        parent
                            .fields
                            .insert(field.clone(), value.as_str().to_string());
                    }
                }
                return Ok(parent);
            }
        }
        Err(NameError::InvalidParentResourceName {
            type_name: self.resource.type_name().to_string(),
            service_name: self.resource.service_name().to_string(),
        })
    }

    /// Parse a full resource name against the full expressions in
    /// declaration order; the first match wins.
    ///
    /// Leading captures populate the matched pattern's parent fields; the
    /// final capture populates its identifier field.
    ///
    /// # Errors
    ///
    /// [`NameError::InvalidResourceName`] when no pattern matches.
    pub fn parse(&self, name: &str) -> Result<ResourceName, NameError> {
        for (pattern, regex) in self.resource.patterns().iter().zip(&self.full) {
            if let Some(captures) = regex.captures(name) {
                let mut parsed = self.empty_name();
                parsed.parent.parent_type = pattern.parent_type_value();
                let parent_fields = pattern.parent_fields();
                for (i, field) in parent_fields.iter().enumerate() {
                    if let Some(value) = captures.get(i + 1) {
                        parsed
                            .parent
                            .fields
                            .insert(field.clone(), value.as_str().to_string());
                    }
                }
                if let Some(value) = captures.get(parent_fields.len() + 1) {
                    parsed
                        .fields
                        .insert(pattern.last_field(), value.as_str().to_string());
                }
                return Ok(parsed);
            }
        }
        Err(NameError::InvalidResourceName {
            type_name: self.resource.type_name().to_string(),
            service_name: self.resource.service_name().to_string(),
        })
    }

    /// Render a parent record back into its prefix form.
    ///
    /// Branches on the discriminator value; the first pattern declaring that
    /// value wins. An unrecognized value renders the empty string, the
    /// permissive default the whole contract shares.
    pub fn format_parent(&self, parent: &ParentName) -> String {
        for pattern in self.resource.patterns() {
            if pattern.parent_type_value() == parent.parent_type {
                let n = pattern.collection_ids().len();
                return Self::render(
                    &pattern.collection_ids()[..n - 1],
                    &pattern.parent_fields(),
                    &parent.fields,
                );
            }
        }
        String::new()
    }

    /// Render a resource record back into its full name.
    ///
    /// Same discriminator branching as [`Self::format_parent`]; an
    /// unrecognized value renders the empty string.
    pub fn format(&self, name: &ResourceName) -> String {
        for pattern in self.resource.patterns() {
            if pattern.parent_type_value() == name.parent.parent_type {
                let n = pattern.collection_ids().len();
                let mut out = Self::render(
                    &pattern.collection_ids()[..n - 1],
                    &pattern.parent_fields(),
                    &name.parent.fields,
                );
                if !out.is_empty() {
                    out.push('/');
                }
                out.push_str(&pattern.collection_ids()[n - 1]);
                out.push('/');
                if let Some(value) = name.fields.get(&pattern.last_field()) {
                    out.push_str(value);
                }
                return out;
            }
        }
        String::new()
    }

    /// Discriminator constant name for a runtime discriminator value, from
    /// the first pattern declaring it.
    pub fn parent_type_const_for_value(&self, value: &str) -> Option<String> {
        self.resource
            .patterns()
            .iter()
            .find(|pattern| pattern.parent_type_value() == value)
            .map(|pattern| pattern.parent_type_const())
    }

    fn render(
        collection_ids: &[String],
        fields: &[String],
        values: &BTreeMap<String, String>,
    ) -> String {
        let mut out = String::new();
        for (i, (collection_id, field)) in collection_ids.iter().zip(fields).enumerate() {
            if i != 0 {
                out.push('/');
            }
            out.push_str(collection_id);
            out.push('/');
            if let Some(value) = values.get(field) {
                out.push_str(value);
            }
        }
        out
    }
}
