//! Pattern parsing and per-pattern derivations.
//!
//! A pattern is one accepted shape for a resource's canonical name, e.g.
//! `projects/{project}/logEntries/{log_entry}`: alternating collection ids
//! and resource variables. Everything derived from a single pattern lives
//! here: discriminator names and values, field names, matching expressions,
//! and format templates.

use std::fmt;

use convert_case::{Case, Casing};

use crate::error::PatternError;

/// Capitalized camel case (`log_entry` -> `LogEntry`).
pub(crate) fn pascal(s: &str) -> String {
    s.to_case(Case::UpperCamel)
}

/// Lower camel case (`log_entry` -> `logEntry`).
pub(crate) fn camel(s: &str) -> String {
    s.to_case(Case::Camel)
}

/// Upper snake case (`logEntryRsnPattern` -> `LOG_ENTRY_RSN_PATTERN`).
pub(crate) fn constant(s: &str) -> String {
    s.to_case(Case::UpperSnake)
}

/// Lower snake case (`ParseLogEntryResourceName` -> `parse_log_entry_resource_name`).
pub(crate) fn snake(s: &str) -> String {
    s.to_case(Case::Snake)
}

/// Field name for a resource variable: capitalized camel case plus an `Id`
/// suffix (`log_entry` -> `LogEntryId`).
pub(crate) fn field_name(var: &str) -> String {
    format!("{}Id", pascal(var))
}

/// One accepted shape for a resource's canonical name.
///
/// Holds the ordered collection ids and the positionally paired resource
/// variables. Immutable once parsed; owned by its [`crate::Resource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    collection_ids: Vec<String>,
    resource_vars: Vec<String>,
}

impl Pattern {
    /// Parse a raw pattern string such as `projects/{project}/logEntries/{log_entry}`.
    ///
    /// Segments are split on `/`; even-indexed segments are collection ids
    /// and odd-indexed segments are variables with the `{`/`}` delimiters
    /// trimmed. Variable names are taken verbatim beyond that.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Malformed`] when the segment count is odd,
    /// i.e. collection ids and variables do not alternate in equal number.
    pub fn parse(raw: &str) -> Result<Pattern, PatternError> {
        let segments: Vec<&str> = raw.split('/').collect();
        if segments.len() % 2 != 0 {
            return Err(PatternError::Malformed);
        }

        let mut collection_ids = Vec::with_capacity(segments.len() / 2);
        let mut resource_vars = Vec::with_capacity(segments.len() / 2);
        for pair in segments.chunks(2) {
            collection_ids.push(pair[0].to_string());
            resource_vars.push(pair[1].trim_matches(['{', '}']).to_string());
        }

        Ok(Pattern {
            collection_ids,
            resource_vars,
        })
    }

    /// Ordered collection ids (`projects`, `logEntries`, ...).
    pub fn collection_ids(&self) -> &[String] {
        &self.collection_ids
    }

    /// Ordered resource variables, positionally paired with the collection ids.
    pub fn resource_vars(&self) -> &[String] {
        &self.resource_vars
    }

    /// True for single-variable patterns, which have no parent prefix.
    pub fn is_root(&self) -> bool {
        self.resource_vars.len() == 1
    }

    /// Field names for every variable except the last, in pattern order.
    ///
    /// These are the fields the pattern contributes to the shared parent
    /// record, and the order in which its parent capture groups bind.
    pub fn parent_fields(&self) -> Vec<String> {
        self.resource_vars[..self.resource_vars.len() - 1]
            .iter()
            .map(|var| field_name(var))
            .collect()
    }

    /// Field name for the trailing identifier variable.
    pub fn last_field(&self) -> String {
        field_name(&self.resource_vars[self.resource_vars.len() - 1])
    }

    /// Discriminator constant name for this pattern.
    ///
    /// Root patterns yield `<Var>RootParentType`; otherwise every variable is
    /// capital-camel-cased and concatenated, followed by `ParentType`.
    pub fn parent_type_const(&self) -> String {
        if self.is_root() {
            return format!("{}RootParentType", pascal(&self.resource_vars[0]));
        }
        let mut name = String::new();
        for var in &self.resource_vars {
            name.push_str(&pascal(var));
        }
        name.push_str("ParentType");
        name
    }

    /// Discriminator string value stored in the type tag at runtime.
    ///
    /// Empty for root patterns. Otherwise the lower-camel first variable
    /// followed by the capital-camel interior variables; the last variable
    /// never contributes, since it identifies the record rather than the
    /// kind of parent.
    pub fn parent_type_value(&self) -> String {
        if self.is_root() {
            return String::new();
        }
        let mut value = camel(&self.resource_vars[0]);
        for var in &self.resource_vars[1..self.resource_vars.len() - 1] {
            value.push_str(&pascal(var));
        }
        value
    }

    /// Anchored matching expression accepting exactly this pattern's shape.
    ///
    /// Each collection id (regex-escaped) is followed by a `([^/]+)` capture,
    /// so captured values can never contain the `/` separator.
    pub fn regex_string(&self) -> String {
        Self::regex_for(&self.collection_ids)
    }

    /// Matching expression for the parent prefix (all but the last pair).
    ///
    /// Root patterns yield `^$`, matching only the empty string.
    pub fn parent_regex_string(&self) -> String {
        Self::regex_for(&self.collection_ids[..self.collection_ids.len() - 1])
    }

    fn regex_for(collection_ids: &[String]) -> String {
        let mut source = String::from("^");
        for (i, collection_id) in collection_ids.iter().enumerate() {
            if i != 0 {
                source.push('/');
            }
            source.push_str(&regex::escape(collection_id));
            source.push_str("/([^/]+)");
        }
        source.push('$');
        source
    }

    /// Positional format template for the full name (`projects/{}/logEntries/{}`).
    ///
    /// Substitution slots appear in pattern order, the same order the
    /// matching expression captures in, so format and parse round-trip for
    /// any value set free of `/` characters.
    pub fn format_string(&self) -> String {
        Self::format_for(&self.collection_ids)
    }

    /// Format template for the parent prefix; empty for root patterns.
    pub fn parent_format_string(&self) -> String {
        Self::format_for(&self.collection_ids[..self.collection_ids.len() - 1])
    }

    fn format_for(collection_ids: &[String]) -> String {
        let mut template = String::new();
        for (i, collection_id) in collection_ids.iter().enumerate() {
            if i != 0 {
                template.push('/');
            }
            template.push_str(collection_id);
            template.push_str("/{}");
        }
        template
    }

    /// Name of the emitted static holding this pattern's compiled matcher.
    pub fn matcher_static_name(&self) -> String {
        let mut name = String::new();
        for (i, var) in self.resource_vars.iter().enumerate() {
            if i == 0 {
                name.push_str(&camel(var));
            } else {
                name.push_str(&pascal(var));
            }
        }
        name.push_str("RsnPattern");
        constant(&name)
    }

    /// Name of the emitted static holding the parent matcher.
    ///
    /// Includes the resource type name so that patterns of different
    /// resources in one file cannot collide on their parent statics.
    pub fn parent_matcher_static_name(&self, type_name: &str) -> String {
        let mut name = camel(&self.resource_vars[0]);
        if self.resource_vars.len() > 1 {
            for var in &self.resource_vars[1..self.resource_vars.len() - 1] {
                name.push_str(&pascal(var));
            }
        }
        name.push_str(type_name);
        name.push_str("ParentPattern");
        constant(&name)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (collection_id, var)) in self
            .collection_ids
            .iter()
            .zip(&self.resource_vars)
            .enumerate()
        {
            if i != 0 {
                f.write_str("/")?;
            }
            write!(f, "{}/{{{}}}", collection_id, var)?;
        }
        Ok(())
    }
}
