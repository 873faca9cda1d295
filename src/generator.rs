//! Rust source emission for accepted resources.
//!
//! Produces the text of a `<stem>.rsn.rs` module: per resource a parent-kind
//! enum, parent and resource records with `resource_name`/`is_zero`, compiled
//! pattern statics, and parse functions, all mirroring the runtime contract
//! of [`crate::ResourceMatcher`]. Emission is line-oriented string building;
//! the output is plain source text with no further formatting pass.

use std::path::Path;

use crate::pattern::snake;
use crate::resource::Resource;

/// Emitted file name for a schema input: the input's stem plus `.rsn.rs`
/// (`example.json` -> `example.rsn.rs`).
pub fn generated_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    format!("{stem}.rsn.rs")
}

/// Render the generated module for a file's accepted resources.
///
/// Returns `None` when `resources` is empty: a file that declares nothing
/// emits nothing. `source` is echoed into the banner; `package` is echoed
/// only when non-empty.
pub fn generate_module(resources: &[Resource], source: &str, package: &str) -> Option<String> {
    if resources.is_empty() {
        return None;
    }

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(
        "// Code generated by rsn-gen v{}. DO NOT EDIT.",
        env!("CARGO_PKG_VERSION")
    ));
    lines.push(format!("// source: {source}"));
    if !package.is_empty() {
        lines.push(format!("// package: {package}"));
    }
    lines.push(String::new());
    lines.push("use std::fmt;".to_string());
    lines.push("use std::sync::LazyLock;".to_string());
    lines.push(String::new());
    lines.push("use regex::Regex;".to_string());
    lines.push(String::new());
    emit_error_struct(&mut lines);

    for resource in resources {
        lines.push(String::new());
        emit_parent_type(&mut lines, resource);
        lines.push(String::new());
        emit_parent_struct(&mut lines, resource);
        lines.push(String::new());
        emit_parent_impl(&mut lines, resource);
        lines.push(String::new());
        emit_parent_statics(&mut lines, resource);
        lines.push(String::new());
        emit_parse_parent(&mut lines, resource);
        lines.push(String::new());
        emit_resource_struct(&mut lines, resource);
        lines.push(String::new());
        emit_resource_impl(&mut lines, resource);
        lines.push(String::new());
        emit_full_statics(&mut lines, resource);
        lines.push(String::new());
        emit_parse_full(&mut lines, resource);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Some(out)
}

fn emit_error_struct(lines: &mut Vec<String>) {
    lines.push("/// Error returned when a name matches none of a resource's declared".to_string());
    lines.push("/// patterns.".to_string());
    lines.push("#[derive(Debug, Clone, PartialEq, Eq)]".to_string());
    lines.push("pub struct InvalidResourceName {".to_string());
    lines.push("    message: String,".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("impl fmt::Display for InvalidResourceName {".to_string());
    lines.push("    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {".to_string());
    lines.push("        f.write_str(&self.message)".to_string());
    lines.push("    }".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("impl std::error::Error for InvalidResourceName {}".to_string());
}

fn emit_parent_type(lines: &mut Vec<String>, resource: &Resource) {
    let enum_name = resource.parent_type_name();
    lines.push(format!(
        "/// Parent kind discriminator for `{}` names.",
        resource.full_type()
    ));
    lines.push("#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]".to_string());
    lines.push(format!("pub enum {enum_name} {{"));
    lines.push("    #[default]".to_string());
    lines.push("    Unspecified,".to_string());
    for pattern in resource.patterns() {
        lines.push(format!("    {},", pattern.parent_type_const()));
    }
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push(format!("impl {enum_name} {{"));
    lines.push("    /// The discriminator tag carried by parsed names.".to_string());
    lines.push("    pub fn as_str(&self) -> &'static str {".to_string());
    lines.push("        match self {".to_string());
    lines.push(format!("            {enum_name}::Unspecified => \"\","));
    for pattern in resource.patterns() {
        lines.push(format!(
            "            {enum_name}::{} => \"{}\",",
            pattern.parent_type_const(),
            pattern.parent_type_value()
        ));
    }
    lines.push("        }".to_string());
    lines.push("    }".to_string());
    lines.push("}".to_string());
}

fn emit_parent_struct(lines: &mut Vec<String>, resource: &Resource) {
    lines.push(format!(
        "/// Parent of a `{}` resource name.",
        resource.full_type()
    ));
    lines.push("#[derive(Debug, Clone, Default, PartialEq, Eq)]".to_string());
    lines.push(format!("pub struct {} {{", resource.parent_struct_name()));
    for field in resource.parent_fields() {
        lines.push(format!("    pub {}: String,", snake(&field)));
    }
    lines.push(format!(
        "    pub parent_type: {},",
        resource.parent_type_name()
    ));
    lines.push("}".to_string());
}

fn emit_parent_impl(lines: &mut Vec<String>, resource: &Resource) {
    let enum_name = resource.parent_type_name();
    lines.push(format!("impl {} {{", resource.parent_struct_name()));
    lines.push("    /// Canonical name for this record's parent type; empty when the".to_string());
    lines.push("    /// parent type is unspecified.".to_string());
    lines.push("    pub fn resource_name(&self) -> String {".to_string());
    lines.push("        match self.parent_type {".to_string());
    for pattern in resource.patterns() {
        let arm = format!("            {enum_name}::{} => ", pattern.parent_type_const());
        if pattern.is_root() {
            lines.push(format!("{arm}String::new(),"));
        } else {
            let args = pattern
                .parent_fields()
                .iter()
                .map(|field| format!("self.{}", snake(field)))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!(
                "{arm}format!(\"{}\", {}),",
                pattern.parent_format_string(),
                args
            ));
        }
    }
    lines.push("            _ => String::new(),".to_string());
    lines.push("        }".to_string());
    lines.push("    }".to_string());
    lines.push(String::new());
    lines.push("    /// True when every field is empty and the parent type tag is empty.".to_string());
    lines.push("    pub fn is_zero(&self) -> bool {".to_string());
    let mut checks: Vec<String> = resource
        .parent_fields()
        .iter()
        .map(|field| format!("self.{}.is_empty()", snake(field)))
        .collect();
    checks.push("self.parent_type.as_str().is_empty()".to_string());
    emit_conjunction(lines, &checks);
    lines.push("    }".to_string());
    lines.push("}".to_string());
}

fn emit_parent_statics(lines: &mut Vec<String>, resource: &Resource) {
    for pattern in resource.patterns() {
        lines.push(format!(
            "static {}: LazyLock<Regex> =",
            pattern.parent_matcher_static_name(resource.type_name())
        ));
        lines.push(format!(
            "    LazyLock::new(|| Regex::new(r\"{}\").unwrap());",
            pattern.parent_regex_string()
        ));
    }
}

fn emit_parse_parent(lines: &mut Vec<String>, resource: &Resource) {
    let struct_name = resource.parent_struct_name();
    let enum_name = resource.parent_type_name();
    let union_len = resource.parent_fields().len();
    lines.push(format!(
        "/// Parse `name` as the parent of a `{}` resource name.",
        resource.full_type()
    ));
    lines.push("///".to_string());
    lines.push("/// Patterns are tried in declaration order; the first match wins.".to_string());
    lines.push(format!(
        "pub fn {}(name: &str) -> Result<{struct_name}, InvalidResourceName> {{",
        resource.parse_parent_fn_name()
    ));
    for pattern in resource.patterns() {
        let static_name = pattern.parent_matcher_static_name(resource.type_name());
        let fields = pattern.parent_fields();
        if fields.is_empty() {
            lines.push(format!("    if {static_name}.is_match(name) {{"));
            lines.push(format!("        return Ok({struct_name} {{"));
            lines.push(format!(
                "            parent_type: {enum_name}::{},",
                pattern.parent_type_const()
            ));
            if union_len > 0 {
                lines.push("            ..Default::default()".to_string());
            }
            lines.push("        });".to_string());
            lines.push("    }".to_string());
        } else {
            lines.push(format!(
                "    if let Some(captures) = {static_name}.captures(name) {{"
            ));
            lines.push(format!("        return Ok({struct_name} {{"));
            for (i, field) in fields.iter().enumerate() {
                lines.push(format!(
                    "            {}: captures[{}].to_string(),",
                    snake(field),
                    i + 1
                ));
            }
            lines.push(format!(
                "            parent_type: {enum_name}::{},",
                pattern.parent_type_const()
            ));
            if fields.len() < union_len {
                lines.push("            ..Default::default()".to_string());
            }
            lines.push("        });".to_string());
            lines.push("    }".to_string());
        }
    }
    lines.push("    Err(InvalidResourceName {".to_string());
    lines.push(format!(
        "        message: \"invalid parent resource name for resource type '{}' in service '{}'\"",
        resource.type_name(),
        resource.service_name()
    ));
    lines.push("            .to_string(),".to_string());
    lines.push("    })".to_string());
    lines.push("}".to_string());
}

fn emit_resource_struct(lines: &mut Vec<String>, resource: &Resource) {
    lines.push(format!(
        "/// A `{}` resource name.",
        resource.full_type()
    ));
    lines.push("#[derive(Debug, Clone, Default, PartialEq, Eq)]".to_string());
    lines.push(format!("pub struct {} {{", resource.struct_name()));
    lines.push(format!(
        "    pub parent: {},",
        resource.parent_struct_name()
    ));
    for field in resource.identifier_fields() {
        lines.push(format!("    pub {}: String,", snake(&field)));
    }
    lines.push("}".to_string());
}

fn emit_resource_impl(lines: &mut Vec<String>, resource: &Resource) {
    let enum_name = resource.parent_type_name();
    lines.push(format!("impl {} {{", resource.struct_name()));
    lines.push("    /// Canonical name in the shape of the pattern matching the parent".to_string());
    lines.push("    /// type; empty when the parent type is unspecified.".to_string());
    lines.push("    pub fn resource_name(&self) -> String {".to_string());
    lines.push("        match self.parent.parent_type {".to_string());
    for pattern in resource.patterns() {
        let mut args: Vec<String> = pattern
            .parent_fields()
            .iter()
            .map(|field| format!("self.parent.{}", snake(field)))
            .collect();
        args.push(format!("self.{}", snake(&pattern.last_field())));
        lines.push(format!(
            "            {enum_name}::{} => format!(\"{}\", {}),",
            pattern.parent_type_const(),
            pattern.format_string(),
            args.join(", ")
        ));
    }
    lines.push("            _ => String::new(),".to_string());
    lines.push("        }".to_string());
    lines.push("    }".to_string());
    lines.push(String::new());
    lines.push("    /// True when the parent is zero and every identifier is empty.".to_string());
    lines.push("    pub fn is_zero(&self) -> bool {".to_string());
    let mut checks = vec!["self.parent.is_zero()".to_string()];
    checks.extend(
        resource
            .identifier_fields()
            .iter()
            .map(|field| format!("self.{}.is_empty()", snake(field))),
    );
    emit_conjunction(lines, &checks);
    lines.push("    }".to_string());
    lines.push("}".to_string());
}

fn emit_full_statics(lines: &mut Vec<String>, resource: &Resource) {
    for pattern in resource.patterns() {
        lines.push(format!(
            "static {}: LazyLock<Regex> =",
            pattern.matcher_static_name()
        ));
        lines.push(format!(
            "    LazyLock::new(|| Regex::new(r\"{}\").unwrap());",
            pattern.regex_string()
        ));
    }
}

fn emit_parse_full(lines: &mut Vec<String>, resource: &Resource) {
    let struct_name = resource.struct_name();
    let parent_struct = resource.parent_struct_name();
    let enum_name = resource.parent_type_name();
    let union_len = resource.parent_fields().len();
    let multiple_identifiers = resource.identifier_fields().len() > 1;
    lines.push(format!(
        "/// Parse `name` as a `{}` resource name.",
        resource.full_type()
    ));
    lines.push("///".to_string());
    lines.push("/// Patterns are tried in declaration order; the first match wins.".to_string());
    lines.push(format!(
        "pub fn {}(name: &str) -> Result<{struct_name}, InvalidResourceName> {{",
        resource.parse_fn_name()
    ));
    for pattern in resource.patterns() {
        let static_name = pattern.matcher_static_name();
        let fields = pattern.parent_fields();
        lines.push(format!(
            "    if let Some(captures) = {static_name}.captures(name) {{"
        ));
        lines.push(format!("        return Ok({struct_name} {{"));
        lines.push(format!("            parent: {parent_struct} {{"));
        for (i, field) in fields.iter().enumerate() {
            lines.push(format!(
                "                {}: captures[{}].to_string(),",
                snake(field),
                i + 1
            ));
        }
        lines.push(format!(
            "                parent_type: {enum_name}::{},",
            pattern.parent_type_const()
        ));
        if fields.len() < union_len {
            lines.push("                ..Default::default()".to_string());
        }
        lines.push("            },".to_string());
        lines.push(format!(
            "            {}: captures[{}].to_string(),",
            snake(&pattern.last_field()),
            fields.len() + 1
        ));
        if multiple_identifiers {
            lines.push("            ..Default::default()".to_string());
        }
        lines.push("        });".to_string());
        lines.push("    }".to_string());
    }
    lines.push("    Err(InvalidResourceName {".to_string());
    lines.push(format!(
        "        message: \"invalid resource name for resource type '{}' in service '{}'\"",
        resource.type_name(),
        resource.service_name()
    ));
    lines.push("            .to_string(),".to_string());
    lines.push("    })".to_string());
    lines.push("}".to_string());
}

fn emit_conjunction(lines: &mut Vec<String>, checks: &[String]) {
    for (i, check) in checks.iter().enumerate() {
        if i == 0 {
            lines.push(format!("        {check}"));
        } else {
            lines.push(format!("            && {check}"));
        }
    }
}
