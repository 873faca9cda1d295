//! Static checking of schema descriptor files.
//!
//! Surfaces the problems generation would otherwise only mention in
//! passing (or silently accept):
//! - E001: the file is unreadable or not valid JSON
//! - W101: a descriptor payload would be skipped during generation
//! - W102: a resource's patterns disagree on the identifier field
//! - W103: two patterns of one resource collide on a discriminator name

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::loader::{load_schema_file, located_descriptors};
use crate::resource::Resource;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single diagnostic message from checking.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    pub file: PathBuf,
    /// JSON location of the issue (e.g., "/resourceDefinition/2")
    pub path: String,
    pub message: String,
}

/// Result of checking a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub file: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Status of a checked file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Ok,
    Error,
    Warning,
}

/// Result of checking a directory or set of files.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub path: PathBuf,
    pub files_checked: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub warnings: usize,
    pub results: Vec<FileResult>,
}

impl CheckResult {
    /// Returns true if all files passed (no errors).
    pub fn is_ok(&self) -> bool {
        self.errors == 0
    }
}

/// Check a file or directory.
///
/// If path is a directory, recursively finds all .json files.
/// If `strict` is true, warnings are treated as errors.
/// Returns aggregated results for all files.
pub fn check(path: &Path, strict: bool) -> CheckResult {
    let files = collect_schema_files(path);
    let mut results = Vec::new();
    let mut total_errors = 0;
    let mut total_warnings = 0;

    for file in &files {
        let file_result = check_file(file, path);
        total_errors += file_result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        total_warnings += file_result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        results.push(file_result);
    }

    let failed = results
        .iter()
        .filter(|r| {
            if strict {
                r.status != FileStatus::Ok
            } else {
                r.status == FileStatus::Error
            }
        })
        .count();

    CheckResult {
        path: path.to_path_buf(),
        files_checked: files.len(),
        passed: files.len() - failed,
        failed,
        errors: total_errors,
        warnings: total_warnings,
        results,
    }
}

/// Check a single schema file.
pub fn check_file(file: &Path, base_path: &Path) -> FileResult {
    let mut diagnostics = Vec::new();

    // Loadable at all? (existence, readability, JSON syntax)
    let schema = match load_schema_file(file) {
        Ok(schema) => schema,
        Err(error) => {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                code: "E001".to_string(),
                file: file.to_path_buf(),
                path: "/".to_string(),
                message: error.to_string(),
            });
            return FileResult {
                file: file.strip_prefix(base_path).unwrap_or(file).to_path_buf(),
                status: FileStatus::Error,
                diagnostics,
            };
        }
    };

    for (location, descriptor) in located_descriptors(&schema) {
        match Resource::from_descriptor(descriptor) {
            Err(error) => diagnostics.push(Diagnostic {
                severity: Severity::Warning,
                code: "W101".to_string(),
                file: file.to_path_buf(),
                path: location,
                message: format!("descriptor skipped during generation: {error}"),
            }),
            Ok(resource) => {
                let identifiers = resource.identifier_fields();
                if identifiers.len() > 1 {
                    diagnostics.push(Diagnostic {
                        severity: Severity::Warning,
                        code: "W102".to_string(),
                        file: file.to_path_buf(),
                        path: location.clone(),
                        message: format!(
                            "patterns of '{}' disagree on the identifier field: {}",
                            resource.full_type(),
                            identifiers.join(", ")
                        ),
                    });
                }
                for name in resource.duplicate_parent_type_consts() {
                    diagnostics.push(Diagnostic {
                        severity: Severity::Warning,
                        code: "W103".to_string(),
                        file: file.to_path_buf(),
                        path: location.clone(),
                        message: format!(
                            "patterns of '{}' collide on discriminator '{}'",
                            resource.full_type(),
                            name
                        ),
                    });
                }
            }
        }
    }

    let has_errors = diagnostics.iter().any(|d| d.severity == Severity::Error);
    let has_warnings = diagnostics.iter().any(|d| d.severity == Severity::Warning);

    let status = if has_errors {
        FileStatus::Error
    } else if has_warnings {
        FileStatus::Warning
    } else {
        FileStatus::Ok
    };

    FileResult {
        file: file.strip_prefix(base_path).unwrap_or(file).to_path_buf(),
        status,
        diagnostics,
    }
}

/// Collect all .json files in a path (file or directory).
fn collect_schema_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            return vec![path.to_path_buf()];
        }
        return vec![];
    }

    let mut files = Vec::new();
    collect_files_recursive(path, &mut files);
    files.sort();
    files
}

fn collect_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files_recursive(&path, files);
        } else if path.extension().map(|e| e == "json").unwrap_or(false) {
            files.push(path);
        }
    }
}
