//! Error types for pattern parsing, resource assembly, and generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors parsing a raw pattern string into segments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("the pattern does not have an equal number of collection ids and resource variables")]
    Malformed,
}

/// Errors assembling a `Resource` from an annotation payload.
///
/// A descriptor failure rejects that one payload only; the discovery layer
/// downgrades it to a diagnostic and keeps processing sibling payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("resource descriptor should have a type")]
    MissingType,

    #[error("resource descriptor should have at least 1 pattern")]
    MissingPattern,

    #[error("invalid resource type {type_name}")]
    InvalidTypeFormat { type_name: String },

    #[error("invalid pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
}

/// Runtime failures matching a candidate string against a resource's patterns.
///
/// Produced by [`crate::ResourceMatcher`] (and mirrored by generated code)
/// when no declared pattern matches. Carries the resource type and owning
/// service for diagnostics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("invalid parent resource name for resource type '{type_name}' in service '{service_name}'")]
    InvalidParentResourceName {
        type_name: String,
        service_name: String,
    },

    #[error("invalid resource name for resource type '{type_name}' in service '{service_name}'")]
    InvalidResourceName {
        type_name: String,
        service_name: String,
    },
}

/// Errors from the generation pipeline: loading schema files, compiling
/// matchers, and writing artifacts.
#[derive(Debug, Error)]
pub enum GenerateError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Input errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to compile matching expression for pattern {pattern}: {source}")]
    Matcher {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl GenerateError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenerateError::FileNotFound { .. }
            | GenerateError::Read { .. }
            | GenerateError::Write { .. } => 3,
            GenerateError::InvalidJson { .. } | GenerateError::Matcher { .. } => 2,
        }
    }
}
