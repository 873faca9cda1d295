// Code generated by rsn-gen v0.3.1. DO NOT EDIT.
// source: example.json
// package: example.logging.v1

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Error returned when a name matches none of a resource's declared
/// patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidResourceName {
    message: String,
}

impl fmt::Display for InvalidResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for InvalidResourceName {}

/// Parent kind discriminator for `logging.example.com/LogEntry` names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogEntryParentType {
    #[default]
    Unspecified,
    ProjectLogEntryParentType,
    OrganizationLogEntryParentType,
    FolderLogEntryParentType,
    BillingAccountLogEntryParentType,
}

impl LogEntryParentType {
    /// The discriminator tag carried by parsed names.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogEntryParentType::Unspecified => "",
            LogEntryParentType::ProjectLogEntryParentType => "project",
            LogEntryParentType::OrganizationLogEntryParentType => "organization",
            LogEntryParentType::FolderLogEntryParentType => "folder",
            LogEntryParentType::BillingAccountLogEntryParentType => "billingAccount",
        }
    }
}

/// Parent of a `logging.example.com/LogEntry` resource name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEntryParentRsn {
    pub billing_account_id: String,
    pub folder_id: String,
    pub organization_id: String,
    pub project_id: String,
    pub parent_type: LogEntryParentType,
}

impl LogEntryParentRsn {
    /// Canonical name for this record's parent type; empty when the
    /// parent type is unspecified.
    pub fn resource_name(&self) -> String {
        match self.parent_type {
            LogEntryParentType::ProjectLogEntryParentType => format!("projects/{}", self.project_id),
            LogEntryParentType::OrganizationLogEntryParentType => format!("organizations/{}", self.organization_id),
            LogEntryParentType::FolderLogEntryParentType => format!("folders/{}", self.folder_id),
            LogEntryParentType::BillingAccountLogEntryParentType => format!("billingAccounts/{}", self.billing_account_id),
            _ => String::new(),
        }
    }

    /// True when every field is empty and the parent type tag is empty.
    pub fn is_zero(&self) -> bool {
        self.billing_account_id.is_empty()
            && self.folder_id.is_empty()
            && self.organization_id.is_empty()
            && self.project_id.is_empty()
            && self.parent_type.as_str().is_empty()
    }
}

static PROJECT_LOG_ENTRY_PARENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^projects/([^/]+)$").unwrap());
static ORGANIZATION_LOG_ENTRY_PARENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^organizations/([^/]+)$").unwrap());
static FOLDER_LOG_ENTRY_PARENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^folders/([^/]+)$").unwrap());
static BILLING_ACCOUNT_LOG_ENTRY_PARENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^billingAccounts/([^/]+)$").unwrap());

/// Parse `name` as the parent of a `logging.example.com/LogEntry` resource name.
///
/// Patterns are tried in declaration order; the first match wins.
pub fn parse_log_entry_parent_resource_name(name: &str) -> Result<LogEntryParentRsn, InvalidResourceName> {
    if let Some(captures) = PROJECT_LOG_ENTRY_PARENT_PATTERN.captures(name) {
        return Ok(LogEntryParentRsn {
            project_id: captures[1].to_string(),
            parent_type: LogEntryParentType::ProjectLogEntryParentType,
            ..Default::default()
        });
    }
    if let Some(captures) = ORGANIZATION_LOG_ENTRY_PARENT_PATTERN.captures(name) {
        return Ok(LogEntryParentRsn {
            organization_id: captures[1].to_string(),
            parent_type: LogEntryParentType::OrganizationLogEntryParentType,
            ..Default::default()
        });
    }
    if let Some(captures) = FOLDER_LOG_ENTRY_PARENT_PATTERN.captures(name) {
        return Ok(LogEntryParentRsn {
            folder_id: captures[1].to_string(),
            parent_type: LogEntryParentType::FolderLogEntryParentType,
            ..Default::default()
        });
    }
    if let Some(captures) = BILLING_ACCOUNT_LOG_ENTRY_PARENT_PATTERN.captures(name) {
        return Ok(LogEntryParentRsn {
            billing_account_id: captures[1].to_string(),
            parent_type: LogEntryParentType::BillingAccountLogEntryParentType,
            ..Default::default()
        });
    }
    Err(InvalidResourceName {
        message: "invalid parent resource name for resource type 'LogEntry' in service 'logging.example.com'"
            .to_string(),
    })
}

/// A `logging.example.com/LogEntry` resource name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEntryRsn {
    pub parent: LogEntryParentRsn,
    pub log_entry_id: String,
}

impl LogEntryRsn {
    /// Canonical name in the shape of the pattern matching the parent
    /// type; empty when the parent type is unspecified.
    pub fn resource_name(&self) -> String {
        match self.parent.parent_type {
            LogEntryParentType::ProjectLogEntryParentType => format!("projects/{}/logEntries/{}", self.parent.project_id, self.log_entry_id),
            LogEntryParentType::OrganizationLogEntryParentType => format!("organizations/{}/logEntries/{}", self.parent.organization_id, self.log_entry_id),
            LogEntryParentType::FolderLogEntryParentType => format!("folders/{}/logEntries/{}", self.parent.folder_id, self.log_entry_id),
            LogEntryParentType::BillingAccountLogEntryParentType => format!("billingAccounts/{}/logEntries/{}", self.parent.billing_account_id, self.log_entry_id),
            _ => String::new(),
        }
    }

    /// True when the parent is zero and every identifier is empty.
    pub fn is_zero(&self) -> bool {
        self.parent.is_zero()
            && self.log_entry_id.is_empty()
    }
}

static PROJECT_LOG_ENTRY_RSN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^projects/([^/]+)/logEntries/([^/]+)$").unwrap());
static ORGANIZATION_LOG_ENTRY_RSN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^organizations/([^/]+)/logEntries/([^/]+)$").unwrap());
static FOLDER_LOG_ENTRY_RSN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^folders/([^/]+)/logEntries/([^/]+)$").unwrap());
static BILLING_ACCOUNT_LOG_ENTRY_RSN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^billingAccounts/([^/]+)/logEntries/([^/]+)$").unwrap());

/// Parse `name` as a `logging.example.com/LogEntry` resource name.
///
/// Patterns are tried in declaration order; the first match wins.
pub fn parse_log_entry_resource_name(name: &str) -> Result<LogEntryRsn, InvalidResourceName> {
    if let Some(captures) = PROJECT_LOG_ENTRY_RSN_PATTERN.captures(name) {
        return Ok(LogEntryRsn {
            parent: LogEntryParentRsn {
                project_id: captures[1].to_string(),
                parent_type: LogEntryParentType::ProjectLogEntryParentType,
                ..Default::default()
            },
            log_entry_id: captures[2].to_string(),
        });
    }
    if let Some(captures) = ORGANIZATION_LOG_ENTRY_RSN_PATTERN.captures(name) {
        return Ok(LogEntryRsn {
            parent: LogEntryParentRsn {
                organization_id: captures[1].to_string(),
                parent_type: LogEntryParentType::OrganizationLogEntryParentType,
                ..Default::default()
            },
            log_entry_id: captures[2].to_string(),
        });
    }
    if let Some(captures) = FOLDER_LOG_ENTRY_RSN_PATTERN.captures(name) {
        return Ok(LogEntryRsn {
            parent: LogEntryParentRsn {
                folder_id: captures[1].to_string(),
                parent_type: LogEntryParentType::FolderLogEntryParentType,
                ..Default::default()
            },
            log_entry_id: captures[2].to_string(),
        });
    }
    if let Some(captures) = BILLING_ACCOUNT_LOG_ENTRY_RSN_PATTERN.captures(name) {
        return Ok(LogEntryRsn {
            parent: LogEntryParentRsn {
                billing_account_id: captures[1].to_string(),
                parent_type: LogEntryParentType::BillingAccountLogEntryParentType,
                ..Default::default()
            },
            log_entry_id: captures[2].to_string(),
        });
    }
    Err(InvalidResourceName {
        message: "invalid resource name for resource type 'LogEntry' in service 'logging.example.com'"
            .to_string(),
    })
}

/// Parent kind discriminator for `storage.example.com/Bucket` names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BucketParentType {
    #[default]
    Unspecified,
    ProjectBucketParentType,
    BucketRootParentType,
}

impl BucketParentType {
    /// The discriminator tag carried by parsed names.
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketParentType::Unspecified => "",
            BucketParentType::ProjectBucketParentType => "project",
            BucketParentType::BucketRootParentType => "",
        }
    }
}

/// Parent of a `storage.example.com/Bucket` resource name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketParentRsn {
    pub project_id: String,
    pub parent_type: BucketParentType,
}

impl BucketParentRsn {
    /// Canonical name for this record's parent type; empty when the
    /// parent type is unspecified.
    pub fn resource_name(&self) -> String {
        match self.parent_type {
            BucketParentType::ProjectBucketParentType => format!("projects/{}", self.project_id),
            BucketParentType::BucketRootParentType => String::new(),
            _ => String::new(),
        }
    }

    /// True when every field is empty and the parent type tag is empty.
    pub fn is_zero(&self) -> bool {
        self.project_id.is_empty()
            && self.parent_type.as_str().is_empty()
    }
}

static PROJECT_BUCKET_PARENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^projects/([^/]+)$").unwrap());
static BUCKET_BUCKET_PARENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^$").unwrap());

/// Parse `name` as the parent of a `storage.example.com/Bucket` resource name.
///
/// Patterns are tried in declaration order; the first match wins.
pub fn parse_bucket_parent_resource_name(name: &str) -> Result<BucketParentRsn, InvalidResourceName> {
    if let Some(captures) = PROJECT_BUCKET_PARENT_PATTERN.captures(name) {
        return Ok(BucketParentRsn {
            project_id: captures[1].to_string(),
            parent_type: BucketParentType::ProjectBucketParentType,
        });
    }
    if BUCKET_BUCKET_PARENT_PATTERN.is_match(name) {
        return Ok(BucketParentRsn {
            parent_type: BucketParentType::BucketRootParentType,
            ..Default::default()
        });
    }
    Err(InvalidResourceName {
        message: "invalid parent resource name for resource type 'Bucket' in service 'storage.example.com'"
            .to_string(),
    })
}

/// A `storage.example.com/Bucket` resource name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketRsn {
    pub parent: BucketParentRsn,
    pub bucket_id: String,
}

impl BucketRsn {
    /// Canonical name in the shape of the pattern matching the parent
    /// type; empty when the parent type is unspecified.
    pub fn resource_name(&self) -> String {
        match self.parent.parent_type {
            BucketParentType::ProjectBucketParentType => format!("projects/{}/buckets/{}", self.parent.project_id, self.bucket_id),
            BucketParentType::BucketRootParentType => format!("buckets/{}", self.bucket_id),
            _ => String::new(),
        }
    }

    /// True when the parent is zero and every identifier is empty.
    pub fn is_zero(&self) -> bool {
        self.parent.is_zero()
            && self.bucket_id.is_empty()
    }
}

static PROJECT_BUCKET_RSN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^projects/([^/]+)/buckets/([^/]+)$").unwrap());
static BUCKET_RSN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^buckets/([^/]+)$").unwrap());

/// Parse `name` as a `storage.example.com/Bucket` resource name.
///
/// Patterns are tried in declaration order; the first match wins.
pub fn parse_bucket_resource_name(name: &str) -> Result<BucketRsn, InvalidResourceName> {
    if let Some(captures) = PROJECT_BUCKET_RSN_PATTERN.captures(name) {
        return Ok(BucketRsn {
            parent: BucketParentRsn {
                project_id: captures[1].to_string(),
                parent_type: BucketParentType::ProjectBucketParentType,
            },
            bucket_id: captures[2].to_string(),
        });
    }
    if let Some(captures) = BUCKET_RSN_PATTERN.captures(name) {
        return Ok(BucketRsn {
            parent: BucketParentRsn {
                parent_type: BucketParentType::BucketRootParentType,
                ..Default::default()
            },
            bucket_id: captures[1].to_string(),
        });
    }
    Err(InvalidResourceName {
        message: "invalid resource name for resource type 'Bucket' in service 'storage.example.com'"
            .to_string(),
    })
}
