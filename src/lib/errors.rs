use std::path::PathBuf;

use config::ConfigError as ConfigLoaderError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file {path} does not exist")]
    NotFound { path: PathBuf },
    /// Field failed validation.
    #[error("Configuration {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures while turning a report into output text.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to serialize report as JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Notice(#[from] NoticeBuilderError),
}

/// Static user-facing notice metadata.
#[derive(Debug, Clone, Serialize)]
pub struct NoticeDescriptor {
    /// Stable machine-readable code.
    pub code: &'static str,
    /// User-facing message.
    pub message: &'static str,
    /// Recommended remediation.
    pub remediation: &'static str,
}

impl NoticeDescriptor {
    pub const fn new(code: &'static str, message: &'static str, remediation: &'static str) -> Self {
        Self {
            code,
            message,
            remediation,
        }
    }

    pub fn builder(&self) -> NoticeBuilder<'_> {
        NoticeBuilder::new(self)
    }
}

/// A notice bound to the entry it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub code: &'static str,
    pub message: &'static str,
    pub remediation: &'static str,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Builder for [`Notice`] that fails if required fields are missing.
pub struct NoticeBuilder<'a> {
    descriptor: &'a NoticeDescriptor,
    subject: Option<String>,
    command: Option<String>,
}

impl<'a> NoticeBuilder<'a> {
    pub fn new(descriptor: &'a NoticeDescriptor) -> Self {
        Self {
            descriptor,
            subject: None,
            command: None,
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn build(self) -> Result<Notice, NoticeBuilderError> {
        if self.descriptor.remediation.trim().is_empty() {
            return Err(NoticeBuilderError::MissingRemediation {
                code: self.descriptor.code,
            });
        }
        let subject = self.subject.ok_or(NoticeBuilderError::MissingSubject {
            code: self.descriptor.code,
        })?;

        Ok(Notice {
            code: self.descriptor.code,
            message: self.descriptor.message,
            remediation: self.descriptor.remediation,
            subject,
            command: self.command,
        })
    }
}

/// Errors when required builder fields are missing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoticeBuilderError {
    #[error("subject is missing (code={code})")]
    MissingSubject { code: &'static str },
    #[error("remediation is empty (code={code})")]
    MissingRemediation { code: &'static str },
}

/// The build output directory does not exist.
pub const BUILD_DIR_NOT_FOUND: NoticeDescriptor = NoticeDescriptor::new(
    "BUILD_DIR_NOT_FOUND",
    "Build directory not found",
    "Please build the app first; the build creates the directory with all files needed for deployment.",
);

/// A key entry expected in a complete build is absent.
pub const KEY_ENTRY_MISSING: NoticeDescriptor = NoticeDescriptor::new(
    "KEY_ENTRY_MISSING",
    "Expected build entry is missing",
    "Re-run the build and check its output for errors before deploying.",
);

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_DESCRIPTOR: NoticeDescriptor =
        NoticeDescriptor::new("sample", "Sample notice", "Run the sample step again.");

    #[test]
    fn builder_produces_notice_with_required_fields() {
        let notice = BASE_DESCRIPTOR
            .builder()
            .subject("dist")
            .command("npm run build")
            .build()
            .expect("builder must succeed");

        assert_eq!(notice.code, "sample");
        assert_eq!(notice.subject, "dist");
        assert_eq!(notice.command.as_deref(), Some("npm run build"));
        assert_eq!(notice.remediation, "Run the sample step again.");
    }

    #[test]
    fn builder_fails_when_subject_missing() {
        let result = BASE_DESCRIPTOR.builder().build();
        assert_eq!(
            result.unwrap_err(),
            NoticeBuilderError::MissingSubject {
                code: BASE_DESCRIPTOR.code
            }
        );
    }

    #[test]
    fn builder_fails_when_remediation_blank() {
        const BLANK_DESCRIPTOR: NoticeDescriptor = NoticeDescriptor::new("blank", "blank", " ");
        let result = BLANK_DESCRIPTOR.builder().subject("dist").build();
        assert_eq!(
            result.unwrap_err(),
            NoticeBuilderError::MissingRemediation {
                code: BLANK_DESCRIPTOR.code
            }
        );
    }

    #[test]
    fn notice_without_command_omits_field_in_json() {
        let notice = KEY_ENTRY_MISSING
            .builder()
            .subject("assets")
            .build()
            .expect("builder must succeed");
        let value = serde_json::to_value(&notice).expect("notice serializes");

        assert_eq!(value["code"], "KEY_ENTRY_MISSING");
        assert!(value.get("command").is_none(), "value: {value}");
    }
}
