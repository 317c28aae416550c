//! Build status report: inspection, static guidance, and rendering.
mod guidance;
mod inspect;
mod render;

pub use guidance::{
    build_hint, deploy_guidance, BuildHint, DeployGuidance, HostingOption, NextSteps,
};
pub use inspect::{inspect_build_dir, BuildStatus, KeyEntryStatus};
pub use render::{render_json, render_text};

use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::{
    config::ReporterConfig,
    lib::errors::{Notice, NoticeBuilderError, BUILD_DIR_NOT_FOUND, KEY_ENTRY_MISSING},
};

/// Everything the renderers need, assembled from configuration and one inspection.
///
/// Next steps are derived from the status, so a missing build always carries
/// the build command and a found build always carries deploy guidance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    title: String,
    app_kind: String,
    dist_label: String,
    build_command: String,
    status: BuildStatus,
    notices: Vec<Notice>,
}

impl BuildReport {
    pub fn new(config: &ReporterConfig, status: BuildStatus) -> Result<Self, NoticeBuilderError> {
        let dist_label = config.build.dist_dir.display().to_string();

        let notices = if status.is_found() {
            status
                .missing_key_entries()
                .map(|name| KEY_ENTRY_MISSING.builder().subject(name).build())
                .collect::<Result<Vec<_>, _>>()?
        } else {
            vec![BUILD_DIR_NOT_FOUND
                .builder()
                .subject(dist_label.clone())
                .command(config.build.build_command.clone())
                .build()?]
        };

        Ok(Self {
            title: config.report.title.clone(),
            app_kind: config.report.app_kind.clone(),
            dist_label,
            build_command: config.build.build_command.clone(),
            status,
            notices,
        })
    }

    /// Inspect the configured build directory and assemble the report.
    pub fn collect(config: &ReporterConfig) -> Result<Self, NoticeBuilderError> {
        let status = inspect_build_dir(&config.build.dist_dir, &config.build.key_entries);
        Self::new(config, status)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn app_kind(&self) -> &str {
        &self.app_kind
    }

    pub fn dist_label(&self) -> &str {
        &self.dist_label
    }

    pub fn build_command(&self) -> &str {
        &self.build_command
    }

    pub fn status(&self) -> &BuildStatus {
        &self.status
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn next_steps(&self) -> NextSteps {
        match self.status {
            BuildStatus::Found { .. } => {
                NextSteps::Deploy(deploy_guidance(&self.dist_label, &self.app_kind))
            }
            BuildStatus::Missing { .. } => {
                NextSteps::Build(build_hint(&self.build_command, &self.dist_label))
            }
        }
    }
}

impl Serialize for BuildReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BuildReport", 6)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("app_kind", &self.app_kind)?;
        state.serialize_field("dist_label", &self.dist_label)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("next_steps", &self.next_steps())?;
        state.serialize_field("notices", &self.notices)?;
        state.end()
    }
}
