//! Telemetry initialization and inspection span helpers.

use std::{path::Path, time::Instant};

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` with developer-formatted logs on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper recording the start and finish of a build directory inspection.
pub struct InspectSpan {
    span: Span,
    started_at: Instant,
}

impl InspectSpan {
    pub fn start(root: &Path) -> Self {
        let span = info_span!(
            target: "dist_status::inspect",
            "inspect_build_dir",
            root = %root.display()
        );
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Close the span while recording what was observed.
    pub fn finish(self, found: bool, file_count: usize) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "dist_status::inspect",
            found,
            file_count,
            elapsed_ms,
            "Completed build directory inspection"
        );
    }
}

/// Emit the resolved run settings to `tracing`.
pub fn emit_run_settings(dist_dir: &Path, config_path: Option<&Path>, format: &str) {
    let config_path = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    info!(
        target: "dist_status::runtime",
        dist_dir = %dist_dir.display(),
        config_path = %config_path,
        format,
        "Rendering build status report"
    );
}
