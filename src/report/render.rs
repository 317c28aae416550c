use std::fmt::Write;

use super::{build_hint, deploy_guidance, BuildReport, BuildStatus};
use crate::lib::errors::{RenderError, BUILD_DIR_NOT_FOUND};

const SEPARATOR: &str = "---";

/// Render the report as terminal text.
///
/// The output depends only on the report, so identical filesystem state gives
/// identical text.
pub fn render_text(report: &BuildReport) -> String {
    let mut out = String::new();

    heading(&mut out, report.title(), '=');
    let _ = writeln!(
        out,
        "🚨 IMPORTANT: This application was built with {}.",
        report.app_kind()
    );
    let _ = writeln!(
        out,
        "To deploy it, you need to upload the contents of the '{}' folder.",
        report.dist_label()
    );
    out.push('\n');

    heading(&mut out, "Deployment Steps", '-');
    match report.status() {
        BuildStatus::Found {
            file_count,
            key_entries,
            unreadable_dirs,
            ..
        } => {
            let guidance = deploy_guidance(report.dist_label(), report.app_kind());
            out.push_str("✅ Build directory found\n");
            let _ = writeln!(out, "Found {file_count} files ready for deployment");
            for entry in key_entries {
                let mark = if entry.present { "✅" } else { "❌" };
                let _ = writeln!(out, "{mark} {}", entry.name);
            }
            for dir in unreadable_dirs {
                let _ = writeln!(
                    out,
                    "⚠️ Could not read {}; the file count may be incomplete",
                    dir.display()
                );
            }
            out.push('\n');
            let _ = writeln!(out, "{SEPARATOR}\n");

            heading(&mut out, "How to Deploy", '-');
            let _ = writeln!(out, "1. {}\n", guidance.upload_step);
            out.push_str("   Popular deployment options:\n");
            for option in &guidance.hosting_options {
                let _ = writeln!(out, "   - {}: {}", option.provider, option.instruction);
            }
            out.push('\n');
            let _ = writeln!(out, "2. {}", guidance.runtime_note);
        }
        BuildStatus::Missing { .. } => {
            let hint = build_hint(report.build_command(), report.dist_label());
            let _ = writeln!(out, "❌ {}", BUILD_DIR_NOT_FOUND.message);
            let _ = writeln!(out, "Please build the {} app first:\n", report.app_kind());
            out.push_str("```bash\n");
            let _ = writeln!(out, "{}", hint.command);
            out.push_str("```\n\n");
            let _ = writeln!(out, "{}", hint.creates);
        }
    }

    out.push('\n');
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(
        out,
        "This report only provides deployment instructions for the {} application.",
        report.app_kind()
    );
    out
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &BuildReport) -> Result<String, RenderError> {
    serde_json::to_string_pretty(report).map_err(|source| RenderError::Json { source })
}

fn heading(out: &mut String, text: &str, underline: char) {
    let width = text.chars().count();
    let _ = writeln!(out, "{text}");
    let _ = writeln!(out, "{}", underline.to_string().repeat(width));
    out.push('\n');
}
