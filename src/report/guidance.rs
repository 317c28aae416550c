//! Static deployment and build guidance shown alongside the status.

use serde::Serialize;

/// One hosting provider and how to publish a static build to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostingOption {
    pub provider: &'static str,
    pub instruction: String,
}

/// Steps for publishing a build directory that is already present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployGuidance {
    pub upload_step: String,
    pub hosting_options: Vec<HostingOption>,
    pub runtime_note: String,
}

/// The command that produces the build directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildHint {
    pub command: String,
    pub creates: String,
}

/// What the reader should do next, depending on whether the build exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NextSteps {
    Deploy(DeployGuidance),
    Build(BuildHint),
}

pub fn deploy_guidance(dist_label: &str, app_kind: &str) -> DeployGuidance {
    let hosting_options = vec![
        HostingOption {
            provider: "Vercel",
            instruction: "Connect your GitHub repo".to_string(),
        },
        HostingOption {
            provider: "Netlify",
            instruction: format!("Drag and drop the `{dist_label}` folder"),
        },
        HostingOption {
            provider: "GitHub Pages",
            instruction: format!("Push the `{dist_label}` folder to a gh-pages branch"),
        },
        HostingOption {
            provider: "Firebase",
            instruction: "Use `firebase deploy`".to_string(),
        },
        HostingOption {
            provider: "Any static hosting",
            instruction: format!("Upload all files from `{dist_label}`"),
        },
    ];

    DeployGuidance {
        upload_step: format!(
            "Upload all files from the `{dist_label}` folder to your hosting provider"
        ),
        hosting_options,
        runtime_note: format!(
            "No server-side code is needed - this is a client-side {app_kind} app"
        ),
    }
}

pub fn build_hint(build_command: &str, dist_label: &str) -> BuildHint {
    BuildHint {
        command: build_command.to_string(),
        creates: format!(
            "This will create the `{dist_label}` folder with all files needed for deployment."
        ),
    }
}
