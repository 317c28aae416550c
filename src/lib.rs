//! Library crate root re-exporting the reporter, configuration, and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod report;

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    #[test]
    fn report_layout_requires_split_modules() {
        let expected_files = [
            "src/report/mod.rs",
            "src/report/inspect.rs",
            "src/report/guidance.rs",
            "src/report/render.rs",
        ];

        for path in expected_files {
            assert!(
                Path::new(path).exists(),
                "report layout: {} must exist",
                path
            );
        }

        let mod_path = Path::new("src/report/mod.rs");
        let content = fs::read_to_string(mod_path)
            .unwrap_or_else(|_| panic!("report layout: failed to read {}", mod_path.display()));

        for needle in ["inspect", "guidance", "render"] {
            assert!(
                content.contains(needle),
                "report layout: mod.rs must re-export {}",
                needle
            );
        }
    }

    #[test]
    fn config_layout_requires_split_modules() {
        let expected_files = [
            "src/config/mod.rs",
            "src/config/build.rs",
            "src/config/report.rs",
            "src/config/telemetry.rs",
        ];

        for path in expected_files {
            assert!(
                Path::new(path).exists(),
                "config layout: {} must exist",
                path
            );
        }
    }
}
