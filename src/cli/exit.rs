use std::process::ExitCode;

use anyhow::Error;

/// Exit status used by `--require-build` when the build directory is missing.
pub const BUILD_MISSING_EXIT_CODE: u8 = 3;

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: Option<String>,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: Some(format!("{err:?}")),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// The report was printed; only the status signals the missing build.
    pub fn build_missing() -> Self {
        Self {
            message: None,
            exit_code: ExitCode::from(BUILD_MISSING_EXIT_CODE),
        }
    }

    pub fn report(self) -> ExitCode {
        if let Some(message) = self.message {
            eprintln!("{message}");
        }
        self.exit_code
    }
}
