use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Checks passed; non-strict missing keys only warn
/// - `Failure` (1): Invalid translation files or missing keys in strict mode
/// - `Error` (2): Command failed due to internal error (config error, bad pattern, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Checks passed.
    Success,
    /// Checks ran and found problems that should stop the build.
    Failure,
    /// The checks could not run.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
