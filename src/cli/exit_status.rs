use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): All components were attempted, whatever diagnostics they raised
/// - `Failure` (1): The command refused to run (e.g. config file already exists)
/// - `Error` (2): Command failed due to internal error (bad config, write error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// All requested components ran.
    Success,
    /// The command declined to do its work.
    Failure,
    /// Command failed due to internal error.
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
