use std::process::ExitCode;

/// Process exit status of a tagline command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Everything was translated (or checked) without problems.
    Success,
    /// The command ran but reported problems, e.g. missing translations in `check`.
    Failure,
    /// A file could not be transformed, or the configuration is unusable.
    /// `build` writes nothing in this case.
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
