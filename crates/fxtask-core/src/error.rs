use thiserror::Error;

/// Whether a failure is the pipeline author's to fix or a defect in the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    User,
    System,
}

/// Errors the task recognizes and reports with remediation hints.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Inputs(String),

    #[error("required environment variables are not set: {}", .0.join(", "))]
    EnvironmentVariable(Vec<String>),

    #[error("{0}")]
    Language(String),

    #[error("paths.zippedPackage is not set in {0}")]
    SpfxZippedPackageMissing(String),

    #[error("{0}")]
    Internal(String),
}

impl TaskError {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inputs(_) => "InputsError",
            Self::EnvironmentVariable(_) => "EnvironmentVariableError",
            Self::Language(_) => "LanguageError",
            Self::SpfxZippedPackageMissing(_) => "SpfxZippedPackageMissingError",
            Self::Internal(_) => "InternalError",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Internal(_) => ErrorKind::System,
            _ => ErrorKind::User,
        }
    }

    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            Self::Inputs(_) => &[
                "Set projectRoot to the directory containing the TeamsFx project.",
                "Set operationType to one of build, provision, deploy, pack, validate, publish.",
                "List capabilities as a comma-separated subset of tabs, bot, SPFx.",
            ],
            Self::EnvironmentVariable(_) => &[
                "Define the missing variables as secret pipeline variables.",
                "Map secret variables into the step's env block explicitly.",
            ],
            Self::Language(_) => &[
                "Set solution.programmingLanguage in .fx/env.default.json to javascript or typescript.",
                "Run the provision operation first if .fx/env.default.json does not exist.",
            ],
            Self::SpfxZippedPackageMissing(_) => &[
                "Set paths.zippedPackage in SPFx/config/package-solution.json.",
            ],
            Self::Internal(_) => &["Report this issue together with the full task log."],
        }
    }

    /// The message reported as the task failure.
    pub fn report(&self) -> String {
        format!(
            "{}: {} Suggestions: {}",
            self.name(),
            self,
            self.suggestions().join(" ")
        )
    }
}
