use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TaskError;

/// The workflow step requested of the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    Build,
    Provision,
    Deploy,
    Pack,
    Validate,
    Publish,
}

impl OperationType {
    pub const ALL: [OperationType; 6] = [
        Self::Build,
        Self::Provision,
        Self::Deploy,
        Self::Pack,
        Self::Validate,
        Self::Publish,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Provision => "provision",
            Self::Deploy => "deploy",
            Self::Pack => "pack",
            Self::Validate => "validate",
            Self::Publish => "publish",
        }
    }

    /// The `teamsfx` subcommand backing this operation, if it has one.
    ///
    /// `build` runs per-capability npm scripts instead of the TeamsFx CLI,
    /// and `pack` maps onto `teamsfx build`, which zips the app package.
    pub fn teamsfx_subcommand(self) -> Option<&'static str> {
        match self {
            Self::Build => None,
            Self::Provision => Some("provision"),
            Self::Deploy => Some("deploy"),
            Self::Pack => Some("build"),
            Self::Validate => Some("validate"),
            Self::Publish => Some("publish"),
        }
    }
}

impl Display for OperationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationType {
    type Err = TaskError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "build" => Ok(Self::Build),
            "provision" => Ok(Self::Provision),
            "deploy" => Ok(Self::Deploy),
            "pack" => Ok(Self::Pack),
            "validate" => Ok(Self::Validate),
            "publish" => Ok(Self::Publish),
            _ => Err(TaskError::Inputs(format!(
                "operationType '{value}' is not one of build, provision, deploy, pack, validate, publish"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_operation_name() {
        for op in OperationType::ALL {
            let parsed = OperationType::from_str(op.as_str()).expect("known operation should parse");
            assert_eq!(parsed, op);
        }
    }

    #[test]
    fn rejects_unknown_operation() {
        let err = OperationType::from_str("Deploy").expect_err("must fail");
        assert!(matches!(err, TaskError::Inputs(_)));
    }

    #[test]
    fn pack_runs_teamsfx_build() {
        assert_eq!(OperationType::Pack.teamsfx_subcommand(), Some("build"));
        assert_eq!(OperationType::Build.teamsfx_subcommand(), None);
    }
}
