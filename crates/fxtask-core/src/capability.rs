use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TaskError;

/// An add-on feature of a Teams app whose sources live in their own
/// directory under the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Tabs,
    Bot,
    Spfx,
}

impl Capability {
    pub const ALL: [Capability; 3] = [Self::Tabs, Self::Bot, Self::Spfx];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tabs => "tabs",
            Self::Bot => "bot",
            Self::Spfx => "SPFx",
        }
    }

    /// Directory name of this capability relative to the project root.
    pub fn dir_name(self) -> &'static str {
        self.as_str()
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = TaskError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tabs" => Ok(Self::Tabs),
            "bot" => Ok(Self::Bot),
            "SPFx" => Ok(Self::Spfx),
            _ => Err(TaskError::Inputs(format!(
                "capability '{value}' is not one of tabs, bot, SPFx"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgrammingLanguage {
    Javascript,
    Typescript,
}

impl ProgrammingLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Typescript => "typescript",
        }
    }
}

impl Display for ProgrammingLanguage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgrammingLanguage {
    type Err = TaskError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "javascript" => Ok(Self::Javascript),
            "typescript" => Ok(Self::Typescript),
            _ => Err(TaskError::Language(format!(
                "programming language '{value}' is not supported"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_names_are_case_sensitive() {
        assert_eq!(Capability::from_str("SPFx").unwrap(), Capability::Spfx);
        let err = Capability::from_str("spfx").expect_err("must fail");
        assert!(matches!(err, TaskError::Inputs(_)));
    }

    #[test]
    fn unsupported_language_is_a_language_error() {
        let err = ProgrammingLanguage::from_str("csharp").expect_err("must fail");
        assert!(matches!(err, TaskError::Language(_)));
    }
}
