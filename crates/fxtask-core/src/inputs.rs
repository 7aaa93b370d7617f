use std::path::PathBuf;
use std::str::FromStr;

use tracing::debug;

use crate::capability::Capability;
use crate::error::TaskError;
use crate::operation::OperationType;

/// Validated task inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInputs {
    pub project_root: PathBuf,
    pub operation: OperationType,
    pub capabilities: Vec<Capability>,
}

impl TaskInputs {
    /// Validates raw input values as received from the pipeline.
    ///
    /// # Errors
    /// Returns [`TaskError::Inputs`] when the project root is unset or missing,
    /// the operation type is unset or unknown, or a capability is unknown.
    pub fn from_raw(
        project_root: Option<&str>,
        operation_type: Option<&str>,
        capabilities: Option<&str>,
    ) -> Result<Self, TaskError> {
        let project_root = non_blank(project_root)
            .ok_or_else(|| TaskError::Inputs("projectRoot is not set".to_string()))?;
        let project_root = PathBuf::from(project_root);
        if !project_root.is_dir() {
            return Err(TaskError::Inputs(format!(
                "projectRoot '{}' does not exist or is not a directory",
                project_root.display()
            )));
        }

        let operation = non_blank(operation_type)
            .ok_or_else(|| TaskError::Inputs("operationType is not set".to_string()))?;
        let operation = OperationType::from_str(operation)?;

        let capabilities = parse_capabilities(capabilities)?;
        debug!(
            "validated inputs: root={}, operation={}, capabilities={:?}",
            project_root.display(),
            operation,
            capabilities
        );

        Ok(Self {
            project_root,
            operation,
            capabilities,
        })
    }

    pub fn requests(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn capability_dir(&self, capability: Capability) -> PathBuf {
        self.project_root.join(capability.dir_name())
    }

    /// True when `capability` was requested and the project contains it.
    pub fn uses(&self, capability: Capability) -> bool {
        self.requests(capability) && self.capability_dir(capability).is_dir()
    }
}

/// Parses a comma-separated capability list; blank means every capability.
pub fn parse_capabilities(raw: Option<&str>) -> Result<Vec<Capability>, TaskError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(Capability::ALL.to_vec());
    };

    let mut out = Vec::new();
    for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let capability = Capability::from_str(item)?;
        if !out.contains(&capability) {
            out.push(capability);
        }
    }

    if out.is_empty() {
        return Ok(Capability::ALL.to_vec());
    }
    Ok(out)
}

/// Reads a pipeline boolean input: only a case-insensitive `true` is true.
///
/// Unset, empty and any other value read as false, matching how the
/// Azure Pipelines task library treats boolean inputs.
pub fn parse_bool_input(raw: Option<&str>) -> bool {
    raw.map(str::trim)
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_string_lossy().to_string();
        (dir, path)
    }

    #[test]
    fn accepts_valid_inputs() {
        let (dir, path) = root();
        let inputs = TaskInputs::from_raw(Some(&path), Some("deploy"), Some("bot, SPFx"))
            .expect("inputs should validate");
        assert_eq!(inputs.operation, OperationType::Deploy);
        assert_eq!(inputs.capabilities, vec![Capability::Bot, Capability::Spfx]);
        assert!(!inputs.requests(Capability::Tabs));
        assert!(!inputs.uses(Capability::Spfx));

        std::fs::create_dir(dir.path().join("SPFx")).unwrap();
        assert!(inputs.uses(Capability::Spfx));
    }

    #[test]
    fn unset_project_root_is_rejected() {
        let err = TaskInputs::from_raw(None, Some("build"), None).expect_err("must fail");
        assert!(matches!(err, TaskError::Inputs(_)));
        let err = TaskInputs::from_raw(Some("  "), Some("build"), None).expect_err("must fail");
        assert!(matches!(err, TaskError::Inputs(_)));
    }

    #[test]
    fn missing_project_root_is_rejected() {
        let (dir, _) = root();
        let gone = dir.path().join("nope").to_string_lossy().to_string();
        let err = TaskInputs::from_raw(Some(&gone), Some("build"), None).expect_err("must fail");
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn unset_or_unknown_operation_is_rejected() {
        let (_dir, path) = root();
        let err = TaskInputs::from_raw(Some(&path), None, None).expect_err("must fail");
        assert!(matches!(err, TaskError::Inputs(_)));
        let err = TaskInputs::from_raw(Some(&path), Some("ship"), None).expect_err("must fail");
        assert!(matches!(err, TaskError::Inputs(_)));
    }

    #[test]
    fn blank_capabilities_default_to_all() {
        assert_eq!(parse_capabilities(None).unwrap(), Capability::ALL.to_vec());
        assert_eq!(parse_capabilities(Some(" , ")).unwrap(), Capability::ALL.to_vec());
    }

    #[test]
    fn duplicate_capabilities_keep_first_occurrence() {
        let caps = parse_capabilities(Some("SPFx,tabs,SPFx")).unwrap();
        assert_eq!(caps, vec![Capability::Spfx, Capability::Tabs]);
    }

    #[test]
    fn boolean_inputs_are_case_insensitive_and_default_to_false() {
        assert!(parse_bool_input(Some("true")));
        assert!(parse_bool_input(Some("True")));
        assert!(parse_bool_input(Some(" TRUE ")));
        assert!(!parse_bool_input(Some("")));
        assert!(!parse_bool_input(Some("False")));
        assert!(!parse_bool_input(Some("yes")));
        assert!(!parse_bool_input(None));
    }

    #[test]
    fn unknown_capability_is_an_inputs_error() {
        let err = parse_capabilities(Some("tabs,frontend")).expect_err("must fail");
        assert!(matches!(err, TaskError::Inputs(_)));
    }
}
