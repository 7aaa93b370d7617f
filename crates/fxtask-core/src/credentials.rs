use tracing::debug;

use crate::constants::{AZURE_CREDENTIAL_VARS, M365_CREDENTIAL_VARS};
use crate::error::TaskError;
use crate::operation::OperationType;

/// Environment variables the TeamsFx CLI needs to sign in for `operation`.
pub fn required_vars(operation: OperationType, with_spfx: bool) -> Vec<&'static str> {
    let mut vars = Vec::new();
    match operation {
        OperationType::Provision => {
            vars.extend_from_slice(AZURE_CREDENTIAL_VARS);
            vars.extend_from_slice(M365_CREDENTIAL_VARS);
        }
        OperationType::Deploy => {
            vars.extend_from_slice(AZURE_CREDENTIAL_VARS);
            if with_spfx {
                vars.extend_from_slice(M365_CREDENTIAL_VARS);
            }
        }
        OperationType::Publish => vars.extend_from_slice(M365_CREDENTIAL_VARS),
        OperationType::Build | OperationType::Pack | OperationType::Validate => {}
    }
    vars
}

/// Fails with every unset or empty credential variable named at once.
pub fn ensure_present<F>(operation: OperationType, with_spfx: bool, lookup: F) -> Result<(), TaskError>
where
    F: Fn(&str) -> Option<String>,
{
    let missing = required_vars(operation, with_spfx)
        .into_iter()
        .filter(|name| lookup(name).map_or(true, |v| v.is_empty()))
        .map(ToOwned::to_owned)
        .collect::<Vec<_>>();

    if missing.is_empty() {
        debug!("credentials present for {}", operation);
        return Ok(());
    }
    Err(TaskError::EnvironmentVariable(missing))
}
