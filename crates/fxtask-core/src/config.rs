use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::capability::ProgrammingLanguage;
use crate::constants::*;
use crate::error::TaskError;

/// The subset of `.fx/env.default.json` the task reads.
#[derive(Debug, Default, Deserialize)]
pub struct EnvDefaultConfig {
    #[serde(default)]
    pub solution: SolutionConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionConfig {
    pub programming_language: Option<String>,
}

/// The subset of `SPFx/config/package-solution.json` the task reads.
#[derive(Debug, Default, Deserialize)]
pub struct PackageSolutionConfig {
    #[serde(default)]
    pub paths: PackagePaths,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagePaths {
    pub zipped_package: Option<String>,
}

impl EnvDefaultConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        load_json(path)
    }
}

impl PackageSolutionConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        load_json(path)
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let cfg = serde_json::from_str::<T>(&text)
        .with_context(|| format!("failed to parse JSON config: {}", path.display()))?;
    Ok(cfg)
}

pub fn env_default_path(project_root: &Path) -> PathBuf {
    project_root.join(FX_DIR).join(ENV_DEFAULT_CONFIG)
}

pub fn app_package_path(project_root: &Path) -> PathBuf {
    project_root.join(FX_DIR).join(APP_PACKAGE_ZIP)
}

/// Reads `solution.programmingLanguage` from the project's default env config.
///
/// # Errors
/// A missing file, a missing field or an unsupported value is a
/// [`TaskError::Language`]; unreadable or malformed JSON is reported as is.
pub fn read_programming_language(project_root: &Path) -> Result<ProgrammingLanguage> {
    let path = env_default_path(project_root);
    if !path.is_file() {
        return Err(TaskError::Language(format!(
            "cannot determine the programming language: {} does not exist",
            path.display()
        ))
        .into());
    }

    let cfg = EnvDefaultConfig::load_from_file(&path)?;
    let raw = cfg.solution.programming_language.ok_or_else(|| {
        TaskError::Language(format!(
            "solution.programmingLanguage is not set in {}",
            path.display()
        ))
    })?;
    let language = ProgrammingLanguage::from_str(&raw)?;
    debug!("project programming language: {}", language);
    Ok(language)
}

/// Resolves the SharePoint package path declared by an SPFx solution.
///
/// `paths.zippedPackage` is relative to the `sharepoint` directory of the
/// SPFx project.
pub fn read_sharepoint_package_path(spfx_dir: &Path) -> Result<PathBuf> {
    let path = spfx_dir.join(SPFX_PACKAGE_SOLUTION);
    let cfg = PackageSolutionConfig::load_from_file(&path)?;
    let zipped = cfg
        .paths
        .zipped_package
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| TaskError::SpfxZippedPackageMissing(path.display().to_string()))?;
    Ok(spfx_dir.join(SPFX_SHAREPOINT_DIR).join(zipped))
}
