//! Constants used across the fxtask workspace.

/// Directory holding TeamsFx project state, relative to the project root.
pub const FX_DIR: &str = ".fx";

/// The default environment config written by `teamsfx provision`.
pub const ENV_DEFAULT_CONFIG: &str = "env.default.json";

/// The Teams app package produced by `teamsfx build`.
pub const APP_PACKAGE_ZIP: &str = "appPackage.zip";

/// SPFx solution config, relative to the SPFx capability directory.
pub const SPFX_PACKAGE_SOLUTION: &str = "config/package-solution.json";

/// Directory `paths.zippedPackage` is resolved against inside the SPFx directory.
pub const SPFX_SHAREPOINT_DIR: &str = "sharepoint";

/// The npm package providing the TeamsFx command line.
pub const TEAMSFX_CLI_PACKAGE: &str = "@microsoft/teamsfx-cli";

/// Output variable names surfaced to the pipeline.
pub const OUTPUT_CONFIG_FILE_PATH: &str = "configFilePath";
pub const OUTPUT_SHAREPOINT_PACKAGE_PATH: &str = "sharepointPackagePath";
pub const OUTPUT_PACKAGE_ZIP_PATH: &str = "packageZipPath";

/// Credentials the TeamsFx CLI reads in non-interactive mode.
pub const AZURE_CREDENTIAL_VARS: &[&str] = &[
    "AZURE_ACCOUNT_NAME",
    "AZURE_ACCOUNT_PASSWORD",
    "AZURE_SUBSCRIPTION_ID",
    "AZURE_TENANT_ID",
];
pub const M365_CREDENTIAL_VARS: &[&str] = &["M365_ACCOUNT_NAME", "M365_ACCOUNT_PASSWORD"];
