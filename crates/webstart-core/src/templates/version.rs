//! Version comparison for CLI and template-set compatibility

use semver::Version;

/// Compare the CLI version against the template-set version.
/// Returns a warning message if the CLI is older than the set expects;
/// unparseable versions skip the check entirely.
pub fn check_compatibility(cli_version: &str, template_version: &str) -> Option<String> {
    let cli_ver = Version::parse(cli_version).ok()?;
    let template_ver = Version::parse(template_version).ok()?;

    if cli_ver < template_ver {
        Some(format!(
            "This template set was designed for CLI version {} or newer.\n\
             You are running version {}.\n\
             Consider updating: cargo install webstart-cli --force",
            template_version, cli_version
        ))
    } else {
        None
    }
}
