//! Runtime detection for Node.js and npm
//!
//! Advisory only: the generated project needs Node.js to run, but a missing
//! runtime never blocks scaffolding.

use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn check_command(name: &'static str, command: &str) -> RuntimeInfo {
    let output = Command::new(command).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    check_command("Node.js", "node")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    check_command("npm", "npm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_reports_identity_regardless_of_availability() {
        let node = check_node();
        assert_eq!(node.name, "Node.js");
        assert_eq!(node.version.is_some(), node.available);

        let npm = check_npm();
        assert_eq!(npm.name, "npm");
    }
}
