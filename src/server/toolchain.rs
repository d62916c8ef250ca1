use std::path::Path;

use crate::server::process::shell_command;

pub fn npm_ok() -> bool {
    shell_command("npm --version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Install runs only while the marker path is absent, matching npm projects
/// where a populated node_modules means dependencies are already present.
pub fn install_needed(marker: impl AsRef<Path>) -> bool {
    !marker.as_ref().exists()
}
