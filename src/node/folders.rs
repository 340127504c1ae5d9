//! Folder-path discovery.

use crate::config::Folders;

/// Reports the toolkit's folder layout.
///
/// Takes no inputs; discovery reads the process environment and falls back
/// to platform defaults.
pub fn run() -> Folders {
    Folders::discover()
}
