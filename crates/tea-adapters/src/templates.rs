//! Templates-root discovery.
//!
//! # Resolution order
//!
//! 1. `$TEA_TEMPLATES_DIR`
//! 2. `./templates` (relative to the current working directory)
//! 3. `<directory of the running executable>/templates`
//!
//! The first candidate that is an existing directory wins. When none exists,
//! `./templates` is returned and the web stage reports the template as
//! missing.

use std::ffi::OsString;
use std::path::PathBuf;

use tracing::{debug, warn};

/// Environment variable overriding the templates root.
pub const TEMPLATES_DIR_ENV: &str = "TEA_TEMPLATES_DIR";

const TEMPLATES_DIR_NAME: &str = "templates";

/// Resolve the templates root from the process environment.
pub fn resolve_templates_dir() -> PathBuf {
    let candidates = candidate_paths(std::env::var_os(TEMPLATES_DIR_ENV));
    first_existing(&candidates).unwrap_or_else(|| {
        warn!(
            "no templates directory found; checked ${}, ./templates, and <exe>/templates",
            TEMPLATES_DIR_ENV
        );
        PathBuf::from(TEMPLATES_DIR_NAME)
    })
}

/// Ordered candidate list. A missing env var or unresolvable executable path
/// is omitted.
fn candidate_paths(env_dir: Option<OsString>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);

    if let Some(dir) = env_dir.filter(|d| !d.is_empty()) {
        let p = PathBuf::from(dir);
        debug!(path = %p.display(), "candidate from ${}", TEMPLATES_DIR_ENV);
        paths.push(p);
    }

    paths.push(PathBuf::from(TEMPLATES_DIR_NAME));

    if let Some(exe_sibling) = exe_sibling_templates() {
        debug!(path = %exe_sibling.display(), "candidate from exe sibling");
        paths.push(exe_sibling);
    }

    paths
}

fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.is_dir()).cloned()
}

fn exe_sibling_templates() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join(TEMPLATES_DIR_NAME)))
}
