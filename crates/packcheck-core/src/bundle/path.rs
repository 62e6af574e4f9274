//! Validation of relative asset paths.
//!
//! Manifests name assets with forward-slash relative paths. Anything that
//! could escape the bundle root or change meaning across filesystems is
//! rejected outright rather than rewritten: a verifier must not silently
//! rename what it checks.

use crate::check::CheckError;

/// Validates a relative asset path before any bundle lookup.
///
/// - non-empty and relative
/// - forward slashes only, no empty segments
/// - no `.` or `..` segments
/// - no NUL or other control characters
pub fn validate_asset_path(path: &str) -> Result<(), CheckError> {
    let invalid = |reason: &'static str| CheckError::InvalidAssetPath {
        path: path.to_string(),
        reason,
    };

    if path.is_empty() {
        return Err(invalid("empty path"));
    }
    if path.starts_with('/') {
        return Err(invalid("absolute path"));
    }
    if path.contains('\\') {
        return Err(invalid("backslash separator"));
    }
    if path.chars().any(char::is_control) {
        return Err(invalid("control character"));
    }
    for segment in path.split('/') {
        match segment {
            "" => return Err(invalid("empty segment")),
            "." | ".." => return Err(invalid("dot segment")),
            _ => {}
        }
    }
    Ok(())
}
