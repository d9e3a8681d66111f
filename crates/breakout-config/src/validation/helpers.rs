//! Shared validation helpers.

use std::path::Path;

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `path` names a `.wgsl` file.
pub(crate) fn validate_wgsl_path(errors: &mut Vec<String>, name: &str, path: &Path) {
    if path.as_os_str().is_empty() {
        errors.push(format!("{name} is empty"));
    } else if !matches!(path.extension(), Some(ext) if ext == "wgsl") {
        errors.push(format!("{name} = {} is not a .wgsl file", path.display()));
    }
}
