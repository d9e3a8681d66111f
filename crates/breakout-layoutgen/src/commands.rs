//! Subcommand implementations. Nothing here decides exit codes.

use std::path::{Path, PathBuf};

use breakout_common::{LayoutError, Result};
use breakout_config::LayoutgenConfig;
use breakout_shaders::wgsl::{self, PreludeOptions};
use tracing::{debug, info, warn};

pub fn prelude_options(config: &LayoutgenConfig) -> PreludeOptions {
    PreludeOptions {
        bind_group: config.generate.bind_group,
        include_bindings: config.generate.include_bindings,
    }
}

/// Write the prelude to `out` (or `generate.out`). Returns the path and
/// whether the file changed.
pub fn generate(config: &LayoutgenConfig, out: Option<&Path>) -> Result<(PathBuf, bool)> {
    let path = out.unwrap_or(config.generate.out.as_path()).to_path_buf();
    let prelude = wgsl::generate_prelude(&prelude_options(config));

    if std::fs::read_to_string(&path).is_ok_and(|existing| existing == prelude) {
        debug!("{} is up to date", path.display());
        return Ok((path, false));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, prelude)?;
    info!("wrote WGSL prelude to {}", path.display());
    Ok((path, true))
}

/// Files that drifted, with every disagreement found in each.
#[derive(Debug, Default)]
pub struct CheckSummary {
    pub checked: usize,
    pub drifted: Vec<(PathBuf, Vec<LayoutError>)>,
}

impl CheckSummary {
    pub fn is_clean(&self) -> bool {
        self.drifted.is_empty()
    }
}

/// Check `files` (or `check.shaders`) against the host schemas.
///
/// I/O failures abort; drift is collected into the summary.
pub fn check(config: &LayoutgenConfig, files: &[PathBuf]) -> Result<CheckSummary> {
    let files = if files.is_empty() {
        &config.check.shaders[..]
    } else {
        files
    };
    if files.is_empty() {
        warn!("no shader files to check; list them under [check] shaders");
    }

    let schemas = wgsl::shared_schemas();
    let mut summary = CheckSummary::default();

    for file in files {
        let source = std::fs::read_to_string(file)?;
        summary.checked += 1;

        let errors = wgsl::check_all(&source, &schemas);
        if errors.is_empty() {
            info!("{}: ok", file.display());
            continue;
        }

        for err in &errors {
            warn!("{}: {err}", file.display());
        }
        summary.drifted.push((file.clone(), errors));

        if config.check.fail_fast {
            break;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> LayoutgenConfig {
        let mut config = LayoutgenConfig::default();
        config.generate.out = dir.join("generated").join("shared.wgsl");
        config
    }

    #[test]
    fn generate_writes_then_reports_up_to_date() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let (path, changed) = generate(&config, None).unwrap();
        assert!(changed);
        assert_eq!(path, config.generate.out);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("struct PerQuad {"));

        let (_, changed) = generate(&config, None).unwrap();
        assert!(!changed);
    }

    #[test]
    fn generate_uses_configured_bind_group() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.generate.bind_group = 3;

        let out = dir.path().join("custom.wgsl");
        let (path, _) = generate(&config, Some(out.as_path())).unwrap();
        assert_eq!(path, out);
        assert!(std::fs::read_to_string(&out).unwrap().contains("@group(3) @binding(2)"));
    }

    #[test]
    fn generated_file_checks_clean() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let (path, _) = generate(&config, None).unwrap();

        let summary = check(&config, &[path]).unwrap();
        assert_eq!(summary.checked, 1);
        assert!(summary.is_clean());
    }

    #[test]
    fn check_collects_drift_per_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.wgsl");
        let bad = dir.path().join("bad.wgsl");
        std::fs::write(&good, wgsl::generate_prelude(&PreludeOptions::default())).unwrap();
        std::fs::write(
            &bad,
            "struct View { mat_view_proj: mat4x4<f32> }\nstruct PerQuad { pos: vec2<f32>, scale: vec2<f32>, color: vec3<f32> }\n",
        )
        .unwrap();

        let summary = check(&config_in(dir.path()), &[good, bad.clone()]).unwrap();
        assert_eq!(summary.checked, 2);
        assert_eq!(summary.drifted.len(), 1);
        assert_eq!(summary.drifted[0].0, bad);
        assert!(matches!(
            summary.drifted[0].1[0],
            LayoutError::FieldCount { found: 3, .. }
        ));
    }

    #[test]
    fn fail_fast_stops_after_first_drift() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.wgsl");
        let b = dir.path().join("b.wgsl");
        std::fs::write(&a, "").unwrap();
        std::fs::write(&b, "").unwrap();

        let mut config = config_in(dir.path());
        config.check.fail_fast = true;
        let summary = check(&config, &[a, b]).unwrap();
        assert_eq!(summary.checked, 1);
        assert_eq!(summary.drifted.len(), 1);
    }

    #[test]
    fn check_falls_back_to_configured_shaders() {
        let dir = tempfile::tempdir().unwrap();
        let shader = dir.path().join("quad.wgsl");
        std::fs::write(&shader, wgsl::generate_prelude(&PreludeOptions::default())).unwrap();

        let mut config = config_in(dir.path());
        config.check.shaders = vec![shader];
        let summary = check(&config, &[]).unwrap();
        assert_eq!(summary.checked, 1);
        assert!(summary.is_clean());
    }

    #[test]
    fn missing_shader_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = check(&config_in(dir.path()), &[dir.path().join("absent.wgsl")]).unwrap_err();
        assert!(matches!(err, breakout_common::BreakoutError::Io(_)));
    }
}
