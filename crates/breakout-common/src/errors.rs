use std::path::PathBuf;

/// Disagreement between a host struct and its device-side declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout mismatch in {ty}: {what} is {host} on the host but {device} on the device")]
    LayoutMismatch {
        ty: String,
        what: String,
        host: usize,
        device: usize,
    },

    #[error("struct {0} is not declared")]
    MissingStruct(String),

    #[error("struct {ty} declares {found} fields, expected {expected}")]
    FieldCount {
        ty: String,
        expected: usize,
        found: usize,
    },

    #[error("struct {ty} field #{index}: expected `{expected}`, found `{found}`")]
    FieldMismatch {
        ty: String,
        index: usize,
        expected: String,
        found: String,
    },

    #[error("`{name}: {ty}` is bound at @binding({found}), expected @binding({expected})")]
    BindingMismatch {
        name: String,
        ty: String,
        expected: u32,
        found: String,
    },

    #[error("const {name} is {found}, expected {expected}")]
    ConstantMismatch {
        name: String,
        expected: u32,
        found: u32,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BreakoutError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_mismatch_display_shows_both_sides() {
        let err = LayoutError::LayoutMismatch {
            ty: "PerQuad".into(),
            what: "size".into(),
            host: 28,
            device: 32,
        };
        assert_eq!(
            err.to_string(),
            "layout mismatch in PerQuad: size is 28 on the host but 32 on the device"
        );
    }

    #[test]
    fn layout_error_field_variants_display() {
        let err = LayoutError::MissingStruct("View".into());
        assert_eq!(err.to_string(), "struct View is not declared");

        let err = LayoutError::FieldCount {
            ty: "PerQuad".into(),
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "struct PerQuad declares 3 fields, expected 4");

        let err = LayoutError::FieldMismatch {
            ty: "PerQuad".into(),
            index: 1,
            expected: "dims: vec2<f32>".into(),
            found: "scale: vec2<f32>".into(),
        };
        assert_eq!(
            err.to_string(),
            "struct PerQuad field #1: expected `dims: vec2<f32>`, found `scale: vec2<f32>`"
        );
    }

    #[test]
    fn layout_error_shared_constant_variants_display() {
        let err = LayoutError::BindingMismatch {
            name: "view_uniform".into(),
            ty: "View".into(),
            expected: 1,
            found: "7".into(),
        };
        assert_eq!(
            err.to_string(),
            "`view_uniform: View` is bound at @binding(7), expected @binding(1)"
        );

        let err = LayoutError::ConstantMismatch {
            name: "BUFFER_IDX_PER_QUAD".into(),
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "const BUFFER_IDX_PER_QUAD is 3, expected 2");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("generate.bind_group = 9".into());
        assert_eq!(
            err.to_string(),
            "config validation error: generate.bind_group = 9"
        );
    }

    #[test]
    fn breakout_error_from_layout() {
        let layout_err = LayoutError::MissingStruct("PerQuad".into());
        let err: BreakoutError = layout_err.into();
        assert!(matches!(err, BreakoutError::Layout(_)));
        assert!(err.to_string().contains("PerQuad"));
    }

    #[test]
    fn breakout_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: BreakoutError = config_err.into();
        assert!(matches!(err, BreakoutError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn breakout_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BreakoutError = io_err.into();
        assert!(matches!(err, BreakoutError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn breakout_error_other() {
        let err = BreakoutError::Other("2 shader files drifted".into());
        assert_eq!(err.to_string(), "2 shader files drifted");
    }
}
