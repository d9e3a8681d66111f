//! Drift detection between the host schemas and a WGSL source.

use breakout_common::LayoutError;
use tracing::debug;

use super::parse::{parse_bindings, parse_consts, parse_structs, WgslBinding, WgslStruct};
use crate::schema::{round_up, FieldType, StructSchema};
use crate::{BUFFER_IDX_PER_QUAD, BUFFER_IDX_VIEW, PER_QUAD_FLAGS_AS_CIRCLE, PER_QUAD_FLAGS_NONE};

/// Constants whose WGSL value must equal the host value wherever declared.
const SHARED_CONSTS: [(&str, u32); 4] = [
    ("PER_QUAD_FLAGS_NONE", PER_QUAD_FLAGS_NONE),
    ("PER_QUAD_FLAGS_AS_CIRCLE", PER_QUAD_FLAGS_AS_CIRCLE),
    ("BUFFER_IDX_VIEW", BUFFER_IDX_VIEW),
    ("BUFFER_IDX_PER_QUAD", BUFFER_IDX_PER_QUAD),
];

/// Check every schema against `source`, collecting all disagreements.
///
/// Besides the struct declarations, any `@binding` resource of a shared
/// buffer type and any shared constant found in `source` must carry the
/// host value.
pub fn check_all(source: &str, schemas: &[StructSchema]) -> Vec<LayoutError> {
    let declared = parse_structs(source);
    debug!(structs = declared.len(), "parsed WGSL structs");

    let mut errors: Vec<LayoutError> = schemas
        .iter()
        .filter_map(|schema| {
            let result = match declared.iter().find(|s| s.name == schema.name) {
                Some(decl) => compare(schema, decl),
                None => Err(LayoutError::MissingStruct(schema.name.to_string())),
            };
            result.err()
        })
        .collect();

    errors.extend(parse_bindings(source).iter().filter_map(check_binding));

    errors.extend(parse_consts(source).into_iter().filter_map(|decl| {
        let (_, expected) = SHARED_CONSTS.iter().find(|(name, _)| *name == decl.name)?;
        (decl.value != *expected).then(|| LayoutError::ConstantMismatch {
            name: decl.name,
            expected: *expected,
            found: decl.value,
        })
    }));

    errors
}

/// Like [`check_all`] but stops at the first disagreement.
pub fn check_source(source: &str, schemas: &[StructSchema]) -> Result<(), LayoutError> {
    match check_all(source, schemas).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Host binding slot for a resource of WGSL type `ty`, if it is a shared one.
fn expected_binding(ty: &str) -> Option<u32> {
    if ty == "View" {
        Some(BUFFER_IDX_VIEW)
    } else if ty == "array<PerQuad>" || ty.starts_with("array<PerQuad,") {
        Some(BUFFER_IDX_PER_QUAD)
    } else {
        None
    }
}

fn check_binding(decl: &WgslBinding) -> Option<LayoutError> {
    let expected = expected_binding(&decl.ty)?;
    if decl.binding == Some(expected) {
        return None;
    }
    Some(LayoutError::BindingMismatch {
        name: decl.name.clone(),
        ty: decl.ty.clone(),
        expected,
        found: decl
            .binding
            .map_or_else(|| "non-literal".to_string(), |n| n.to_string()),
    })
}

fn compare(schema: &StructSchema, decl: &WgslStruct) -> Result<(), LayoutError> {
    if decl.fields.len() != schema.fields.len() {
        return Err(LayoutError::FieldCount {
            ty: schema.name.to_string(),
            expected: schema.fields.len(),
            found: decl.fields.len(),
        });
    }

    for (index, (expected, found)) in schema.fields.iter().zip(&decl.fields).enumerate() {
        let same_type = FieldType::from_wgsl(&found.ty) == Some(expected.ty);
        if found.name != expected.name || !same_type {
            return Err(LayoutError::FieldMismatch {
                ty: schema.name.to_string(),
                index,
                expected: format!("{}: {}", expected.name, expected.ty),
                found: format!("{}: {}", found.name, found.ty),
            });
        }
    }

    // Names and types agree; `@align`/`@size` can still move fields.
    let mut offset = 0;
    let mut struct_align = 1;
    for (expected, found) in schema.fields.iter().zip(&decl.fields) {
        let align = found.align.unwrap_or(expected.ty.wgsl_align()).max(1);
        offset = round_up(offset, align);
        if offset != expected.host_offset {
            return Err(LayoutError::LayoutMismatch {
                ty: schema.name.to_string(),
                what: format!("offset of `{}`", expected.name),
                host: expected.host_offset,
                device: offset,
            });
        }
        offset += found.size.unwrap_or(expected.ty.wgsl_size());
        struct_align = struct_align.max(align);
    }

    let size = round_up(offset, struct_align);
    if size != schema.device_size() {
        return Err(LayoutError::LayoutMismatch {
            ty: schema.name.to_string(),
            what: "size".to_string(),
            host: schema.device_size(),
            device: size,
        });
    }

    Ok(())
}
