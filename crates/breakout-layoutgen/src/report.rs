//! Host vs. WGSL layout table for the shared structs.

use std::fmt::Write;

use breakout_shaders::schema::GpuStruct;
use breakout_shaders::{PerQuad, View};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub name: &'static str,
    pub ty: &'static str,
    pub host_offset: usize,
    pub device_offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructReport {
    pub name: &'static str,
    pub host_size: usize,
    pub host_align: usize,
    pub device_size: usize,
    pub device_align: usize,
    pub fields: Vec<FieldReport>,
    /// `None` when host and device agree.
    pub mismatch: Option<String>,
}

pub fn struct_report<T: GpuStruct>() -> StructReport {
    let schema = T::SCHEMA;
    StructReport {
        name: schema.name,
        host_size: std::mem::size_of::<T>(),
        host_align: std::mem::align_of::<T>(),
        device_size: schema.device_size(),
        device_align: schema.device_align(),
        fields: schema
            .fields
            .iter()
            .enumerate()
            .map(|(i, f)| FieldReport {
                name: f.name,
                ty: f.ty.wgsl_name(),
                host_offset: f.host_offset,
                device_offset: schema.device_offset(i),
            })
            .collect(),
        mismatch: T::verify_layout().err().map(|e| e.to_string()),
    }
}

pub fn shared_reports() -> Vec<StructReport> {
    vec![struct_report::<View>(), struct_report::<PerQuad>()]
}

pub fn render_table(reports: &[StructReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(
            out,
            "{}  host {} bytes (align {})  wgsl {} bytes (align {})",
            report.name, report.host_size, report.host_align, report.device_size, report.device_align
        );
        for field in &report.fields {
            let _ = writeln!(
                out,
                "    {:<16} {:<12} host +{:<3} wgsl +{}",
                field.name, field.ty, field.host_offset, field.device_offset
            );
        }
        if let Some(mismatch) = &report.mismatch {
            let _ = writeln!(out, "    MISMATCH: {mismatch}");
        }
    }
    out
}
