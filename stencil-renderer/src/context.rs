//! Template context: serializable rendering payload for one file.

use std::collections::BTreeMap;

use serde::Serialize;

use stencil_core::types::{ContentType, FileRecord};

use crate::error::RenderError;

/// Values shared by every template in a run.
#[derive(Debug, Clone, Serialize)]
pub struct SharedCtx {
    /// Data values, converted from YAML.
    pub values: serde_json::Value,
    /// Contents of every data file, keyed by original relative path.
    pub data: BTreeMap<String, String>,
}

impl SharedCtx {
    /// Build the shared context from data values and the record collection.
    pub fn new(
        values: &BTreeMap<String, serde_yaml::Value>,
        records: &[FileRecord],
    ) -> Result<Self, RenderError> {
        let data = records
            .iter()
            .filter(|r| r.content_type() == ContentType::Unknown)
            .map(|r| {
                (
                    r.original_relative_path().to_string(),
                    String::from_utf8_lossy(r.content()).into_owned(),
                )
            })
            .collect();
        Ok(SharedCtx {
            values: serde_json::to_value(values)?,
            data,
        })
    }
}

/// The file currently being rendered.
#[derive(Debug, Clone, Serialize)]
pub struct FileCtx {
    pub path: String,
    pub original_path: String,
}

/// Full payload handed to tera for one template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext<'a> {
    #[serde(flatten)]
    pub shared: &'a SharedCtx,
    pub file: FileCtx,
}

impl<'a> TemplateContext<'a> {
    pub fn for_record(shared: &'a SharedCtx, record: &FileRecord) -> Self {
        TemplateContext {
            shared,
            file: FileCtx {
                path: record.relative_path().to_string(),
                original_path: record.original_relative_path().to_string(),
            },
        }
    }

    /// Convert into a [`tera::Context`].
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
