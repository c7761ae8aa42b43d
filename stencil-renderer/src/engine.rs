//! Tera rendering engine: [`TemplateEngine`] and [`Renderer`].
//!
//! # Output mapping
//!
//! | Content type | Template | Output                                     |
//! |--------------|----------|--------------------------------------------|
//! | YAML / text  | yes      | rendered by tera, written at relative path |
//! | YAML / text  | no       | bytes copied unchanged                     |
//! | Starlark     | n/a      | none (input only)                          |
//! | data         | n/a      | none; exposed to templates as `data`       |

use std::collections::BTreeMap;

use tera::Tera;

use stencil_core::types::{FileRecord, OutputFile};

use crate::context::{SharedCtx, TemplateContext};
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera instance holding every template record of a run.
///
/// Templates are registered under their original relative path so they can
/// `include` or `extends` one another regardless of `path` marks.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Parse every template record in `records`.
    pub fn new(records: &[FileRecord]) -> Result<Self, RenderError> {
        let mut templates = Vec::new();
        for record in records.iter().filter(|r| is_rendered(r)) {
            let source = std::str::from_utf8(record.content()).map_err(|_| RenderError::NotUtf8 {
                path: record.source().to_path_buf(),
            })?;
            templates.push((record.original_relative_path().to_string(), source.to_string()));
        }

        let mut tera = Tera::default();
        tera.add_raw_templates(templates)?;
        Ok(TemplateEngine { tera })
    }

    /// Render one template record.
    pub fn render(&self, ctx: &TemplateContext<'_>) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(&ctx.file.original_path, &tera_ctx)?)
    }
}

fn is_rendered(record: &FileRecord) -> bool {
    record.is_template() && record.content_type().produces_output()
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Turns a marked record collection into output files.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }

    /// Render `records` in order.
    ///
    /// Returns one [`OutputFile`] per YAML or text record, at the record's
    /// current relative path.
    pub fn render(
        &self,
        records: &[FileRecord],
        values: &BTreeMap<String, serde_yaml::Value>,
    ) -> Result<Vec<OutputFile>, RenderError> {
        let engine = TemplateEngine::new(records)?;
        let shared = SharedCtx::new(values, records)?;

        let mut outputs = Vec::new();
        for record in records {
            if !record.content_type().produces_output() {
                continue;
            }
            let content = if record.is_template() {
                let ctx = TemplateContext::for_record(&shared, record);
                engine.render(&ctx)?.into_bytes()
            } else {
                record.content().to_vec()
            };
            outputs.push(OutputFile::new(record.relative_path(), content));
        }
        Ok(outputs)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
