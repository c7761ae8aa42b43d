//! Domain types for stencil file records.
//!
//! A [`FileRecord`] is created once by discovery, mutated by file marks, and
//! read by the renderer. An [`OutputFile`] is the renderer's projection of a
//! record onto the output directory.
//!
//! Record paths are `/`-separated identity strings rather than `PathBuf`s:
//! marks compare them textually and they never touch the filesystem directly.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How a file's content is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Yaml,
    Text,
    Starlark,
    /// Plain data; never rendered, never emitted.
    #[default]
    Unknown,
}

impl ContentType {
    const YAML_EXTS: &'static [&'static str] = &["yml", "yaml"];
    const TEXT_EXTS: &'static [&'static str] = &["txt"];
    const STARLARK_EXTS: &'static [&'static str] = &["star"];

    /// Content type implied by a path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let Some(ext) = path.as_ref().extension().and_then(|e| e.to_str()) else {
            return ContentType::Unknown;
        };
        let ext = ext.to_ascii_lowercase();
        if Self::YAML_EXTS.contains(&ext.as_str()) {
            ContentType::Yaml
        } else if Self::TEXT_EXTS.contains(&ext.as_str()) {
            ContentType::Text
        } else if Self::STARLARK_EXTS.contains(&ext.as_str()) {
            ContentType::Starlark
        } else {
            ContentType::Unknown
        }
    }

    /// Whether files of this type are templates unless marked otherwise.
    pub fn is_template_by_default(self) -> bool {
        matches!(self, ContentType::Yaml | ContentType::Text)
    }

    /// Whether the renderer emits an output file for this type.
    pub fn produces_output(self) -> bool {
        matches!(self, ContentType::Yaml | ContentType::Text)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Yaml => write!(f, "yaml"),
            ContentType::Text => write!(f, "text"),
            ContentType::Starlark => write!(f, "starlark"),
            ContentType::Unknown => write!(f, "data"),
        }
    }
}

// ---------------------------------------------------------------------------
// FileRecord
// ---------------------------------------------------------------------------

/// A discovered input file.
///
/// `original_relative_path` is fixed at construction and is the only key
/// file marks look records up by. Every other field may be changed by marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    original_relative_path: String,
    relative_path: String,
    content_type: ContentType,
    is_template: bool,
    source: PathBuf,
    content: Vec<u8>,
}

impl FileRecord {
    /// Build a record, deriving type and template eligibility from the
    /// path's extension.
    pub fn new(relative_path: impl Into<String>, source: impl Into<PathBuf>, content: Vec<u8>) -> Self {
        let relative_path = relative_path.into();
        let content_type = ContentType::from_path(&relative_path);
        Self {
            original_relative_path: relative_path.clone(),
            relative_path,
            content_type,
            is_template: content_type.is_template_by_default(),
            source: source.into(),
            content,
        }
    }

    /// In-memory record with no backing file; `source` mirrors the path.
    pub fn from_bytes(relative_path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let relative_path = relative_path.into();
        let source = PathBuf::from(&relative_path);
        Self::new(relative_path, source, content.into())
    }

    pub fn original_relative_path(&self) -> &str {
        &self.original_relative_path
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn is_template(&self) -> bool {
        self.is_template
    }

    /// Where the record was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn mark_relative_path(&mut self, path: impl Into<String>) {
        self.relative_path = path.into();
    }

    pub fn mark_type(&mut self, content_type: ContentType) {
        self.content_type = content_type;
    }

    pub fn mark_template(&mut self, is_template: bool) {
        self.is_template = is_template;
    }
}

// ---------------------------------------------------------------------------
// OutputFile
// ---------------------------------------------------------------------------

/// A rendered file destined for the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    relative_path: PathBuf,
    content: Vec<u8>,
}

impl OutputFile {
    pub fn new(relative_path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    /// Destination path relative to the output root.
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
