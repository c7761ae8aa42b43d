//! File marks: per-file `path:key=value` directives.
//!
//! | Key       | Value             | Effect                                   |
//! |-----------|-------------------|------------------------------------------|
//! | `path`    | any               | change the output path                   |
//! | `exclude` | `true`            | drop the file                            |
//! | `type`    | `yaml-template`   | YAML, template                           |
//! | `type`    | `yaml-plain`      | YAML, passed through                     |
//! | `type`    | `text-template`   | text, template                           |
//! | `type`    | `text-plain`      | text, passed through                     |
//! | `type`    | `starlark`        | Starlark, not a template                 |
//! | `type`    | `data`            | plain data, not a template               |
//! | `output`  | any               | reserved, no effect                      |
//!
//! Marks apply in order and look files up by their original relative path,
//! so a `path` mark does not change how later marks find the same file.

use std::collections::HashSet;

use crate::error::MarkError;
use crate::types::{ContentType, FileRecord};

/// A mark split into its three parts. Key and value are not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark<'a> {
    raw: &'a str,
    pub path: &'a str,
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Mark<'a> {
    /// Split `raw` on the first `:` and then the first `=`.
    pub fn parse(raw: &'a str) -> Result<Self, MarkError> {
        let (path, kv) = raw.split_once(':').ok_or_else(|| MarkError::MalformedMark {
            mark: raw.to_string(),
        })?;
        let (key, value) = kv.split_once('=').ok_or_else(|| MarkError::MalformedValue {
            mark: raw.to_string(),
        })?;
        Ok(Mark {
            raw,
            path,
            key,
            value,
        })
    }

    /// The mark as given on the command line.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    fn effect(&self) -> Result<MarkEffect, MarkError> {
        match self.key {
            "path" => Ok(MarkEffect::RelativePath(self.value.to_string())),
            "exclude" => match self.value {
                "true" => Ok(MarkEffect::Exclude),
                _ => Err(self.unknown_value()),
            },
            "type" => type_for(self.value)
                .map(|(content_type, is_template)| MarkEffect::Type {
                    content_type,
                    is_template,
                })
                .ok_or_else(|| self.unknown_value()),
            // reserved
            "output" => Ok(MarkEffect::Output),
            _ => Err(MarkError::UnknownKey {
                mark: self.raw.to_string(),
            }),
        }
    }

    fn unknown_value(&self) -> MarkError {
        MarkError::UnknownValue {
            mark: self.raw.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MarkEffect {
    RelativePath(String),
    Exclude,
    Type {
        content_type: ContentType,
        is_template: bool,
    },
    Output,
}

/// `(content type, is template)` for a `type=` mark value.
pub fn type_for(value: &str) -> Option<(ContentType, bool)> {
    let pair = match value {
        "yaml-template" => (ContentType::Yaml, true),
        "yaml-plain" => (ContentType::Yaml, false),
        "text-template" => (ContentType::Text, true),
        "text-plain" => (ContentType::Text, false),
        "starlark" => (ContentType::Starlark, false),
        "data" => (ContentType::Unknown, false),
        _ => return None,
    };
    Some(pair)
}

/// Demote every file whose relative path is not in `allowed` to a
/// non-template. An empty allow-list restricts nothing.
pub fn filter_template_files(files: &mut [FileRecord], allowed: &[String]) {
    if allowed.is_empty() {
        return;
    }
    let allowed: HashSet<&str> = allowed.iter().map(String::as_str).collect();
    for file in files.iter_mut() {
        if !allowed.contains(file.relative_path()) {
            tracing::debug!("not templating: {}", file.relative_path());
            file.mark_template(false);
        }
    }
}

/// Apply `marks` to `files` in order, stopping at the first error.
///
/// Each mark is resolved against the collection as left by the marks before
/// it. Exclusion removes the record while preserving the order of the rest.
pub fn apply_marks<S: AsRef<str>>(files: &mut Vec<FileRecord>, marks: &[S]) -> Result<(), MarkError> {
    for raw in marks {
        apply_mark(files, raw.as_ref())?;
    }
    Ok(())
}

fn apply_mark(files: &mut Vec<FileRecord>, raw: &str) -> Result<(), MarkError> {
    let mark = Mark::parse(raw)?;
    let index = find_one(files, &mark)?;
    let effect = mark.effect()?;

    tracing::debug!("applying file mark '{raw}'");
    match effect {
        MarkEffect::RelativePath(path) => files[index].mark_relative_path(path),
        MarkEffect::Exclude => {
            files.remove(index);
        }
        MarkEffect::Type {
            content_type,
            is_template,
        } => {
            let file = &mut files[index];
            file.mark_type(content_type);
            file.mark_template(is_template);
        }
        MarkEffect::Output => {}
    }
    Ok(())
}

fn find_one(files: &[FileRecord], mark: &Mark<'_>) -> Result<usize, MarkError> {
    let mut matches = files
        .iter()
        .enumerate()
        .filter(|(_, f)| f.original_relative_path() == mark.path)
        .map(|(i, _)| i);

    let Some(first) = matches.next() else {
        return Err(MarkError::UnknownFile {
            mark: mark.raw.to_string(),
        });
    };
    let extra = matches.count();
    if extra > 0 {
        return Err(MarkError::AmbiguousFile {
            mark: mark.raw.to_string(),
            count: extra + 1,
        });
    }
    Ok(first)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
