//! Source map for managing source files and rendering source locations.

use std::sync::Arc;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and precomputed line starts
///
/// # Examples
///
/// ```
/// use somc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "Hello.som", "Hello = (\n)");
/// assert_eq!(file.name(), "Hello.som");
/// assert_eq!(file.line_count(), 2);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use somc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "a.som", "one\r\ntwo\nthree");
    /// assert_eq!(file.line_at(1), Some("one"));
    /// assert_eq!(file.line_at(3), Some("three"));
    /// assert_eq!(file.line_at(4), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use somc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "a.som", "x := 3");
    /// assert_eq!(file.extract_range(2, 4), Ok(":="));
    /// assert!(file.extract_range(4, 2).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        if !self.content.is_char_boundary(start) || !self.content.is_char_boundary(end) {
            return Err(SourceMapError::NotCharBoundary { start, end });
        }

        Ok(&self.content[start..end])
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A source map managing multiple source files
///
/// # Examples
///
/// ```
/// use somc_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let id = map.add_file("Hello.som", "Hello = ()");
/// assert_eq!(map.get(id).unwrap().name(), "Hello.som");
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create a new empty source map
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a file and return its identifier
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        self.files.push(Arc::new(SourceFile::new(id, name, content)));
        FileId(id)
    }

    /// Look up a file by identifier
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    /// Number of registered files
    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Render a span as a `--> file:line:col` header followed by the source
    /// line and a caret underline
    ///
    /// The underline counts characters, not bytes, and stops at the end of
    /// the rendered line. Returns `None` if the file or the line does not
    /// exist.
    pub fn format_span(&self, span: Span) -> Option<String> {
        let file = self.get(span.file_id)?;
        let line = file.line_at(span.line as usize)?;
        let width = file.line_count().to_string().len().max(3);

        let mut result = format!("--> {}:{}:{}\n", file.name(), span.line, span.column);
        result.push_str(&format!("{:>width$} | {}\n", span.line, line, width = width));
        result.push_str(&format!("{:>width$} | ", "", width = width));

        let underline_start = (span.column as usize).saturating_sub(1);
        let span_width = file
            .extract_range(span.start, span.end)
            .map(|text| text.chars().count())
            .unwrap_or(0);
        let line_rest = line.chars().count().saturating_sub(underline_start);
        let underline_len = span_width.min(line_rest).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        Some(result)
    }
}
