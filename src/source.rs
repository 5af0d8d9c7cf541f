//! Document-source interface and built-in sources.

use std::sync::Arc;

use crate::data::PageAnnotations;
use crate::errors::SidebarError;
use crate::types::SourceId;

/// Sidebar-facing document interface.
///
/// `fetch_annotations` is invoked from a background job thread and should
/// enumerate all annotations across all pages in page order. For a fixed
/// document state the output should be deterministic.
pub trait AnnotationSource: Send + Sync {
    /// Stable source identifier used in logging.
    fn id(&self) -> &str;

    /// Whether this document can carry annotations at all. Documents that
    /// cannot are rejected at attach time.
    fn supports_annotations(&self) -> bool {
        true
    }

    /// Enumerate every annotation across all pages.
    ///
    /// Returning an error is equivalent to returning zero annotations: the
    /// sidebar degrades to its empty-state placeholder.
    fn fetch_annotations(&self) -> Result<Vec<PageAnnotations>, SidebarError>;
}

/// In-memory document for tests and prebuilt page sets.
pub struct InMemoryDocument {
    id: SourceId,
    pages: Arc<Vec<PageAnnotations>>,
}

impl InMemoryDocument {
    /// Create a document from prebuilt per-page annotations.
    pub fn new(id: impl Into<SourceId>, pages: Vec<PageAnnotations>) -> Self {
        Self {
            id: id.into(),
            pages: Arc::new(pages),
        }
    }
}

impl AnnotationSource for InMemoryDocument {
    fn id(&self) -> &str {
        &self.id
    }

    fn fetch_annotations(&self) -> Result<Vec<PageAnnotations>, SidebarError> {
        Ok(self.pages.as_ref().clone())
    }
}
