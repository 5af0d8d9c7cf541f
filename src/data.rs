use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::color::ColorKey;
use crate::types::{AnnotationId, PageIndex};

/// Sub-kind of a text-markup annotation, used for icon selection.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TextMarkupKind {
    Highlight,
    StrikeOut,
    Underline,
    Squiggly,
}

/// Annotation discriminant, used only to select a display icon.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnnotationKind {
    /// Plain text (sticky-note) annotation.
    Text,
    /// Text-markup annotation with its sub-kind.
    TextMarkup(TextMarkupKind),
    /// File attachment annotation.
    Attachment,
    /// Any other annotation kind; carries no icon.
    Other,
}

/// Markup capability payload: the color/label/contents set that qualifies an
/// annotation for grouping and display. Annotations without it are skipped.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarkupProperties {
    /// Grouping color.
    pub color: ColorKey,
    /// Author-facing label.
    pub label: String,
    /// Modification timestamp as provided by the backend, rendered verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    /// Free-form text contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

/// A document-page annotation record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Annotation {
    /// Stable identifier provided by the document backend.
    pub id: AnnotationId,
    /// Discriminant used for icon selection.
    pub kind: AnnotationKind,
    /// Markup capability; `None` excludes the annotation from every group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup: Option<MarkupProperties>,
}

impl Annotation {
    /// Whether this annotation carries the markup capability set.
    pub fn has_markup(&self) -> bool {
        self.markup.is_some()
    }
}

/// Rectangular page area attached to a mapping. Carried through to
/// activation consumers; the grouping engine never interprets it.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PageArea {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Annotation payload plus its page geometry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnnotationMapping {
    /// Page area covered by the annotation.
    pub area: PageArea,
    /// The annotation record itself.
    pub annotation: Annotation,
}

/// Ordered annotation mappings for a single page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageAnnotations {
    /// Zero-based page index.
    pub page: PageIndex,
    /// Mappings in document order for this page.
    pub entries: Vec<AnnotationMapping>,
}

/// Result of one completed annotation fetch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnnotationSet {
    /// Per-page annotation collections in page order.
    pub pages: Vec<PageAnnotations>,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
}

impl AnnotationSet {
    /// Wrap fetched pages, stamping the completion time.
    pub fn new(pages: Vec<PageAnnotations>) -> Self {
        Self {
            pages,
            fetched_at: Utc::now(),
        }
    }

    /// Total number of annotation mappings across all pages.
    pub fn annotation_count(&self) -> usize {
        self.pages.iter().map(|page| page.entries.len()).sum()
    }

    /// `true` when the fetch yielded zero annotations. Pages without
    /// entries do not count as content.
    pub fn is_empty(&self) -> bool {
        self.annotation_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(id: &str) -> AnnotationMapping {
        AnnotationMapping {
            area: PageArea::default(),
            annotation: Annotation {
                id: id.to_string(),
                kind: AnnotationKind::Text,
                markup: None,
            },
        }
    }

    #[test]
    fn annotation_set_counts_across_pages() {
        let set = AnnotationSet::new(vec![
            PageAnnotations {
                page: 0,
                entries: vec![mapping("a"), mapping("b")],
            },
            PageAnnotations {
                page: 3,
                entries: vec![mapping("c")],
            },
        ]);
        assert_eq!(set.annotation_count(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn pages_without_entries_are_empty_content() {
        let set = AnnotationSet::new(vec![
            PageAnnotations {
                page: 0,
                entries: Vec::new(),
            },
            PageAnnotations {
                page: 1,
                entries: Vec::new(),
            },
        ]);
        assert!(set.is_empty());
    }
}
