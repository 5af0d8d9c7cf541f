/// Stable annotation identifier provided by the document backend.
/// Example: `page3/annot-7`
pub type AnnotationId = String;
/// Zero-based page index within a document.
pub type PageIndex = usize;
/// Identifier for the document source that produced a fetch result.
/// Examples: `document`, `samples/annotated.pdf`
pub type SourceId = String;
/// Fixed icon identifier attached to a leaf row.
/// Examples: `mail-attachment-symbolic`, `format-text-underline-symbolic`
pub type IconId = &'static str;
/// Rendered markup text published in a row.
/// Example: `<span weight="bold">Reviewer</span>`
pub type MarkupText = String;
