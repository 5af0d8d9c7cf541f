#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Color keys and hex formatting.
pub mod color;
/// Centralized constants for icons, messages, and swatch rendering.
pub mod constants;
/// Annotation data model types.
pub mod data;
/// Color-partitioning engine.
pub mod grouping;
/// Background annotation fetch jobs.
pub mod job;
/// Row rendering helpers (tooltips, markup, icons, swatches).
pub mod render;
/// Sidebar load controller and presentation seams.
pub mod sidebar;
/// Document-source interfaces and built-in sources.
pub mod source;
/// Published display tree and row addressing.
pub mod tree;
/// Shared type aliases.
pub mod types;

mod errors;

pub use color::ColorKey;
pub use data::{
    Annotation, AnnotationKind, AnnotationMapping, AnnotationSet, MarkupProperties,
    PageAnnotations, PageArea, TextMarkupKind,
};
pub use errors::SidebarError;
pub use grouping::{build_groups, ColorGroup};
pub use job::AnnotationJob;
pub use sidebar::{AnnotationSidebar, LoadStats, MenuAnchor, PresentationSurface};
pub use source::{AnnotationSource, InMemoryDocument};
pub use tree::{AnnotationRef, DisplayTree, GroupNode, LeafNode, RowKey, SidebarModel};
pub use types::{AnnotationId, IconId, MarkupText, PageIndex, SourceId};
