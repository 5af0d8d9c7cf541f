//! Color partitioning of fetched annotations.
//!
//! This module provides the pure, deterministic grouping pass: annotations
//! with the markup capability partition by exact color equality, groups are
//! discovered in first-encounter order, and members keep page order then
//! in-page order (same input => identical group order and member order,
//! every run).

use indexmap::IndexMap;

use crate::color::ColorKey;
use crate::data::{AnnotationMapping, PageAnnotations};

/// One color partition: a key plus its members in encounter order.
///
/// Members borrow from the fetched page set; a group exists only for the
/// duration of one grouping pass and is never merged or re-keyed.
#[derive(Clone, Debug)]
pub struct ColorGroup<'a> {
    /// The exact-match grouping key shared by every member.
    pub key: ColorKey,
    /// Member mappings in page order then in-page order.
    pub members: Vec<&'a AnnotationMapping>,
}

/// Partition `pages` into color groups.
///
/// Annotations without the markup capability are skipped entirely and never
/// appear in any group. The result never contains an empty group: a group is
/// only created alongside its first member.
pub fn build_groups(pages: &[PageAnnotations]) -> Vec<ColorGroup<'_>> {
    let mut buckets: IndexMap<ColorKey, Vec<&AnnotationMapping>> = IndexMap::new();
    for page in pages {
        for mapping in &page.entries {
            let Some(markup) = mapping.annotation.markup.as_ref() else {
                continue;
            };
            buckets.entry(markup.color).or_default().push(mapping);
        }
    }
    buckets
        .into_iter()
        // Groups are created with their first member, so empty buckets
        // cannot occur; kept as an explicit invariant check.
        .filter(|(_, members)| !members.is_empty())
        .map(|(key, members)| ColorGroup { key, members })
        .collect()
}
