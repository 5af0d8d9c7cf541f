//! Published display structures and row addressing.
//!
//! Ownership model:
//! - The grouping pass borrows from the fetched page set.
//! - `DisplayTree` is the owned artifact built from that pass; each leaf
//!   holds a shared back-reference to its originating mapping, so the tree
//!   outlives the raw fetch result.
//! - `SidebarModel` is the unit of publication: either real content or a
//!   single synthetic placeholder row.

use std::sync::Arc;

use crate::constants::sidebar;
use crate::data::AnnotationMapping;
use crate::grouping::ColorGroup;
use crate::render;
use crate::types::{IconId, MarkupText};

/// Shared back-reference from a published row to its annotation record.
pub type AnnotationRef = Arc<AnnotationMapping>;

/// A leaf row: one annotation inside a color group.
#[derive(Clone, Debug)]
pub struct LeafNode {
    /// Body markup shown in the row.
    pub markup: MarkupText,
    /// Icon identifier, when the annotation kind carries one.
    pub icon: Option<IconId>,
    /// Tooltip markup for the row.
    pub tooltip: MarkupText,
    /// Originating annotation record.
    pub annotation: AnnotationRef,
}

/// A group-header row plus its ordered leaves.
#[derive(Clone, Debug)]
pub struct GroupNode {
    /// Rendered color-swatch markup for the header row.
    pub swatch: MarkupText,
    /// Ordered leaves in encounter order.
    pub leaves: Vec<LeafNode>,
}

/// The two-level structure handed to the presentation surface.
#[derive(Clone, Debug, Default)]
pub struct DisplayTree {
    /// Groups in first-encounter order.
    pub groups: Vec<GroupNode>,
}

impl DisplayTree {
    /// Build the owned tree from one grouping pass.
    ///
    /// Members that lost their markup payload render no leaf, and a group
    /// whose members all failed to render is removed again, mirroring the
    /// grouping invariant that no empty group is ever published.
    pub fn from_groups(groups: Vec<ColorGroup<'_>>) -> Self {
        let groups = groups
            .into_iter()
            .map(|group| {
                let leaves = group
                    .members
                    .into_iter()
                    .filter_map(|mapping| {
                        let props = mapping.annotation.markup.as_ref()?;
                        Some(LeafNode {
                            markup: render::body_markup(props),
                            icon: render::icon_for(mapping.annotation.kind),
                            tooltip: render::tooltip_markup(props),
                            annotation: Arc::new(mapping.clone()),
                        })
                    })
                    .collect::<Vec<_>>();
                GroupNode {
                    swatch: render::swatch_markup(&group.key),
                    leaves,
                }
            })
            .filter(|node| !node.leaves.is_empty())
            .collect();
        Self { groups }
    }
}

/// Tagged address of a row within the published model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKey {
    /// A group-header row, by group position.
    Group(usize),
    /// A leaf row, by group position and member position.
    Leaf {
        /// Group position in the tree.
        group: usize,
        /// Member position within the group.
        member: usize,
    },
}

/// What the presentation surface currently shows.
#[derive(Clone, Debug)]
pub enum SidebarModel {
    /// Single synthetic row conveying a loading or empty state.
    Placeholder {
        /// Rendered placeholder markup.
        markup: MarkupText,
    },
    /// Real annotation content.
    Tree(DisplayTree),
}

impl SidebarModel {
    /// Placeholder model for an arbitrary message.
    pub fn placeholder(message: &str) -> Self {
        Self::Placeholder {
            markup: render::placeholder_markup(message),
        }
    }

    /// Placeholder shown before the first fetch completes.
    pub fn loading() -> Self {
        Self::placeholder(sidebar::LOADING_MESSAGE)
    }

    /// Placeholder shown when a fetch yields zero annotations.
    pub fn no_annotations() -> Self {
        Self::placeholder(sidebar::NO_ANNOTATIONS_MESSAGE)
    }

    /// Map a focused row back to its annotation record.
    ///
    /// Leaf rows resolve to their back-reference; group headers and
    /// placeholder rows carry no mapping.
    pub fn annotation_at(&self, row: RowKey) -> Option<&AnnotationRef> {
        let SidebarModel::Tree(tree) = self else {
            return None;
        };
        match row {
            RowKey::Group(_) => None,
            RowKey::Leaf { group, member } => tree
                .groups
                .get(group)
                .and_then(|node| node.leaves.get(member))
                .map(|leaf| &leaf.annotation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorKey;
    use crate::data::{Annotation, AnnotationKind, MarkupProperties, PageAnnotations, PageArea};
    use crate::grouping::build_groups;

    fn markup_mapping(id: &str, color: ColorKey) -> AnnotationMapping {
        AnnotationMapping {
            area: PageArea::default(),
            annotation: Annotation {
                id: id.to_string(),
                kind: AnnotationKind::TextMarkup(crate::data::TextMarkupKind::Highlight),
                markup: Some(MarkupProperties {
                    color,
                    label: format!("label {id}"),
                    modified: None,
                    contents: Some(format!("contents {id}")),
                }),
            },
        }
    }

    fn tree_for(pages: &[PageAnnotations]) -> DisplayTree {
        DisplayTree::from_groups(build_groups(pages))
    }

    #[test]
    fn leaves_carry_back_references() {
        let pages = vec![PageAnnotations {
            page: 1,
            entries: vec![markup_mapping("a", ColorKey::from_rgba8(0, 0, 255, 255))],
        }];
        let tree = tree_for(&pages);
        assert_eq!(tree.groups.len(), 1);
        let leaf = &tree.groups[0].leaves[0];
        assert_eq!(leaf.annotation.annotation.id, "a");
        assert_eq!(leaf.markup, "contents a");
        assert_eq!(leaf.tooltip, "<span weight=\"bold\">label a</span>");
        assert!(leaf.icon.is_some());
    }

    #[test]
    fn groups_without_renderable_members_are_removed() {
        let bare = AnnotationMapping {
            area: PageArea::default(),
            annotation: Annotation {
                id: "bare".into(),
                kind: AnnotationKind::Other,
                markup: None,
            },
        };
        let group = ColorGroup {
            key: ColorKey::from_rgba8(1, 2, 3, 255),
            members: vec![&bare],
        };
        let tree = DisplayTree::from_groups(vec![group]);
        assert!(tree.groups.is_empty());
    }

    #[test]
    fn annotation_at_maps_leaves_only() {
        let pages = vec![PageAnnotations {
            page: 0,
            entries: vec![
                markup_mapping("a", ColorKey::from_rgba8(9, 9, 9, 255)),
                markup_mapping("b", ColorKey::from_rgba8(9, 9, 9, 255)),
            ],
        }];
        let model = SidebarModel::Tree(tree_for(&pages));

        assert!(model.annotation_at(RowKey::Group(0)).is_none());
        let leaf = model
            .annotation_at(RowKey::Leaf {
                group: 0,
                member: 1,
            })
            .expect("leaf row maps to its annotation");
        assert_eq!(leaf.annotation.id, "b");
        assert!(model
            .annotation_at(RowKey::Leaf {
                group: 0,
                member: 2,
            })
            .is_none());
    }

    #[test]
    fn placeholder_rows_carry_no_mapping() {
        let model = SidebarModel::no_annotations();
        assert!(model
            .annotation_at(RowKey::Leaf {
                group: 0,
                member: 0,
            })
            .is_none());
        let SidebarModel::Placeholder { markup } = &model else {
            panic!("expected placeholder model");
        };
        assert!(markup.contains(sidebar::NO_ANNOTATIONS_MESSAGE));
    }
}
