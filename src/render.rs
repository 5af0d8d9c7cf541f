//! Row rendering helpers: tooltips, body markup, icons, and color swatches.

use crate::color::ColorKey;
use crate::constants::{icons, sidebar};
use crate::data::{AnnotationKind, MarkupProperties, TextMarkupKind};
use crate::types::IconId;

/// Tooltip for a leaf row: the bold label, followed by the modification
/// timestamp on a new line when one is present.
pub fn tooltip_markup(props: &MarkupProperties) -> String {
    match props.modified.as_deref() {
        Some(modified) => format!(
            "<span weight=\"bold\">{}</span>\n{}",
            props.label, modified
        ),
        None => format!("<span weight=\"bold\">{}</span>", props.label),
    }
}

/// Body markup for a leaf row: the verbatim contents when present,
/// otherwise the tooltip text.
pub fn body_markup(props: &MarkupProperties) -> String {
    match props.contents.as_deref() {
        Some(contents) => contents.to_string(),
        None => tooltip_markup(props),
    }
}

/// Icon identifier for an annotation kind, `None` when the kind carries no
/// icon.
pub fn icon_for(kind: AnnotationKind) -> Option<IconId> {
    match kind {
        AnnotationKind::Text => Some(icons::ANNOT_TEXT),
        AnnotationKind::Attachment => Some(icons::ATTACHMENT),
        AnnotationKind::TextMarkup(TextMarkupKind::Highlight) => Some(icons::HIGHLIGHT),
        AnnotationKind::TextMarkup(TextMarkupKind::StrikeOut) => Some(icons::STRIKE_OUT),
        AnnotationKind::TextMarkup(TextMarkupKind::Underline) => Some(icons::UNDERLINE),
        AnnotationKind::TextMarkup(TextMarkupKind::Squiggly) => Some(icons::SQUIGGLY),
        AnnotationKind::Other => None,
    }
}

/// Group-header swatch: filler glyphs on a background equal to the group
/// color, with a fixed contrasting foreground.
pub fn swatch_markup(key: &ColorKey) -> String {
    format!(
        "<span background=\"{}\" foreground=\"{}\">{}</span>",
        key.to_hex(),
        sidebar::SWATCH_FOREGROUND,
        sidebar::SWATCH_FILLER
    )
}

/// Single-row placeholder markup used for loading and empty states.
pub fn placeholder_markup(message: &str) -> String {
    format!("<span size=\"larger\" style=\"italic\">{message}</span>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(label: &str, modified: Option<&str>, contents: Option<&str>) -> MarkupProperties {
        MarkupProperties {
            color: ColorKey::from_rgba8(255, 255, 0, 255),
            label: label.to_string(),
            modified: modified.map(|value| value.to_string()),
            contents: contents.map(|value| value.to_string()),
        }
    }

    #[test]
    fn tooltip_includes_timestamp_when_present() {
        let rendered = tooltip_markup(&props("Note", Some("2024-01-01"), None));
        assert_eq!(rendered, "<span weight=\"bold\">Note</span>\n2024-01-01");
    }

    #[test]
    fn tooltip_is_bold_label_alone_without_timestamp() {
        let rendered = tooltip_markup(&props("Note", None, None));
        assert_eq!(rendered, "<span weight=\"bold\">Note</span>");
    }

    #[test]
    fn body_prefers_verbatim_contents() {
        let rendered = body_markup(&props("Note", Some("2024-01-01"), Some("the text")));
        assert_eq!(rendered, "the text");
    }

    #[test]
    fn body_keeps_empty_contents_verbatim() {
        let rendered = body_markup(&props("Note", None, Some("")));
        assert_eq!(rendered, "");
    }

    #[test]
    fn body_falls_back_to_tooltip() {
        let rendered = body_markup(&props("Note", None, None));
        assert_eq!(rendered, "<span weight=\"bold\">Note</span>");
    }

    #[test]
    fn icons_map_per_kind() {
        assert_eq!(icon_for(AnnotationKind::Text), Some(icons::ANNOT_TEXT));
        assert_eq!(icon_for(AnnotationKind::Attachment), Some(icons::ATTACHMENT));
        assert_eq!(
            icon_for(AnnotationKind::TextMarkup(TextMarkupKind::Highlight)),
            Some(icons::HIGHLIGHT)
        );
        assert_eq!(
            icon_for(AnnotationKind::TextMarkup(TextMarkupKind::StrikeOut)),
            Some(icons::STRIKE_OUT)
        );
        assert_eq!(
            icon_for(AnnotationKind::TextMarkup(TextMarkupKind::Underline)),
            Some(icons::UNDERLINE)
        );
        assert_eq!(
            icon_for(AnnotationKind::TextMarkup(TextMarkupKind::Squiggly)),
            Some(icons::SQUIGGLY)
        );
        assert_eq!(icon_for(AnnotationKind::Other), None);
    }

    #[test]
    fn swatch_renders_group_color_as_background() {
        let rendered = swatch_markup(&ColorKey::from_rgba8(255, 255, 0, 255));
        assert_eq!(
            rendered,
            "<span background=\"#ffff00ff\" foreground=\"white\">*****</span>"
        );
    }

    #[test]
    fn placeholder_wraps_message() {
        assert_eq!(
            placeholder_markup("Loading…"),
            "<span size=\"larger\" style=\"italic\">Loading…</span>"
        );
    }
}
