/// Icon identifiers selected per annotation kind.
pub mod icons {
    /// Icon for plain text (sticky-note) annotations.
    pub const ANNOT_TEXT: &str = "annotations-text-symbolic";
    /// Icon for attachment annotations.
    pub const ATTACHMENT: &str = "mail-attachment-symbolic";
    /// Icon for highlight text-markup annotations.
    pub const HIGHLIGHT: &str = "format-justify-left-symbolic";
    /// Icon for strike-out text-markup annotations.
    pub const STRIKE_OUT: &str = "format-text-strikethrough-symbolic";
    /// Icon for underline text-markup annotations.
    pub const UNDERLINE: &str = "format-text-underline-symbolic";
    /// Icon for squiggly text-markup annotations.
    pub const SQUIGGLY: &str = "annotations-squiggly-symbolic";
}

/// Constants used by sidebar placeholder rows and group swatches.
pub mod sidebar {
    /// Placeholder message shown before the first fetch completes.
    pub const LOADING_MESSAGE: &str = "Loading…";
    /// Placeholder message shown when a fetch yields zero annotations.
    pub const NO_ANNOTATIONS_MESSAGE: &str = "Document contains no annotations";
    /// Filler glyphs rendered on the group color swatch.
    pub const SWATCH_FILLER: &str = "*****";
    /// Fixed contrasting foreground used on group color swatches.
    pub const SWATCH_FOREGROUND: &str = "white";
}
