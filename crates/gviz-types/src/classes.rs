//! Class and attribute names shared between the engine and the layout rules.
//!
//! These are the presentation flags the parse-log page is written against.
//! The engine toggles them; the layout engine interprets them.

/// Marks an element as a collapsible region.
pub const ABV: &str = "abv";
/// Structural wrapper inserted around each collapsible region.
pub const ABV_WRAPPER: &str = "abv-wrapper";
/// Ellipsis placeholder shown in place of an abbreviated region.
pub const DIARESIS: &str = "diaresis";
/// Set on a wrapper whose region is collapsed.
pub const ABBREVIATED: &str = "abbreviated";
/// Set on an ancestor region that failed the one-line fit test.
pub const OVERFLOWS: &str = "overflows";

pub const OR: &str = "or";
pub const DETAIL_LONG: &str = "detail:long";
pub const EMPTY: &str = "empty";
pub const MULTILINE: &str = "multiline";

pub const ENTRY: &str = "entry";
pub const CURRENT: &str = "current";
pub const SLIDESHOW: &str = "slideshow";

/// Placeholder text carried by every wrapper.
pub const ELLIPSIS: &str = "\u{2026}";

/// Cache attribute for synthesized line heights.
pub const DATA_LINE_HEIGHT: &str = "data-line-height";

/// Id of the grammar table.
pub const GRAMMAR_ID: &str = "grammar";
/// Id of the `ul` holding the `li.entry` log entries.
pub const PARSE_LOG_ID: &str = "parse-log";
