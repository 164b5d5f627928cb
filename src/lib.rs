//! Build-time theming for BEM-style markup trees.
//!
//! A markup tree names its nodes with structural, BEM-flavored tag specifiers
//! (`div.book-card`, `span.book-card__title`) and carries no presentation
//! classes of its own. A [`Theme`] maps those specifiers, verbatim, to the
//! presentation classes they should receive. [`apply_theme`] walks the tree
//! once and merges the theme's classes into each matching node's attribute
//! map, theme classes first, without touching tree shape, child order or any
//! non-class attribute. Running the rewrite before markup reaches its
//! rendering target keeps styling metadata out of the markup source entirely.

/// The markup tree model
pub mod markup;
/// Theme mappings keyed by tag specifier
pub mod theme;
/// Application of a theme to a markup tree
mod apply;
/// Error taxonomy
mod error;

pub use apply::apply_theme;
pub use error::ThemeError;
pub use markup::{Attributes, ClassList, Element, Markup, TagSpec};
pub use theme::Theme;
