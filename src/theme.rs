use std::collections::HashMap;

use crate::error::ThemeError;
use crate::markup::{ClassList, TagSpec};

/// A caller-assembled mapping from tag specifier to the classes the theme
/// contributes to matching nodes. Lookup is exact-key on the full specifier;
/// a theme is expected to be partial, so unmatched specifiers are a no-op
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme(HashMap<TagSpec, ClassList>);

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: impl Into<TagSpec>, classes: impl Into<ClassList>) {
        self.0.insert(tag.into(), classes.into());
    }

    /// The classes this theme contributes for a tag specifier, if any
    pub fn classes_for(&self, tag: &TagSpec) -> Option<&ClassList> {
        self.0.get(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every key must be a usable tag specifier. The type already guarantees
    /// a mapping, so an empty key is the one invalid-theme condition left
    pub(crate) fn validate(&self) -> Result<(), ThemeError> {
        if self.0.keys().any(TagSpec::is_empty) {
            Err(ThemeError::InvalidTheme(
                "theme key is an empty tag specifier".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl<T: Into<TagSpec>, C: Into<ClassList>> FromIterator<(T, C)> for Theme {
    fn from_iter<I: IntoIterator<Item = (T, C)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(tag, classes)| (tag.into(), classes.into()))
                .collect(),
        )
    }
}

#[macro_export]
macro_rules! theme {
    ($($tag:expr => [$($class:expr),* $(,)?]),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut theme = $crate::theme::Theme::new();
        $(theme.insert($tag, $crate::classes![$($class),*]);)*
        theme
    }};
}

#[cfg(test)]
#[test]
fn test_exact_key_lookup() {
    let theme = theme! {
        "div.card" => ["shadow"],
        "div.card.featured" => ["ring"],
    };
    assert_eq!(theme.len(), 2);
    let shadow = theme.classes_for(&TagSpec::from("div.card"));
    assert_eq!(shadow, Some(&crate::classes!["shadow"]));
    // keys are whole strings, never class sets
    let featured = theme.classes_for(&TagSpec::from("div.card.featured"));
    assert_eq!(featured, Some(&crate::classes!["ring"]));
    assert_eq!(theme.classes_for(&TagSpec::from("div")), None);
}

#[cfg(test)]
#[test]
fn test_validate_rejects_empty_key() {
    let mut theme = Theme::new();
    theme.insert("", crate::classes!["x"]);
    assert!(theme.validate().is_err());
    assert!(Theme::new().validate().is_ok());
}
