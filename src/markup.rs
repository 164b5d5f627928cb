use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

/// The identifying string of a node (e.g. `div.book-card__picture`), used
/// whole as the theme-lookup key. Matching never decomposes it: `div.card`
/// and `div.card.extra` are distinct keys
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagSpec(String);

impl TagSpec {
    pub fn new(spec: impl Into<String>) -> Self {
        Self(spec.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The element part of the dot notation (`div` in `div.book-card`).
    /// Informational only; lookup uses the full spec verbatim
    pub fn element(&self) -> &str {
        self.0.split('.').next().unwrap_or("")
    }

    /// The structural class tokens of the dot notation, in order
    pub fn class_tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').skip(1)
    }
}

impl From<&str> for TagSpec {
    fn from(spec: &str) -> Self {
        Self(spec.to_string())
    }
}

impl From<String> for TagSpec {
    fn from(spec: String) -> Self {
        Self(spec)
    }
}

impl Borrow<str> for TagSpec {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered sequence of class names. Order is meaningful and duplicates
/// are kept; merging is a concatenation, never a set union
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, class: impl Into<String>) {
        self.0.push(class.into());
    }
}

impl Deref for ClassList {
    type Target = [String];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single string is split on whitespace, so `"shadow rounded"` is two classes
impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        Self(classes.split_whitespace().map(str::to_string).collect())
    }
}

impl From<String> for ClassList {
    fn from(classes: String) -> Self {
        classes.as_str().into()
    }
}

impl From<Vec<String>> for ClassList {
    fn from(classes: Vec<String>) -> Self {
        Self(classes)
    }
}

impl FromIterator<String> for ClassList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

/// A node's attribute map: the class-bearing field, normalized to a
/// [`ClassList`], plus every other key. Non-class keys are opaque to theming
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub class: ClassList,
    pub other: HashMap<String, String>,
}

impl Attributes {
    pub fn empty() -> Self {
        Self::default()
    }

    /// An attribute map carrying only a class field
    pub fn with_class(class: impl Into<ClassList>) -> Self {
        Self {
            class: class.into(),
            other: HashMap::new(),
        }
    }

    /// Insert a named attribute. `class` routes to the class field (a string
    /// value is split on whitespace); anything else is stored verbatim
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if name == "class" {
            self.class = ClassList::from(value.as_str());
        } else {
            self.other.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.other.get(name).map(String::as_str)
    }
}

/// A tagged element: tag specifier, optional attribute map, ordered children.
/// `attributes: None` models a node with no attribute map at all, which is
/// distinct from an empty one
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: TagSpec,
    pub attributes: Option<Attributes>,
    pub children: Vec<Markup>,
}

impl Element {
    pub fn new(
        tag: impl Into<TagSpec>,
        attributes: Option<Attributes>,
        children: Vec<Markup>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            children,
        }
    }

    /// The classes currently present on this node, in order
    pub fn classes(&self) -> &[String] {
        self.attributes.as_ref().map(|a| &a.class[..]).unwrap_or(&[])
    }

    /// Look up a non-class attribute by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.as_ref().and_then(|a| a.get(name))
    }

    /// Check if the class list contains the specified class
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }
}

/// A value in a markup tree: a tagged element, a text scalar, or nothing.
/// `Nothing` models a conditionally absent child and passes through theming
/// unchanged, as does `Text`
#[derive(Debug, Clone, PartialEq)]
pub enum Markup {
    Element(Element),
    Text(String),
    Nothing,
}

impl Markup {
    pub fn text(data: impl Into<String>) -> Self {
        Self::Text(data.into())
    }

    pub fn element(
        tag: impl Into<TagSpec>,
        attributes: Option<Attributes>,
        children: Vec<Markup>,
    ) -> Self {
        Self::Element(Element::new(tag, attributes, children))
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Markup::Element(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        if let Markup::Element(element) = self {
            Some(element)
        } else {
            None
        }
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Markup {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Markup {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for Markup {
    fn from(number: i64) -> Self {
        Self::Text(number.to_string())
    }
}

impl From<f64> for Markup {
    fn from(number: f64) -> Self {
        Self::Text(number.to_string())
    }
}

#[macro_export]
macro_rules! classes {
    ($($class:expr),* $(,)?) => {
        $crate::markup::ClassList::from(vec![$($class.to_string()),*])
    };
}

#[macro_export]
macro_rules! attributes {
    ($($name:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut attrs = $crate::markup::Attributes::empty();
        $(attrs.insert($name, $value);)*
        attrs
    }};
}

#[cfg(test)]
#[test]
fn test_class_normalization() {
    let single: ClassList = "shadow rounded".into();
    let listed: ClassList = classes!["shadow", "rounded"];
    assert_eq!(single, listed);
    assert_eq!(&*single, &["shadow".to_string(), "rounded".to_string()]);
    assert!(ClassList::from("").is_empty());
}

#[cfg(test)]
#[test]
fn test_attribute_insert_routes_class() {
    let attrs = attributes!("class" => "wide tall", "id" => "cover");
    assert_eq!(&*attrs.class, &["wide".to_string(), "tall".to_string()]);
    assert_eq!(attrs.get("id"), Some("cover"));
    assert_eq!(attrs.get("class"), None);
}

#[cfg(test)]
#[test]
fn test_tag_spec_decomposition() {
    let tag = TagSpec::from("div.book-card__picture.featured");
    assert_eq!(tag.element(), "div");
    assert_eq!(
        tag.class_tokens().collect::<Vec<_>>(),
        vec!["book-card__picture", "featured"]
    );
    assert_eq!(TagSpec::from("span").class_tokens().count(), 0);
}
