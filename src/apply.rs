use tracing::{span, trace, Level};

use crate::error::ThemeError;
use crate::markup::{Attributes, ClassList, Element, Markup};
use crate::theme::Theme;

/// Walk `node` and return a fresh tree with theme classes merged into every
/// element whose tag specifier has an entry in `theme`. Tree shape, child
/// order and non-class attributes are preserved exactly; scalars and absent
/// values come back unchanged. Neither input is mutated
pub fn apply_theme(node: &Markup, theme: &Theme) -> Result<Markup, ThemeError> {
    theme.validate()?;
    let span = span!(Level::DEBUG, "Applying theme");
    let _enter = span.enter();
    apply_node(node, theme)
}

fn apply_node(node: &Markup, theme: &Theme) -> Result<Markup, ThemeError> {
    match node {
        // The recursion's base case: the engine is the identity on non-nodes
        Markup::Text(_) | Markup::Nothing => Ok(node.clone()),
        Markup::Element(element) => apply_element(element, theme).map(Markup::Element),
    }
}

fn apply_element(element: &Element, theme: &Theme) -> Result<Element, ThemeError> {
    if element.tag.is_empty() {
        return Err(ThemeError::MalformedNode(
            "element has an empty tag specifier".to_string(),
        ));
    }
    let contributed = theme.classes_for(&element.tag);
    if let Some(classes) = contributed {
        trace!(tag = %element.tag, ?classes, "theme entry matched");
    }
    let attributes = merge_attributes(element.attributes.as_ref(), contributed);
    let children = element
        .children
        .iter()
        .map(|child| apply_node(child, theme))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Element {
        tag: element.tag.clone(),
        attributes,
        children,
    })
}

/// Merge rule: theme-contributed classes first in theme order, the node's own
/// classes after in their original order, plain concatenation (a class named
/// by both sources appears twice). A node without an attribute map only gains
/// one when the merge actually produces classes
fn merge_attributes(
    current: Option<&Attributes>,
    contributed: Option<&ClassList>,
) -> Option<Attributes> {
    match (current, contributed) {
        (None, None) => None,
        (None, Some(classes)) if classes.is_empty() => None,
        (None, Some(classes)) => Some(Attributes::with_class(classes.clone())),
        (Some(attrs), None) => Some(attrs.clone()),
        (Some(attrs), Some(classes)) => {
            let mut merged = attrs.clone();
            merged.class = classes.iter().chain(attrs.class.iter()).cloned().collect();
            Some(merged)
        }
    }
}

#[cfg(test)]
#[test]
fn test_merge_is_theme_first() {
    let attrs = Attributes::with_class("mine");
    let contributed: ClassList = "shadow rounded".into();
    let merged = merge_attributes(Some(&attrs), Some(&contributed)).unwrap();
    assert_eq!(
        &*merged.class,
        &[
            "shadow".to_string(),
            "rounded".to_string(),
            "mine".to_string()
        ]
    );
}

#[cfg(test)]
#[test]
fn test_merge_never_injects_vacuous_map() {
    assert_eq!(merge_attributes(None, None), None);
    assert_eq!(merge_attributes(None, Some(&ClassList::new())), None);
    // an existing map survives even when nothing merges in
    let attrs = crate::attributes!("id" => "cover");
    assert_eq!(merge_attributes(Some(&attrs), None), Some(attrs));
}
