//! Widget-scoped identifier composition.

use web_sys::HtmlElement;

use crate::query::{LookupError, element_by_id};

/// The identifier namespace of one widget instance.
///
/// Node ids inside a widget layout are dotted paths under the widget's
/// numeric prefix: `<widget number>.<item>.<sub item>`. A `WidgetScope`
/// captures the prefix once so widget logic does not repeat the string
/// concatenation at every lookup site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetScope {
    prefix: String,
}

impl WidgetScope {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The scope's bare prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Joins the prefix and `segments` with `.`, prefix first, segments
    /// in call order. No segments yields the bare prefix.
    pub fn compose(&self, segments: &[&str]) -> String {
        let mut id = self.prefix.clone();
        for segment in segments {
            id.push('.');
            id.push_str(segment);
        }
        id
    }

    /// Resolves the composed identifier in the active document.
    ///
    /// Inherits the failure behavior of [`element_by_id`]:
    /// `WidgetScope::new("1").element(&["foo", "bar"])` behaves exactly
    /// as `element_by_id("1.foo.bar")`.
    pub fn element(&self, segments: &[&str]) -> Result<HtmlElement, LookupError> {
        element_by_id(&self.compose(segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_prefix_first_in_call_order() {
        let scope = WidgetScope::new("1");
        assert_eq!(scope.compose(&["foo", "bar"]), "1.foo.bar");
    }

    #[test]
    fn no_segments_is_the_bare_prefix() {
        let scope = WidgetScope::new("42");
        assert_eq!(scope.compose(&[]), "42");
        assert_eq!(scope.prefix(), "42");
    }

    #[test]
    fn single_segment() {
        assert_eq!(WidgetScope::new("7").compose(&["close"]), "7.close");
    }
}
