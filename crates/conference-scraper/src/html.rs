//! Typed view of HTML fragments.
//!
//! `scraper` hands out untyped DOM node references; [`Node`] narrows them to
//! the two shapes the extractors care about, text and elements. Walks over it
//! are loops, so nesting depth is bounded by the page, not the call stack.

use scraper::ElementRef;

/// A DOM node borrowed from a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    /// Text leaf.
    Text(&'a str),
    /// Element; its children are read from the document on demand.
    Element(ElementRef<'a>),
}

impl<'a> Node<'a> {
    /// Tag name of an element; a text leaf has none.
    #[must_use]
    pub fn tag(self) -> Option<&'a str> {
        match self {
            Self::Text(_) => None,
            Self::Element(element) => Some(element.value().name()),
        }
    }

    /// Children of an element in document order; a text leaf has none.
    pub fn children(self) -> impl Iterator<Item = Self> {
        let element = match self {
            Self::Text(_) => None,
            Self::Element(element) => Some(element),
        };
        // Comments and other node kinds are skipped.
        element
            .into_iter()
            .flat_map(|element| element.children())
            .filter_map(|child| match child.value() {
                scraper::Node::Text(text) => {
                    let text: &'a str = text;
                    Some(Self::Text(text))
                }
                scraper::Node::Element(_) => ElementRef::wrap(child).map(Self::Element),
                _ => None,
            })
    }

    /// Follow first children down to a text leaf.
    ///
    /// Returns `None` when an element on the way is empty.
    #[must_use]
    pub fn first_leaf(self) -> Option<&'a str> {
        let mut node = self;
        loop {
            match node {
                Self::Text(text) => return Some(text),
                Self::Element(_) => node = node.children().next()?,
            }
        }
    }

    /// Concatenate the first leaf of every child, in document order.
    ///
    /// This is how titles with inline formatting (`<i>`, `<sub>`, ...) are read.
    #[must_use]
    pub fn leaf_text(self) -> String {
        self.children().filter_map(Self::first_leaf).collect()
    }
}

impl<'a> From<ElementRef<'a>> for Node<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Self::Element(element)
    }
}

/// All text below an element, trimmed.
#[must_use]
pub fn inner_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
