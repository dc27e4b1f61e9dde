//! Comment form model and its `application/x-www-form-urlencoded` body.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementTag {
    Input,
    Textarea,
    Select,
    Button,
}

impl ElementTag {
    fn is_serialized(self) -> bool {
        matches!(self, ElementTag::Input | ElementTag::Textarea)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormElement {
    pub tag: ElementTag,
    pub name: String,
    pub value: String,
}

impl FormElement {
    pub fn input(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: ElementTag::Input,
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn textarea(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: ElementTag::Textarea,
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Snapshot of a submitted form: its `action` attribute and controls in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub action: Option<String>,
    pub elements: Vec<FormElement>,
}

impl FormSubmission {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            elements: Vec::new(),
        }
    }

    pub fn with_element(mut self, element: FormElement) -> Self {
        self.elements.push(element);
        self
    }

    /// `key=value` pairs of every input and textarea, percent-encoded and joined by `&`.
    pub fn encode(&self) -> String {
        self.elements
            .iter()
            .filter(|element| element.tag.is_serialized())
            .map(|element| {
                format!(
                    "{}={}",
                    utf8_percent_encode(&element.name, URI_COMPONENT),
                    utf8_percent_encode(&element.value, URI_COMPONENT)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
