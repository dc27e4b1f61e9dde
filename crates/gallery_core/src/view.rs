//! The page the controller renders into.

use serde_json::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    Active,
    Hidden,
}

impl SlideState {
    pub fn class_name(self) -> &'static str {
        match self {
            SlideState::Active => "active",
            SlideState::Hidden => "hidden",
        }
    }
}

/// An action button inside the information panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionElement {
    /// `data-property`; buttons without it are not actions.
    pub property: Option<String>,
    /// Raw `data-id`.
    pub id: Option<String>,
    pub href: Option<String>,
}

impl ActionElement {
    pub fn new(property: impl Into<String>, id: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            property: Some(property.into()),
            id: Some(id.into()),
            href: Some(href.into()),
        }
    }

    pub fn is_action(&self) -> bool {
        self.property.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// `data-id` read as a JavaScript `Number`; `None` stands for `NaN`.
    pub fn target_number(&self) -> Option<Number> {
        parse_js_number(self.id.as_deref().unwrap_or_default())
    }
}

pub(crate) fn parse_js_number(raw: &str) -> Option<Number> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Number::from(0));
    }

    let lower = trimmed.to_ascii_lowercase();
    let radix_literal = [("0x", 16), ("0o", 8), ("0b", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| lower.strip_prefix(prefix).map(|digits| (digits, radix)));
    let value = if let Some((digits, radix)) = radix_literal {
        parse_unsigned_radix(digits, radix)?
    } else if lower.contains("inf") || lower.contains("nan") {
        return None;
    } else {
        trimmed.parse::<f64>().ok()?
    };

    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        return Some(Number::from(value as i64));
    }
    Number::from_f64(value)
}

/// Digits of a `0x`/`0o`/`0b` literal. Signs and empty digit runs are `NaN` in JS.
fn parse_unsigned_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0f64, |acc, ch| {
        ch.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

/// Rendering surface: slides, information panel, comment list and comment form.
///
/// Markup comes from a [`crate::templates::Templates`] implementation; the view
/// only places it.
pub trait GalleryView {
    fn render_slides(&mut self, markup: String);
    /// Fails when `index` does not name a rendered slide.
    fn set_slide_state(&mut self, index: usize, state: SlideState) -> crate::Result<()>;
    fn render_information(&mut self, markup: String);
    fn render_comments(&mut self, markup: String);
    fn append_comment(&mut self, markup: String);
    /// Writes `total` into the count display nested in `element`.
    fn update_action_total(&mut self, element: &ActionElement, total: &Number);
    fn reset_form(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_data_id_like_js_number() {
        assert_eq!(parse_js_number("5"), Some(Number::from(5)));
        assert_eq!(parse_js_number(" 12 "), Some(Number::from(12)));
        assert_eq!(parse_js_number(""), Some(Number::from(0)));
        assert_eq!(parse_js_number("0x1f"), Some(Number::from(31)));
        assert_eq!(parse_js_number("0b101"), Some(Number::from(5)));
        assert_eq!(parse_js_number("0O17"), Some(Number::from(15)));
        assert_eq!(parse_js_number("0x+1"), None);
        assert_eq!(parse_js_number("0x-1"), None);
        assert_eq!(parse_js_number("-0x1"), None);
        assert_eq!(parse_js_number("0b"), None);
        assert_eq!(parse_js_number("0b102"), None);
        assert_eq!(parse_js_number("2.5"), Number::from_f64(2.5));
        assert_eq!(parse_js_number("abc"), None);
        assert_eq!(parse_js_number("Infinity"), None);
    }

    #[test]
    fn elements_without_a_marker_are_not_actions() {
        let mut element = ActionElement::new("likes", "1", "/photos/like");
        assert!(element.is_action());
        element.property = Some(String::new());
        assert!(!element.is_action());
        assert!(!ActionElement::default().is_action());
    }
}
