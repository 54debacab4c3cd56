use scraper::{ElementRef, Selector};

use crate::selectors::SelectorError;

/// Counts the characters that would be visible, ignoring all whitespace.
pub fn visible_char_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Pulls headline and body text out of a candidate element.
///
/// Headline resolution follows a strict fallback order: first `h1`-`h4`
/// descendant in document order, then the `title` attribute, then
/// `aria-label`. Only the first non-empty hit is used, never a
/// concatenation.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    headline: Selector,
}

impl TextExtractor {
    pub fn new() -> Result<Self, SelectorError> {
        let css = "h1, h2, h3, h4";
        let headline = Selector::parse(css).map_err(|err| SelectorError::Parse {
            css: css.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self { headline })
    }

    pub fn headline_text(&self, element: ElementRef<'_>) -> String {
        if let Some(heading) = element.select(&self.headline).next() {
            return heading.text().collect::<String>().trim().to_string();
        }
        if let Some(title) = non_empty_attr(element, "title") {
            return title;
        }
        non_empty_attr(element, "aria-label").unwrap_or_default()
    }

    /// Concatenated text content of the subtree. There is no renderer here,
    /// so text content stands in for rendered text.
    pub fn body_text(&self, element: ElementRef<'_>) -> String {
        element.text().collect::<String>()
    }
}

fn non_empty_attr(element: ElementRef<'_>, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
