use scraper::Selector;
use thiserror::Error;

/// Generic article/card/story selectors that work on most news sites.
pub const ARTICLE_SELECTORS: &[&str] = &[
    "article",
    r#"[role="article"]"#,
    ".article",
    ".story",
    ".news-item",
    ".news-card",
    ".card",
    ".promo",
    ".story-card",
    ".PromoLink",
    ".Card",
];

/// Selectors adapted to the YLE news site markup.
pub const SITE_SELECTORS: &[&str] = &[
    r#"article[class*="Article"]"#,
    r#"article[class*="Story"]"#,
    r#"[class*="article"]"#,
    r#"[class*="story"]"#,
    r#"[class*="news-item"]"#,
    "h1, h2, h3, h4",
    r#"a[href*="/a/"]"#,
    r#"[data-testid*="article"]"#,
    r#"[data-testid*="story"]"#,
];

#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("invalid selector list `{css}`: {message}")]
    Parse { css: String, message: String },
}

/// Compiled union of candidate selectors, resolved as one selector list so
/// matches come back in document order with duplicates collapsed.
#[derive(Debug, Clone)]
pub struct SelectorList {
    combined: Selector,
    css: String,
}

impl SelectorList {
    /// The fixed generic plus site-adapted selector union.
    pub fn standard() -> Result<Self, SelectorError> {
        let entries: Vec<&str> = ARTICLE_SELECTORS
            .iter()
            .chain(SITE_SELECTORS.iter())
            .copied()
            .collect();
        Self::from_css(&entries)
    }

    pub fn from_css(entries: &[&str]) -> Result<Self, SelectorError> {
        let css = entries.join(", ");
        let combined = Selector::parse(&css).map_err(|err| SelectorError::Parse {
            css: css.clone(),
            message: err.to_string(),
        })?;
        Ok(Self { combined, css })
    }

    pub(crate) fn combined(&self) -> &Selector {
        &self.combined
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}
