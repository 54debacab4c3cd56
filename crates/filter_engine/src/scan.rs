use scraper::ElementRef;
use thiserror::Error;

use crate::extract::{visible_char_count, TextExtractor};
use crate::keywords::{KeywordError, KeywordSet};
use crate::markers::MarkerMap;
use crate::selectors::{SelectorError, SelectorList};
use crate::PageDocument;

/// Candidates with fewer non-whitespace characters than this in their body
/// text are too short to be real articles and are skipped.
pub const MIN_BODY_CHARS: usize = 10;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Keyword(#[from] KeywordError),
    #[error(transparent)]
    Selector(#[from] SelectorError),
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("document has no root element")]
    DetachedDocument,
}

/// Counters from one scan pass, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanReport {
    /// Candidates that reached evaluation (including already-processed ones).
    pub examined: usize,
    /// Candidates hidden by this pass.
    pub newly_hidden: usize,
    /// Candidates skipped by the minimum-length gate.
    pub skipped_short: usize,
    /// Candidates skipped because they or an ancestor were already hidden.
    pub skipped_hidden: usize,
    /// Nodes un-hidden by a disabled pass.
    pub unhidden: usize,
}

/// One scan pass over a document: resolve candidates, extract text, hide
/// keyword matches, and mark everything visited as processed.
#[derive(Debug, Clone)]
pub struct Scanner {
    keywords: KeywordSet,
    selectors: SelectorList,
    extractor: TextExtractor,
}

impl Scanner {
    pub fn new(keywords: KeywordSet, selectors: SelectorList) -> Result<Self, SelectorError> {
        Ok(Self {
            keywords,
            selectors,
            extractor: TextExtractor::new()?,
        })
    }

    /// Scanner with the production keyword list and selector union.
    pub fn standard() -> Result<Self, BuildError> {
        Ok(Self::new(KeywordSet::standard()?, SelectorList::standard()?)?)
    }

    /// Runs one full pass. When disabled, the pass un-hides everything and
    /// does nothing else; the reversal is full, not incremental.
    pub fn scan(
        &self,
        doc: &PageDocument,
        markers: &mut MarkerMap,
        enabled: bool,
    ) -> Result<ScanReport, ScanError> {
        let mut report = ScanReport::default();

        if !enabled {
            report.unhidden = markers.clear_hidden();
            return Ok(report);
        }

        if doc.root().is_none() {
            return Err(ScanError::DetachedDocument);
        }

        for element in doc.html().select(self.selectors.combined()) {
            let id = element.id();

            // A hidden ancestor already suppresses this node; re-evaluating
            // it would be double work. Self-hidden nodes are settled too.
            if markers.is_hidden(id)
                || element.ancestors().any(|node| markers.is_hidden(node.id()))
            {
                report.skipped_hidden += 1;
                continue;
            }

            let body = self.extractor.body_text(element);
            if visible_char_count(&body) < MIN_BODY_CHARS {
                report.skipped_short += 1;
                continue;
            }

            report.examined += 1;
            if self.evaluate(element, &body, markers) {
                report.newly_hidden += 1;
            }
        }

        Ok(report)
    }

    /// Decides one node. Idempotent: processed or hidden nodes are left
    /// untouched until markers are explicitly cleared.
    fn evaluate(&self, element: ElementRef<'_>, body: &str, markers: &mut MarkerMap) -> bool {
        let id = element.id();
        if markers.is_processed(id) || markers.is_hidden(id) {
            return false;
        }

        let headline = self.extractor.headline_text(element);
        if self.keywords.matches(&headline) || self.keywords.matches(body) {
            markers.mark_hidden(id);
            true
        } else {
            markers.mark_processed(id);
            false
        }
    }
}
