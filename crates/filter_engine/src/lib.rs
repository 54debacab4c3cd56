//! Filter engine: document model, keyword scan pass, and session glue.
mod dom;
mod extract;
mod keywords;
mod markers;
mod scan;
mod selectors;
mod session;
mod store;

pub use dom::{DomError, PageDocument};
pub use ego_tree::NodeId;
pub use extract::{visible_char_count, TextExtractor};
pub use filter_core::ENABLED_KEY;
pub use keywords::{KeywordError, KeywordSet, DEFAULT_PATTERNS};
pub use markers::MarkerMap;
pub use scan::{BuildError, ScanError, ScanReport, Scanner, MIN_BODY_CHARS};
pub use selectors::{SelectorError, SelectorList, ARTICLE_SELECTORS, SITE_SELECTORS};
pub use session::FilterSession;
pub use store::{ChangeListener, MemoryStore, PreferenceStore};
