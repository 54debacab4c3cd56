use ego_tree::{NodeId, NodeRef, Tree};
use scraper::node::Node;
use scraper::{ElementRef, Html};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("append target is no longer attached to the document")]
    Detached,
}

/// Owned HTML document tree the scan pass runs against.
///
/// Node identity is stable across [`append_fragment`](Self::append_fragment)
/// calls, so marker state keyed by [`NodeId`] survives lazy-loaded content.
#[derive(Debug, Clone)]
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    pub fn parse(document: &str) -> Self {
        Self {
            html: Html::parse_document(document),
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    pub fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(id).and_then(ElementRef::wrap)
    }

    /// The document's root element, if the tree has one.
    pub fn root(&self) -> Option<ElementRef<'_>> {
        self.html.tree.root().children().find_map(ElementRef::wrap)
    }

    /// The `<body>` element id, the usual append target for new content.
    pub fn body(&self) -> Option<NodeId> {
        self.root()?.children().find_map(|child| {
            let element = ElementRef::wrap(child)?;
            (element.value().name() == "body").then(|| element.id())
        })
    }

    /// Parses `fragment` and grafts its top-level nodes under `parent`,
    /// returning the ids of the appended elements. Existing node ids are
    /// untouched.
    pub fn append_fragment(
        &mut self,
        parent: NodeId,
        fragment: &str,
    ) -> Result<Vec<NodeId>, DomError> {
        if self.html.tree.get(parent).is_none() {
            return Err(DomError::Detached);
        }

        let parsed = Html::parse_fragment(fragment);
        let root = parsed.tree.root();
        // The fragment parser wraps content in a synthetic <html> element.
        let container = root
            .children()
            .find(|node| node.value().is_element())
            .unwrap_or(root);

        let mut appended = Vec::new();
        for child in container.children() {
            let id = copy_subtree(&mut self.html.tree, parent, child);
            if child.value().is_element() {
                appended.push(id);
            }
        }
        Ok(appended)
    }
}

fn copy_subtree(tree: &mut Tree<Node>, parent: NodeId, source: NodeRef<'_, Node>) -> NodeId {
    let id = tree
        .get_mut(parent)
        .expect("copy target id was validated or just created")
        .append(source.value().clone())
        .id();
    for child in source.children() {
        copy_subtree(tree, id, child);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::PageDocument;
    use scraper::Selector;

    #[test]
    fn append_keeps_existing_node_ids_stable() {
        let mut doc = PageDocument::parse("<html><body><article id='a'>text</article></body></html>");
        let article = Selector::parse("article").unwrap();
        let before = doc.html().select(&article).next().unwrap().id();

        let body = doc.body().unwrap();
        let appended = doc
            .append_fragment(body, "<article id='b'>more</article>")
            .unwrap();

        assert_eq!(appended.len(), 1);
        let after = doc.html().select(&article).next().unwrap().id();
        assert_eq!(before, after);
        assert_eq!(doc.html().select(&article).count(), 2);
    }

    #[test]
    fn appended_elements_are_reachable_by_selector() {
        let mut doc = PageDocument::parse("<html><body></body></html>");
        let body = doc.body().unwrap();
        doc.append_fragment(body, "<div class='card'><h2>Title</h2><p>body</p></div>")
            .unwrap();

        let card = Selector::parse(".card").unwrap();
        let element = doc.html().select(&card).next().unwrap();
        assert!(element.text().collect::<String>().contains("Title"));
    }

    #[test]
    fn nested_fragment_subtrees_are_copied_completely() {
        let mut doc = PageDocument::parse("<html><body></body></html>");
        let body = doc.body().unwrap();
        doc.append_fragment(
            body,
            "<article><div><h2>Deep</h2><p>text <em>styled</em></p></div></article>",
        )
        .unwrap();

        let em = Selector::parse("article div p em").unwrap();
        let element = doc.html().select(&em).next().unwrap();
        assert_eq!(element.text().collect::<String>(), "styled");
    }

    #[test]
    fn detached_parent_is_an_error() {
        let big = PageDocument::parse(
            "<html><body><div><div><div><div><div><p>deep</p></div></div></div></div></div></body></html>",
        );
        let p = Selector::parse("p").unwrap();
        let deep_id = big.html().select(&p).next().unwrap().id();

        // An id that never existed in this smaller tree must surface as
        // Detached rather than panic.
        let mut small = PageDocument::parse("<html></html>");
        assert!(small.html().tree.get(deep_id).is_none());
        assert!(small.append_fragment(deep_id, "<p>y</p>").is_err());
    }
}
