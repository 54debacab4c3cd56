use ego_tree::NodeId;
use engine_logging::{filter_debug, filter_warn};
use filter_core::{update, Effect, EngineState, Msg};

use crate::dom::{DomError, PageDocument};
use crate::markers::MarkerMap;
use crate::scan::Scanner;

/// Drives the filter for the lifetime of one document: owns the enabled
/// flag mirror, the document tree, the marker map, and the scanner, and
/// interprets the effects the core state machine emits.
///
/// All methods run on the host's single event thread. Scans are idempotent,
/// so overlapping triggers just run consecutive full passes.
pub struct FilterSession {
    state: EngineState,
    doc: PageDocument,
    markers: MarkerMap,
    scanner: Scanner,
}

impl FilterSession {
    /// Starts a session with the flag value read from the preference store
    /// and runs the initial scan.
    pub fn new(doc: PageDocument, scanner: Scanner, stored_enabled: Option<bool>) -> Self {
        let mut session = Self {
            state: EngineState::new(),
            doc,
            markers: MarkerMap::new(),
            scanner,
        };
        session.apply(Msg::StorageLoaded {
            enabled: stored_enabled,
        });
        session
    }

    /// Grafts lazily loaded content under `parent` and re-scans, the way a
    /// mutation observer would on a live page.
    pub fn append_fragment(
        &mut self,
        parent: NodeId,
        fragment: &str,
    ) -> Result<Vec<NodeId>, DomError> {
        let appended = self.doc.append_fragment(parent, fragment)?;
        self.apply(Msg::TreeMutated);
        Ok(appended)
    }

    /// Host signal that the tree changed through some other channel.
    pub fn document_mutated(&mut self) {
        self.apply(Msg::TreeMutated);
    }

    /// External change notification from the preference store.
    pub fn preference_changed(&mut self, key: &str, enabled: Option<bool>) {
        self.apply(Msg::PreferenceChanged {
            key: key.to_string(),
            enabled,
        });
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.markers.is_hidden(id)
    }

    pub fn is_processed(&self, id: NodeId) -> bool {
        self.markers.is_processed(id)
    }

    /// Snapshot of the currently suppressed nodes, for hosts that apply the
    /// hidden set to a real view.
    pub fn hidden_nodes(&self) -> Vec<NodeId> {
        self.markers.hidden_nodes()
    }

    pub fn document(&self) -> &PageDocument {
        &self.doc
    }

    fn apply(&mut self, msg: Msg) {
        let (state, effects) = update(self.state, msg);
        self.state = state;
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ResetProcessed => self.markers.clear_processed(),
            Effect::RunScan => {
                match self
                    .scanner
                    .scan(&self.doc, &mut self.markers, self.state.is_enabled())
                {
                    Ok(report) => filter_debug!(
                        "scan pass: examined {} hidden {} short {} nested {} unhidden {}",
                        report.examined,
                        report.newly_hidden,
                        report.skipped_short,
                        report.skipped_hidden,
                        report.unhidden
                    ),
                    // A failed pass degrades to "filtering temporarily not
                    // applied" until the next trigger.
                    Err(err) => filter_warn!("dropping scan pass: {err}"),
                }
            }
        }
    }
}
