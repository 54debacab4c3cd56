use crate::{Effect, EngineState, Msg, ENABLED_KEY};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: EngineState, msg: Msg) -> (EngineState, Vec<Effect>) {
    let effects = match msg {
        Msg::StorageLoaded { enabled } => {
            state.set_from_stored(enabled);
            vec![Effect::RunScan]
        }
        Msg::TreeMutated => {
            // Mutations while disabled are deliberately ignored; the
            // flag-change path re-evaluates everything when re-enabled.
            if state.is_enabled() {
                vec![Effect::RunScan]
            } else {
                Vec::new()
            }
        }
        Msg::PreferenceChanged { key, enabled } => {
            if key != ENABLED_KEY {
                return (state, Vec::new());
            }
            // The notification stream is authoritative; old and new values
            // are never compared, so an unchanged value still re-scans.
            state.set_from_stored(enabled);
            vec![Effect::ResetProcessed, Effect::RunScan]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
