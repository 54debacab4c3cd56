use std::sync::Once;

use filter_core::{update, Effect, EngineState, Msg, ENABLED_KEY};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

#[test]
fn storage_loaded_defaults_to_enabled_and_scans() {
    init_logging();
    let state = EngineState::new();

    let (next, effects) = update(state, Msg::StorageLoaded { enabled: None });

    assert!(next.is_enabled());
    assert_eq!(effects, vec![Effect::RunScan]);
}

#[test]
fn storage_loaded_false_disables() {
    init_logging();
    let state = EngineState::new();

    let (next, effects) = update(state, Msg::StorageLoaded { enabled: Some(false) });

    assert!(!next.is_enabled());
    assert_eq!(effects, vec![Effect::RunScan]);
}

#[test]
fn tree_mutated_scans_only_while_enabled() {
    init_logging();
    let enabled = EngineState::from_stored(Some(true));
    let (_, effects) = update(enabled, Msg::TreeMutated);
    assert_eq!(effects, vec![Effect::RunScan]);

    let disabled = EngineState::from_stored(Some(false));
    let (_, effects) = update(disabled, Msg::TreeMutated);
    assert!(effects.is_empty());
}

#[test]
fn preference_change_resets_markers_then_scans() {
    init_logging();
    let state = EngineState::from_stored(Some(true));

    let (next, effects) = update(
        state,
        Msg::PreferenceChanged {
            key: ENABLED_KEY.to_string(),
            enabled: Some(false),
        },
    );

    assert!(!next.is_enabled());
    assert_eq!(effects, vec![Effect::ResetProcessed, Effect::RunScan]);
}

#[test]
fn preference_change_with_same_value_still_rescans() {
    init_logging();
    let state = EngineState::from_stored(Some(true));

    let (next, effects) = update(
        state,
        Msg::PreferenceChanged {
            key: ENABLED_KEY.to_string(),
            enabled: Some(true),
        },
    );

    assert!(next.is_enabled());
    assert_eq!(effects, vec![Effect::ResetProcessed, Effect::RunScan]);
}

#[test]
fn preference_change_for_other_keys_is_ignored() {
    init_logging();
    let state = EngineState::from_stored(Some(true));

    let (next, effects) = update(
        state,
        Msg::PreferenceChanged {
            key: "theme".to_string(),
            enabled: Some(false),
        },
    );

    assert!(next.is_enabled());
    assert!(effects.is_empty());
}

#[test]
fn removed_value_counts_as_enabled() {
    init_logging();
    let state = EngineState::from_stored(Some(false));

    let (next, effects) = update(
        state,
        Msg::PreferenceChanged {
            key: ENABLED_KEY.to_string(),
            enabled: None,
        },
    );

    assert!(next.is_enabled());
    assert_eq!(effects, vec![Effect::ResetProcessed, Effect::RunScan]);
}
