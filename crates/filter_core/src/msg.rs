#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Initial read of the enabled flag from the preference store completed.
    StorageLoaded { enabled: Option<bool> },
    /// The host observed insertions or removals under the content root.
    TreeMutated,
    /// The preference store delivered an external change notification.
    PreferenceChanged {
        key: String,
        enabled: Option<bool>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
