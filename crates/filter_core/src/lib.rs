//! Filter core: pure state machine for the enabled flag and scan triggers.
mod effect;
mod msg;
mod state;
mod update;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{EngineState, ENABLED_KEY};
pub use update::update;
