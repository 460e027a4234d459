pub mod gate;
pub mod record;
#[cfg(test)]
mod timeline;

use crate::storage::KeyValueStore;
use gate::{ConsentGate, GateAction};
use record::{save_consent, ConsentChoice};

/// Persists `choice` when the gate takes it and returns the action to
/// dispatch. The write happens before the dispatch so it is visible as soon
/// as the click handler returns.
pub fn record_choice(
    store: &impl KeyValueStore,
    gate: &ConsentGate,
    choice: ConsentChoice,
) -> GateAction {
    if let (_, Some(record)) = gate.choose(choice) {
        save_consent(store, record);
    }
    GateAction::Choose(choice)
}
