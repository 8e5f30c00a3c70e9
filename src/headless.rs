//! Headless key evaluation
//!
//! Feeds a list of button labels to a fresh engine without a terminal.
//! Unlike the keypad itself, an unknown label here is an error: on the
//! command line it is a typo worth reporting, not a stray keypress.

use tracing::debug;

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::Result;
use crate::key::Key;

/// Display text after one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub key: Key,
    pub display: String,
}

/// Parse every label first, then press them in order.
///
/// Returns one [`Step`] per label. Nothing is evaluated if any label is
/// unknown.
pub fn evaluate<S: AsRef<str>>(config: EngineConfig, labels: &[S]) -> Result<Vec<Step>> {
    let keys = labels
        .iter()
        .map(|label| label.as_ref().parse::<Key>())
        .collect::<Result<Vec<_>>>()?;

    let mut engine = Engine::new(config);
    let steps = keys
        .into_iter()
        .map(|key| Step {
            key,
            display: engine.process(key).to_string(),
        })
        .collect::<Vec<_>>();

    debug!(count = steps.len(), "headless evaluation finished");
    Ok(steps)
}

/// Final display text after pressing all labels (`"0"` for no labels)
pub fn final_display<S: AsRef<str>>(config: EngineConfig, labels: &[S]) -> Result<String> {
    Ok(evaluate(config, labels)?
        .pop()
        .map(|step| step.display)
        .unwrap_or_else(|| "0".to_string()))
}
