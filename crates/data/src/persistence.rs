use anyhow::Context;
use pushluck_core::SavedRun;

pub fn encode_saved_run(run: &SavedRun) -> anyhow::Result<String> {
    serde_json::to_string(run).context("serialize saved run")
}

/// A malformed or truncated blob yields nothing rather than an error; a
/// stale save is discarded, never fatal.
pub fn decode_saved_run(raw: &str) -> Option<SavedRun> {
    serde_json::from_str(raw).ok()
}
