pub mod human;

use serde_json::{Value, json};

use crate::core::WellnessError;

/// Code reported for failures that did not come from the wellness core.
pub const GENERAL_ERROR: &str = "general_error";

/// `{status, command, data, error}` wrapper printed to stdout on success.
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

pub fn error(command: &str, code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": null,
        "error": {
            "code": code,
            "message": message
        }
    })
}

/// Error envelope for a failed command. A `WellnessError` anywhere in the
/// chain supplies the code; anything else is a general error.
pub fn failure(command: &str, err: &anyhow::Error) -> Value {
    let code = err
        .chain()
        .find_map(|e| e.downcast_ref::<WellnessError>())
        .map(WellnessError::code)
        .unwrap_or(GENERAL_ERROR);
    error(command, code, &err.to_string())
}
