//! CLI output: error mapping from domain errors to the stderr surface.

use crate::error::ApiError;
use owo_colors::OwoColorize;

/// Map an error to the line printed on stderr, with a hint where one helps.
pub fn map_error(e: &ApiError) -> String {
    let hint = match e {
        ApiError::Unauthorized(_) => Some("log in with `nodectl admin login`"),
        ApiError::Http(_) => Some("check that the node is running and --remote-node-url is correct"),
        _ => None,
    };
    let mut message = format!("{} {}", "error:".red().bold(), e);
    if let Some(hint) = hint {
        message.push_str(&format!("\n{} {}", "hint:".yellow(), hint));
    }
    message
}
