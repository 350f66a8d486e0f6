//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a single line for CLI output.
pub fn map_error(e: &ApiError) -> String {
    e.to_string().replace('\n', "; ")
}
