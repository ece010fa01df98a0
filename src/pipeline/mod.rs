use thiserror::Error;
use tracing::warn;

use crate::input::InputError;
use crate::render::RenderError;

pub mod error_curves;
pub mod noise_hist;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Substitutes an empty table when the loader reports a missing file.
/// Every other outcome passes through unchanged.
pub(crate) fn or_empty_if_missing<T: Default>(
    result: Result<T, InputError>,
    what: &str,
) -> Result<T, InputError> {
    match result {
        Err(InputError::NotFound { path }) => {
            warn!(
                path = %path.display(),
                "{what} result file not found; rendering an empty chart"
            );
            Ok(T::default())
        }
        other => other,
    }
}
