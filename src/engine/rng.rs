//! Random draw generator.

use rand::RngExt;
use thiserror::Error;

/// Asked to draw from a die with no faces. This is a caller bug (an
/// unsupported die kind), never a recoverable runtime condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("die must have at least one face, got {0}")]
    InvalidFaceCount(u16),
}

/// Draw a uniformly distributed face value in `[1, max_face]`.
///
/// Both ends are inclusive: the result is a dice face, not an index.
pub fn draw(max_face: u16) -> Result<u16, DrawError> {
    if max_face < 1 {
        return Err(DrawError::InvalidFaceCount(max_face));
    }
    let mut rng = rand::rng();
    Ok(rng.random_range(1..=max_face))
}
