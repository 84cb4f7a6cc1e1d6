use thiserror::Error;

use crate::Value;

/// Rejected grid dimensions or alphabet, detected at construction before any
/// search starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidGeometry {
    #[error("grid size must be positive")]
    ZeroSize,
    #[error("box size must be positive")]
    ZeroBoxSize,
    #[error("grid size ({size}) must be greater than or equal to box size ({box_size})")]
    BoxLargerThanGrid { size: usize, box_size: usize },
    #[error("grid size ({size}) must be a multiple of box size ({box_size})")]
    UnalignedBox { size: usize, box_size: usize },
    #[error("max value ({max_value}) must be greater than or equal to the square of box size ({required})")]
    AlphabetTooSmall { max_value: Value, required: Value },
}
