use thiserror::Error;

/// Error returned by a [`crate::Cube`] operation. No state is modified when
/// an operation fails.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// Cube size is zero or too large to fit in the integer lattice.
    #[error("cube size must be between 1 and {max}; got {size}", max = crate::Cube::MAX_SIZE)]
    InvalidSize {
        /// Requested size.
        size: u32,
    },
    /// Slice index is outside `-size..size`.
    #[error("slice {slice} out of range for cube of size {size}")]
    InvalidSlice {
        /// Requested slice index.
        slice: i32,
        /// Size of the cube.
        size: u32,
    },
}
