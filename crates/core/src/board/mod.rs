//! Board geometry and occupancy

mod index;
mod square;

pub use index::Board;
pub use square::{Square, BOARD_SIZE};
