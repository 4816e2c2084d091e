pub mod board;
pub mod layout;
pub mod move_gen;
pub mod perft;
pub mod types;

pub use board::*;
pub use layout::{positions, LayoutError};
pub use move_gen::*;
pub use perft::{perft, perft_divide};
pub use types::*;
