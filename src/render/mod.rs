//! Rendering backends: styled cells, cell buffers, and the two shipped screens.

pub mod buffer;
pub mod cell;
pub mod driver;
pub mod memory;

pub use buffer::CellBuffer;
pub use cell::{Cell, CellUpdate};
pub use driver::TerminalScreen;
pub use memory::MemoryScreen;
