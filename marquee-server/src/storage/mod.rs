mod memory;
mod storage;

pub use memory::*;
pub use storage::*;
