mod playback_store;

pub use playback_store::*;
