pub mod chat_tests;
pub mod playback_tests;
pub mod room_tests;

use std::sync::Arc;

use tracing::Level;

use marquee_server::{Hub, MemoryStorage};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_hub() -> Hub {
    Hub::new(Arc::new(MemoryStorage::new()))
}
