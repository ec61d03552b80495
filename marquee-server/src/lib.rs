pub mod chat;
pub mod hub;
pub mod playback;
pub mod presence;
pub mod registry;
pub mod signaling;
pub mod storage;
pub mod transport;

pub use chat::*;
pub use hub::*;
pub use playback::*;
pub use presence::*;
pub use registry::*;
pub use signaling::*;
pub use storage::*;
pub use transport::*;
