pub mod router;
pub mod state;

pub use router::{MAX_BODY_BYTES, build_router};
pub use state::AppState;
