mod debouncer;
mod search_state;
pub mod search_render;

pub use debouncer::Debouncer;
pub use search_state::{SearchState, SearchStatus};
