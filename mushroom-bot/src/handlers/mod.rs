//! Handlers run by the chain: logging, self-message filter, and the mushroom command dispatcher.

mod logging;
mod mushroom_handler;
mod self_filter;

pub use logging::LoggingHandler;
pub use mushroom_handler::MushroomHandler;
pub use self_filter::SelfMessageFilter;
