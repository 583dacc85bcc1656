mod channel;
mod queue;
mod screen;

pub use channel::MatchChannel;
pub use queue::SwipeQueue;
pub use screen::Screen;
