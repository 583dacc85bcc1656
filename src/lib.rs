pub mod api;
pub mod error;
pub mod session;
pub mod store;
pub mod swipe;

pub use api::{Api, Dev, Judgment};
pub use error::{AppResult, Error};
pub use store::Store;
pub use swipe::{MatchChannel, Screen, SwipeQueue};
