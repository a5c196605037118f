//! Match feed adapters.

mod remote;
mod simulated;

pub use remote::RemoteFeed;
pub use simulated::SimulatedFeed;
