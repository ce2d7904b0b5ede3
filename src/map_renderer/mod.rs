pub mod credentials;
pub mod markers;
pub mod provider;
pub mod snapshot;
