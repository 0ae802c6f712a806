//! Team offer service.
//!
//! An offer moves through a small state machine (`machine`) that is driven by the lifecycle
//! controller (`lifecycle`) against an injected platform (`platform`). Message content is
//! produced by pure builders (`builder`).

pub mod builder;
pub mod lifecycle;
pub mod machine;
pub mod platform;

#[cfg(test)]
mod test;

pub use lifecycle::OfferLifecycle;
