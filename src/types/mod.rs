//! Domain types for the wallbox page, organized to match the structure in
//! `update/`:
//! - wallbox: configuration and status of one car's wallbox integration
//! - stream: wire types for the teslaloggerstream endpoint

pub mod stream;
pub mod wallbox;

pub use stream::*;
pub use wallbox::*;
