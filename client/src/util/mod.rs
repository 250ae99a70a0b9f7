//! Helpers shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `counter` and `format` are pure and run everywhere. `theme_host`,
//! `visibility`, and `animation_frame` wrap browser APIs; the latter two only
//! exist in the hydrate build.

#[cfg(feature = "hydrate")]
pub mod animation_frame;
pub mod counter;
pub mod format;
pub mod theme_host;
#[cfg(feature = "hydrate")]
pub mod visibility;
