//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `theme` holds the plain data every component reads; `theme_store` is the
//! stateful owner that talks to the browser through an injected host.

pub mod theme;
pub mod theme_store;
