//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One page per navigation entry. Pages pull their copy from `content` and
//! delegate shared widgets (counters, progress bars, back/next links) to
//! `components`.

pub mod about;
pub mod analysis;
pub mod concepts;
pub mod downloads;
pub mod home;
pub mod modeling;
pub mod not_found;
pub mod overview;
pub mod preprocessing;
pub mod results;
