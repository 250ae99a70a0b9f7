//! Reusable UI pieces shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared theme state through `ThemeHandle` context and
//! otherwise take everything they render as props or from `content`.

pub mod animated_counter;
pub mod code_block;
pub mod navigation;
pub mod page_nav;
pub mod progress_bar;
pub mod site_footer;
pub mod theme_switch;
