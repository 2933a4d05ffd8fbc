//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive the state handles they render from their parent as
//! props.

pub mod theme_toggle;
