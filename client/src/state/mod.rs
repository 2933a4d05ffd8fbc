//! Client-side reactive state.
//!
//! SYSTEM CONTEXT
//! ==============
//! State handles are created in `App` and passed to pages and components
//! as props.

pub mod theme;
