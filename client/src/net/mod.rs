//! Networking modules for the theme persistence endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the fetch request that mirrors the native form action, so a
//! theme change made with JavaScript updates the cookie without a reload.

pub mod api;
