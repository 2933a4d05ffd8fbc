//! Theme resolution shared by the SSR renderer, the hydrated client and the
//! form action endpoints.
//!
//! This crate is UI-framework agnostic. It owns the catalog of valid theme
//! identifiers, the coercion of untrusted input into that catalog, the model
//! of the operating system color-scheme preference, and the precedence rule
//! that combines them into the theme actually rendered.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server and the browser both link this crate, so a value that the server
//! accepts from a cookie or a form is exactly the value the client accepts from
//! a rendered attribute or a button. The only durable state lives in the
//! `theme` cookie, which this crate never touches directly.

pub mod catalog;
pub mod os;
pub mod resolve;
pub mod state;

pub use catalog::{CatalogError, Theme, ThemeCatalog};
pub use os::{ColorSchemeSource, ManualColorScheme, OsPreference, Subscription, UndetectedColorScheme};
pub use resolve::{FALLBACK_THEME, ThemeSources, resolve, server_render_class};
pub use state::{PersistedTheme, ThemeState};

/// Name of the cookie holding the last chosen theme identifier.
pub const THEME_COOKIE: &str = "theme";

/// Form field carrying a requested theme identifier (empty means reset).
pub const THEME_FIELD: &str = "theme";

/// Form field carrying the path to return to after a no-JS submission.
pub const RETURN_URL_FIELD: &str = "url";

/// Media query used to observe the platform color-scheme preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
