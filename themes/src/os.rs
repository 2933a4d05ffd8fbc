//! Operating system color-scheme preference and change subscriptions.
//!
//! DESIGN
//! ======
//! Detection is behind [`ColorSchemeSource`] so the hydrated client can plug
//! in `matchMedia` while SSR and tests use the sources defined here. A
//! listener registration is represented by a [`Subscription`] handle that
//! releases the listener on [`Subscription::cancel`] or on drop, whichever
//! comes first.
//!
//! TRADE-OFFS
//! ==========
//! Sources are single-threaded (`Rc`/`RefCell`, non-`Send` callbacks) because
//! preference changes are delivered on the UI event loop.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::catalog::Theme;

#[cfg(test)]
#[path = "os_test.rs"]
mod tests;

/// Observed platform color-scheme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OsPreference {
    Light,
    Dark,
    /// The platform cannot report a preference (SSR, no `matchMedia`).
    #[default]
    Unknown,
}

impl OsPreference {
    /// Map the result of a `prefers-color-scheme: dark` media query.
    #[must_use]
    pub fn from_dark_match(matches: bool) -> Self {
        if matches { Self::Dark } else { Self::Light }
    }

    /// Built-in theme implied by this preference, if one is known.
    #[must_use]
    pub fn theme(self) -> Option<Theme> {
        match self {
            Self::Light => Some(Theme::LIGHT),
            Self::Dark => Some(Theme::DARK),
            Self::Unknown => None,
        }
    }
}

/// Handle for a registered preference listener.
///
/// Cancelling is idempotent, and dropping an active handle cancels it.
#[must_use = "dropping a subscription immediately removes its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the action that removes a listener.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A handle with nothing to release, for sources that never notify.
    pub fn inert() -> Self {
        Self { release: None }
    }

    /// Remove the listener. Calling this again is a no-op.
    pub fn cancel(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

/// A provider of the live platform color-scheme preference.
pub trait ColorSchemeSource {
    /// Read the preference right now. Returns [`OsPreference::Unknown`]
    /// instead of guessing when detection is unavailable.
    fn current(&self) -> OsPreference;

    /// Register `on_change` for preference flips.
    ///
    /// Notifications are best-effort: a consumer may observe zero, one or
    /// many of them over a session.
    fn subscribe(&self, on_change: Box<dyn FnMut(OsPreference)>) -> Subscription;
}

/// Source for environments with no detection capability.
#[derive(Clone, Copy, Debug, Default)]
pub struct UndetectedColorScheme;

impl ColorSchemeSource for UndetectedColorScheme {
    fn current(&self) -> OsPreference {
        OsPreference::Unknown
    }

    fn subscribe(&self, _on_change: Box<dyn FnMut(OsPreference)>) -> Subscription {
        Subscription::inert()
    }
}

type Listener = Rc<RefCell<Box<dyn FnMut(OsPreference)>>>;

struct ManualInner {
    current: OsPreference,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// A settable source that notifies its subscribers serially.
///
/// Clones share the same preference and listener list.
#[derive(Clone)]
pub struct ManualColorScheme {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualColorScheme {
    #[must_use]
    pub fn new(initial: OsPreference) -> Self {
        Self { inner: Rc::new(RefCell::new(ManualInner { current: initial, next_id: 0, listeners: Vec::new() })) }
    }

    /// Change the preference and notify listeners if it actually flipped.
    pub fn set(&self, preference: OsPreference) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.current == preference {
                return;
            }
            inner.current = preference;
            inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        // Borrow released above so callbacks may cancel or subscribe.
        for listener in listeners {
            (listener.borrow_mut())(preference);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl Default for ManualColorScheme {
    fn default() -> Self {
        Self::new(OsPreference::Unknown)
    }
}

impl fmt::Debug for ManualColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualColorScheme")
            .field("current", &inner.current)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl ColorSchemeSource for ManualColorScheme {
    fn current(&self) -> OsPreference {
        self.inner.borrow().current
    }

    fn subscribe(&self, on_change: Box<dyn FnMut(OsPreference)>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(RefCell::new(on_change))));
            id
        };

        let weak: Weak<RefCell<ManualInner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}
