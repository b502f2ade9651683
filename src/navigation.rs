//! Screen destinations and the navigation capability
//!
//! Screens never switch themselves; they delegate to a `Navigator` injected
//! at the call site. `Router` is the in-process implementation and also
//! keeps the back stack. The destination set is closed at build time, so
//! navigation has no failure mode.

use crate::market::Asset;

/// A screen the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Chat,
    Asset(Asset),
    Settings,
    Profile,
}

impl Destination {
    /// Title shown in the status bar
    pub fn title(&self) -> &'static str {
        match self {
            Destination::Home => "Markets",
            Destination::Chat => "Assistant",
            Destination::Asset(asset) => asset.name(),
            Destination::Settings => "Settings",
            Destination::Profile => "Profile",
        }
    }
}

/// Capability for switching screens
pub trait Navigator {
    fn navigate_to(&mut self, destination: Destination);
}

/// One activatable entry on the hub screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubEntry {
    Asset(Asset),
    Settings,
    Profile,
}

impl HubEntry {
    pub fn destination(&self) -> Destination {
        match self {
            HubEntry::Asset(asset) => Destination::Asset(*asset),
            HubEntry::Settings => Destination::Settings,
            HubEntry::Profile => Destination::Profile,
        }
    }

    /// Delegate to the navigation collaborator. Unconditional: the entry
    /// set is closed and every destination is valid.
    pub fn activate(&self, navigator: &mut dyn Navigator) {
        navigator.navigate_to(self.destination());
    }
}

/// In-process navigator: the current screen plus a back stack.
///
/// Pushing the screen that is already showing stacks it again, matching
/// push-style routers; `back` at the root is a no-op.
#[derive(Debug)]
pub struct Router {
    current: Destination,
    stack: Vec<Destination>,
}

impl Router {
    pub fn new(start: Destination) -> Self {
        Self {
            current: start,
            stack: Vec::new(),
        }
    }

    pub fn current(&self) -> Destination {
        self.current
    }

    /// Return to the previous screen, if any
    pub fn back(&mut self) -> Destination {
        if let Some(previous) = self.stack.pop() {
            tracing::debug!(from = ?self.current, to = ?previous, "navigate back");
            self.current = previous;
        }
        self.current
    }
}

impl Navigator for Router {
    fn navigate_to(&mut self, destination: Destination) {
        tracing::debug!(from = ?self.current, to = ?destination, "navigate");
        self.stack.push(self.current);
        self.current = destination;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test double that records every delegated destination
    #[derive(Default)]
    struct RecordingNavigator {
        calls: Vec<Destination>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to(&mut self, destination: Destination) {
            self.calls.push(destination);
        }
    }

    #[test]
    fn test_each_entry_delegates_exactly_once() {
        let entries = [
            (HubEntry::Asset(Asset::Btc), Destination::Asset(Asset::Btc)),
            (HubEntry::Asset(Asset::Eth), Destination::Asset(Asset::Eth)),
            (HubEntry::Asset(Asset::Sol), Destination::Asset(Asset::Sol)),
            (HubEntry::Settings, Destination::Settings),
            (HubEntry::Profile, Destination::Profile),
        ];

        for (entry, expected) in entries {
            let mut navigator = RecordingNavigator::default();
            entry.activate(&mut navigator);
            assert_eq!(navigator.calls, vec![expected]);
        }
    }

    #[test]
    fn test_router_navigate_and_back() {
        let mut router = Router::new(Destination::Home);
        assert_eq!(router.current(), Destination::Home);

        router.navigate_to(Destination::Settings);
        assert_eq!(router.current(), Destination::Settings);

        router.navigate_to(Destination::Profile);
        assert_eq!(router.current(), Destination::Profile);

        assert_eq!(router.back(), Destination::Settings);
        assert_eq!(router.back(), Destination::Home);
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut router = Router::new(Destination::Home);
        assert_eq!(router.back(), Destination::Home);
        assert_eq!(router.current(), Destination::Home);
    }

    #[test]
    fn test_router_stacks_repeat_pushes() {
        let mut router = Router::new(Destination::Home);
        router.navigate_to(Destination::Chat);
        router.navigate_to(Destination::Chat);
        assert_eq!(router.back(), Destination::Chat);
        assert_eq!(router.back(), Destination::Home);
    }
}
