//! Window-level subscriptions held by a mounted header.
//!
//! The header reacts to two global streams, key presses and resizes, for as
//! long as it is mounted. `WindowEvents` is the seam between the component and
//! the browser: `BrowserWindow` wires it to `window_event_listener`, tests use
//! an in-memory window.

use leptos::{ev, logging, prelude::*};

use super::menu::MenuEvent;

/// An attached listener. Calling [`Subscription::remove`] detaches it.
///
/// Dropping a `Subscription` does not detach anything, the same as Leptos'
/// `WindowListenerHandle`; the owner of the listener decides when it goes.
#[must_use = "a dropped Subscription leaves its listener attached"]
pub struct Subscription(Box<dyn FnOnce() + Send + Sync>);

impl Subscription {
    /// Wraps the action that detaches a listener.
    ///
    /// # Arguments
    ///
    /// * `remove` - Called once, by [`Subscription::remove`].
    ///
    /// # Returns
    ///
    /// A `Subscription` owning `remove`.
    pub fn new(remove: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self(Box::new(remove))
    }

    /// Detaches the listener. Consumes the subscription, so it runs once.
    pub fn remove(self) {
        (self.0)();
    }
}

/// Source of the global events the header listens to.
pub trait WindowEvents {
    /// Calls `handler` with the `KeyboardEvent.key` value of every key-down.
    fn on_key_down(&self, handler: impl Fn(&str) + Send + Sync + 'static) -> Subscription;

    /// Calls `handler` with the viewport width on every resize.
    fn on_resize(&self, handler: impl Fn(f64) + Send + Sync + 'static) -> Subscription;
}

/// The real `window`, only meaningful in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserWindow;

impl WindowEvents for BrowserWindow {
    fn on_key_down(&self, handler: impl Fn(&str) + Send + Sync + 'static) -> Subscription {
        let handle = window_event_listener(ev::keydown, move |event| handler(&event.key()));
        Subscription::new(move || handle.remove())
    }

    fn on_resize(&self, handler: impl Fn(f64) + Send + Sync + 'static) -> Subscription {
        let handle = window_event_listener(ev::resize, move |_| match viewport_width() {
            Some(width) => handler(width),
            None => logging::debug_warn!("resize ignored: window.innerWidth is not a number"),
        });
        Subscription::new(move || handle.remove())
    }
}

fn viewport_width() -> Option<f64> {
    window().inner_width().ok()?.as_f64()
}

/// Both subscriptions of one mounted header: window key-downs and resizes.
#[must_use = "listeners stay attached until detach() is called"]
pub struct MenuListeners {
    key_down: Subscription,
    resize: Subscription,
}

impl MenuListeners {
    /// Subscribes to `window`, turning every key-down into
    /// [`MenuEvent::KeyDown`] and every resize into [`MenuEvent::Resized`].
    ///
    /// No filtering happens here: which keys and widths close the menu is
    /// decided by [`MenuState::apply`](super::menu::MenuState::apply).
    ///
    /// # Arguments
    ///
    /// * `window` - The event source to subscribe to.
    /// * `dispatch` - Receives the translated events.
    ///
    /// # Returns
    ///
    /// The two live subscriptions; release them with [`MenuListeners::detach`].
    pub fn attach<W, D>(window: &W, dispatch: D) -> Self
    where
        W: WindowEvents,
        D: Fn(MenuEvent) + Clone + Send + Sync + 'static,
    {
        let on_key = dispatch.clone();
        let key_down = window.on_key_down(move |key| on_key(MenuEvent::KeyDown(key.to_owned())));
        let resize = window.on_resize(move |width| dispatch(MenuEvent::Resized(width)));
        Self { key_down, resize }
    }

    /// Removes both listeners. Events fired afterwards reach nobody.
    pub fn detach(self) {
        self.key_down.remove();
        self.resize.remove();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use assert_matches::assert_matches;

    use super::*;
    use crate::components::navbar::{config::SITE_NAV, menu::MenuState};

    type KeyHandler = Arc<dyn Fn(&str) + Send + Sync>;
    type ResizeHandler = Arc<dyn Fn(f64) + Send + Sync>;

    #[derive(Default)]
    struct Registry {
        next_id: u64,
        key_down: Vec<(u64, KeyHandler)>,
        resize: Vec<(u64, ResizeHandler)>,
    }

    /// In-memory window that records listeners and lets tests fire events.
    #[derive(Clone, Default)]
    struct FakeWindow(Arc<Mutex<Registry>>);

    impl FakeWindow {
        fn press(&self, key: &str) {
            let handlers: Vec<_> = self.0.lock().unwrap().key_down.iter().map(|(_, h)| h.clone()).collect();
            for handler in handlers {
                handler(key);
            }
        }

        fn resize(&self, width: f64) {
            let handlers: Vec<_> = self.0.lock().unwrap().resize.iter().map(|(_, h)| h.clone()).collect();
            for handler in handlers {
                handler(width);
            }
        }

        fn listener_count(&self) -> usize {
            let registry = self.0.lock().unwrap();
            registry.key_down.len() + registry.resize.len()
        }
    }

    impl WindowEvents for FakeWindow {
        fn on_key_down(&self, handler: impl Fn(&str) + Send + Sync + 'static) -> Subscription {
            let mut registry = self.0.lock().unwrap();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.key_down.push((id, Arc::new(handler)));
            let inner = Arc::clone(&self.0);
            Subscription::new(move || inner.lock().unwrap().key_down.retain(|(other, _)| *other != id))
        }

        fn on_resize(&self, handler: impl Fn(f64) + Send + Sync + 'static) -> Subscription {
            let mut registry = self.0.lock().unwrap();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.resize.push((id, Arc::new(handler)));
            let inner = Arc::clone(&self.0);
            Subscription::new(move || inner.lock().unwrap().resize.retain(|(other, _)| *other != id))
        }
    }

    fn mounted(window: &FakeWindow) -> (Arc<Mutex<MenuState>>, Arc<Mutex<Vec<MenuEvent>>>, MenuListeners) {
        let state = Arc::new(Mutex::new(MenuState::new()));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let listeners = MenuListeners::attach(window, {
            let state = Arc::clone(&state);
            let seen = Arc::clone(&seen);
            move |event: MenuEvent| {
                state.lock().unwrap().apply(&event, SITE_NAV.breakpoint);
                seen.lock().unwrap().push(event);
            }
        });
        (state, seen, listeners)
    }

    #[test]
    fn test_attach_registers_both_listeners() {
        let window = FakeWindow::default();
        let (_state, _seen, listeners) = mounted(&window);
        assert_eq!(window.listener_count(), 2);
        listeners.detach();
        assert_eq!(window.listener_count(), 0);
    }

    #[test]
    fn test_escape_closes_open_menu() {
        let window = FakeWindow::default();
        let (state, seen, listeners) = mounted(&window);
        state.lock().unwrap().toggle();

        window.press("a");
        window.press("Enter");
        assert!(state.lock().unwrap().is_open(), "only Escape closes the menu");

        window.press("Escape");
        assert!(!state.lock().unwrap().is_open());
        assert_eq!(
            *seen.lock().unwrap(),
            ["a", "Enter", "Escape"].map(|key| MenuEvent::KeyDown(key.to_owned()))
        );
        listeners.detach();
    }

    #[test]
    fn test_resize_only_closes_at_desktop_width() {
        let window = FakeWindow::default();
        let (state, seen, listeners) = mounted(&window);
        state.lock().unwrap().toggle();

        window.resize(500.0);
        window.resize(767.0);
        assert!(state.lock().unwrap().is_open());

        window.resize(768.0);
        assert!(!state.lock().unwrap().is_open());
        assert_matches!(
            seen.lock().unwrap().as_slice(),
            [MenuEvent::Resized(_), MenuEvent::Resized(_), MenuEvent::Resized(width)] if *width == 768.0
        );

        // Closed already: dispatching again is harmless.
        window.resize(1280.0);
        assert!(!state.lock().unwrap().is_open());
        assert_eq!(seen.lock().unwrap().len(), 4);
        listeners.detach();
    }

    #[test]
    fn test_no_state_changes_after_detach() {
        let window = FakeWindow::default();
        let (state, seen, listeners) = mounted(&window);
        listeners.detach();

        state.lock().unwrap().toggle();
        window.press("Escape");
        window.resize(2000.0);

        assert!(state.lock().unwrap().is_open());
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(window.listener_count(), 0);
    }

    #[test]
    fn test_instances_are_independent() {
        let window = FakeWindow::default();
        let (first, _, first_listeners) = mounted(&window);
        let (second, _, second_listeners) = mounted(&window);
        first.lock().unwrap().toggle();
        second.lock().unwrap().toggle();

        first_listeners.detach();
        window.press("Escape");

        assert!(first.lock().unwrap().is_open());
        assert!(!second.lock().unwrap().is_open());
        assert_eq!(window.listener_count(), 2);
        second_listeners.detach();
    }
}
