//! Responsive site header with a collapsible mobile menu.
//!
//! The header renders the logo link, a hamburger toggle and the nav list. Only
//! a class flag on the `<nav>` and the toggle's `aria-*` values follow the
//! menu state; the markup itself is identical whether the menu is open or not.

pub mod config;
pub mod listeners;
pub mod menu;

use leptos::{
    ev,
    html::{a, button, header, img, li, nav, span, ul},
    prelude::*,
};

use config::{Breakpoint, NavConfig, SITE_NAV};
use listeners::{BrowserWindow, MenuListeners};
use menu::{MenuEvent, MenuState};
use web_sys::MouseEvent;

/// Class added to the `<nav>` while the mobile menu is open.
pub const OPEN_MARKER: &str = "navbar-nav--open";

/// Renders the site header with the links from [`SITE_NAV`].
///
/// # Returns
///
/// An `impl IntoView` for the `<header>` element, starting with the menu closed.
pub fn component() -> impl IntoView {
    with_config(SITE_NAV)
}

/// Renders a header for `config` with a fresh, closed menu.
///
/// # Arguments
///
/// * `config` - The links, logo and breakpoint to render.
///
/// # Returns
///
/// An `impl IntoView` for the `<header>` element.
pub fn with_config(config: NavConfig) -> impl IntoView {
    with_state(config, RwSignal::new(MenuState::new()))
}

/// Builds the function every handler of the header feeds its events into.
///
/// The signal is only written when [`MenuState::apply`] reports a change, so
/// closing an already closed menu does not notify subscribers.
///
/// # Arguments
///
/// * `menu` - The signal holding the menu state of one mounted header.
/// * `breakpoint` - Width from which resizes close the menu.
///
/// # Returns
///
/// A `Copy` closure that applies a `MenuEvent` to `menu`.
pub fn dispatcher(
    menu: RwSignal<MenuState>,
    breakpoint: Breakpoint,
) -> impl Fn(MenuEvent) + Copy + Send + Sync + 'static {
    move |event: MenuEvent| {
        menu.maybe_update(|state| state.apply(&event, breakpoint));
    }
}

/// Renders a header for `config` whose open/closed state lives in `menu`.
///
/// The hamburger dispatches [`MenuEvent::Toggle`], the logo and every link
/// dispatch [`MenuEvent::LinkActivated`], all through [`dispatcher`]. Key-down
/// and resize listeners are attached to the browser window from a client-side
/// effect and removed when the owning scope is cleaned up, so server rendering
/// never touches `window`.
///
/// # Arguments
///
/// * `config` - The links, logo and breakpoint to render.
/// * `menu` - The signal the `<nav>` class flag and the toggle's `aria-*`
///   attributes are derived from.
///
/// # Returns
///
/// An `impl IntoView` for the `<header>` element.
pub fn with_state(config: NavConfig, menu: RwSignal<MenuState>) -> impl IntoView {
    let dispatch = dispatcher(menu, config.breakpoint);

    Effect::new(move |_| {
        let listeners = MenuListeners::attach(&BrowserWindow, dispatch);
        on_cleanup(move || listeners.detach());
    });

    let close_menu = move |_: MouseEvent| dispatch(MenuEvent::LinkActivated);

    let links = config
        .items
        .iter()
        .map(|item| {
            li().child(
                a().href(item.href)
                    .class("navbar-link")
                    .on(ev::click, close_menu)
                    .child(item.label),
            )
        })
        .collect::<Vec<_>>();

    header().class("navbar-header").child((
        a().href("#")
            .class("navbar-logo")
            .aria_label(config.logo_label)
            .on(ev::click, close_menu)
            .child(
                img()
                    .src(config.logo_src)
                    .alt(config.logo_label)
                    .class("navbar-logo-img"),
            ),
        button()
            .attr("type", "button")
            .class("navbar-hamburger")
            .attr("aria-expanded", move || menu.get().aria_expanded())
            .attr("aria-controls", config.nav_id)
            .attr("aria-label", move || menu.get().toggle_label())
            .on(ev::click, move |_| dispatch(MenuEvent::Toggle))
            .child((hamburger_bar(), hamburger_bar(), hamburger_bar())),
        nav()
            .id(config.nav_id)
            .class("navbar-nav")
            .class((OPEN_MARKER, move || menu.get().is_open()))
            .child(ul().class("navbar-list").child(links)),
    ))
}

fn hamburger_bar() -> impl IntoView {
    span().class("navbar-hamburger-bar").attr("aria-hidden", "true")
}
