//! Landing page: one section per header link, so every anchor in the nav has
//! something to land on.

use leptos::{
    html::{div, h2, section},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

use crate::components::navbar::config::{NavItem, SITE_NAV};

pub const PAGE_TITLE: &str = "Petit Maison \u{2013} Peluquería y estética";

pub fn component() -> impl IntoView {
    div().class("landing").child((
        Title(TitleProps::builder().text(PAGE_TITLE).build()),
        SITE_NAV.items.iter().map(landing_section).collect::<Vec<_>>(),
    ))
}

fn landing_section(item: &NavItem) -> impl IntoView {
    section()
        .id(item.fragment())
        .class("landing-section")
        .child(h2().class("landing-section-title").child(item.label))
}
