//! Compile-time configuration for the site header: the anchors it lists, the
//! logo it links, and the viewport width at which the mobile menu gives way to
//! the desktop layout.

/// A single entry in the header's link list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Viewport width, in CSS pixels, from which the desktop layout applies.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Breakpoint(pub f64);

impl Breakpoint {
    /// Whether a viewport of `width_px` renders the desktop layout.
    #[must_use]
    pub fn is_desktop(self, width_px: f64) -> bool {
        width_px >= self.0
    }
}

/// Everything a header needs to render, fixed at compile time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavConfig {
    pub items: &'static [NavItem],
    pub logo_src: &'static str,
    pub logo_label: &'static str,
    /// `id` of the `<nav>` element, referenced by the toggle's `aria-controls`.
    pub nav_id: &'static str,
    pub breakpoint: Breakpoint,
}

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// The sections of the landing page, in the order the header lists them.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Servicios",
        href: "#servicios",
    },
    NavItem {
        label: "Sobre nosotros",
        href: "#sobre-nosotros",
    },
    NavItem {
        label: "Citas",
        href: "#citas",
    },
    NavItem {
        label: "Portafolio",
        href: "#portafolio",
    },
    NavItem {
        label: "Contacto",
        href: "#contacto",
    },
];

/// The header shown on every page of the site.
pub const SITE_NAV: NavConfig = NavConfig {
    items: NAV_ITEMS,
    logo_src: "/img/logo.png",
    logo_label: "Inicio",
    nav_id: "main-nav",
    breakpoint: Breakpoint(MOBILE_BREAKPOINT_PX),
};

impl NavItem {
    /// The fragment this item points at, without the leading `#`.
    #[must_use]
    pub fn fragment(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}
