//! Route-aware navigation links
//!
//! The home route gets in-page anchor triggers that smooth-scroll to a section;
//! every other route gets plain router links back into the site.

/// Path of the home route
pub const HOME_PATH: &str = "/";

/// Where a navigation link leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Element id of a section on the current page
    Section(&'static str),
    /// Client-side route path
    Route(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: NavTarget,
    /// Rendered as the call-to-action button
    pub cta: bool,
}

impl NavLink {
    const fn section(label: &'static str, id: &'static str) -> Self {
        Self {
            label,
            target: NavTarget::Section(id),
            cta: false,
        }
    }

    const fn route(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            target: NavTarget::Route(path),
            cta: false,
        }
    }

    pub fn class(&self) -> &'static str {
        if self.cta {
            "nav-link nav-link-cta"
        } else {
            "nav-link"
        }
    }
}

static HOME_LINKS: [NavLink; 5] = [
    NavLink::section("Team", "team"),
    NavLink::section("Randao", "randao"),
    NavLink::section("Products", "products"),
    NavLink::section("Infrastructure", "infrastructure"),
    NavLink {
        cta: true,
        ..NavLink::section("Contact", "contact")
    },
];

static PAGE_LINKS: [NavLink; 2] = [
    NavLink::route("Home", HOME_PATH),
    NavLink::route("About", "/about"),
];

/// Which link set the navigation bar shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVariant {
    /// Anchor-scroll links on the home route
    Home,
    /// Router links on any other route
    Page,
}

impl NavVariant {
    pub fn for_path(path: &str) -> Self {
        if path == HOME_PATH {
            NavVariant::Home
        } else {
            NavVariant::Page
        }
    }

    pub fn links(&self) -> &'static [NavLink] {
        match self {
            NavVariant::Home => &HOME_LINKS,
            NavVariant::Page => &PAGE_LINKS,
        }
    }
}
