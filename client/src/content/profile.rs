//! Site owner details, hero copy, and in-page navigation links.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const OWNER_NAME: &str = "Emmanuel Okezie";
pub const OWNER_FIRST_NAME: &str = "Emmanuel";
pub const OWNER_INITIAL: &str = "E";
pub const OWNER_ROLE: &str = "Creative Developer";

pub const HERO_TAGLINE: &str = "I design and build beautiful, accessible, and responsive web experiences. \
                                I focus on performance, simplicity, and delightful interactions.";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat { value: "8+", label: "Years experience" },
    HeroStat { value: "24", label: "Projects" },
    HeroStat { value: "Remote", label: "Work" },
];

/// Footer credit line for `year`.
#[must_use]
pub fn footer_credit(year: i32) -> String {
    format!("© {year} {OWNER_NAME} — Built with Leptos")
}
