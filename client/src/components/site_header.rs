//! Top bar with brand, in-page links, theme toggle, and hamburger.
//!
//! SYSTEM CONTEXT
//! ==============
//! Desktop widths show the links inline; narrow widths show a compact theme
//! button plus a hamburger driving [`NavState`]. The header also owns the
//! resize observer that shuts the mobile panel when the viewport widens.

use leptos::prelude::*;

use crate::components::mobile_nav::MobileNav;
use crate::content::profile::{NAV_LINKS, OWNER_INITIAL, OWNER_NAME, OWNER_ROLE};
use crate::state::nav::{NavState, toggle_glyph};
use crate::state::theme::{SiteTheme, toggle_icon, toggle_label};
use crate::util::viewport::watch_width;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let theme = expect_context::<RwSignal<SiteTheme>>();
    let nav = expect_context::<RwSignal<NavState>>();

    watch_width(move |width| {
        let mut next = nav.get_untracked();
        if next.observe_width(width) {
            log::debug!("viewport widened to {width}px; closing mobile nav");
            nav.set(next);
        }
    });

    let is_dark = move || theme.with(SiteTheme::is_dark);
    let nav_open = move || nav.with(|n| n.open);
    let on_toggle_theme = move |_: leptos::ev::MouseEvent| {
        theme.update(|t| {
            t.toggle();
        });
    };

    view! {
        <header class="site-header">
            <a href="#home" class="site-header__brand">
                <span class="site-header__logo">{OWNER_INITIAL}</span>
                <div class="site-header__identity">
                    <div class="site-header__name">{OWNER_NAME}</div>
                    <div class="site-header__role">{OWNER_ROLE}</div>
                </div>
            </a>

            <nav class="site-header__nav">
                {NAV_LINKS
                    .iter()
                    .map(|link| view! { <a href=link.href class="site-header__link">{link.label}</a> })
                    .collect_view()}
                <button class="btn site-header__theme" on:click=on_toggle_theme aria-label="Toggle theme">
                    {move || toggle_label(is_dark())}
                </button>
            </nav>

            <div class="site-header__mobile">
                <button class="btn site-header__theme" on:click=on_toggle_theme aria-label="Toggle theme">
                    {move || toggle_icon(is_dark())}
                </button>
                <button
                    class="btn site-header__hamburger"
                    on:click=move |_| nav.update(NavState::toggle)
                    aria-label="Toggle navigation"
                    aria-expanded=move || nav_open().to_string()
                >
                    {move || toggle_glyph(nav_open())}
                </button>
            </div>
        </header>
        <MobileNav/>
    }
}
