//! Collapsible link panel for narrow viewports.

use leptos::prelude::*;

use crate::content::profile::NAV_LINKS;
use crate::state::nav::NavState;

/// Link list shown below the header while the hamburger is open. Following a
/// link closes the panel.
#[component]
pub fn MobileNav() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <Show when=move || nav.with(|n| n.open)>
            <div class="mobile-nav">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.href class="mobile-nav__link" on:click=move |_| nav.update(NavState::close)>
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}
