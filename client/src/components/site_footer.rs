//! Page footer with credit line and legal links.

use leptos::prelude::*;

use crate::content::profile::footer_credit;
use crate::util::clock::current_year;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let credit = footer_credit(current_year());

    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__credit">{credit}</div>
                <div class="site-footer__links">
                    <a href="#" class="site-footer__link">"Privacy"</a>
                    <a href="#" class="site-footer__link">"Terms"</a>
                </div>
            </div>
        </footer>
    }
}
