//! The portfolio page: header, hero, projects, contact, footer.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::hero::Hero;
use crate::components::project_gallery::ProjectGallery;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="site">
            <SiteHeader/>
            <main class="site__main">
                <Hero/>
                <ProjectGallery/>
                <ContactForm/>
            </main>
            <SiteFooter/>
        </div>
    }
}
