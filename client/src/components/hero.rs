//! Landing section: greeting, tagline, calls to action, and headline stats.

use leptos::prelude::*;

use crate::content::profile::{HERO_STATS, HERO_TAGLINE, OWNER_FIRST_NAME};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__intro">
                <h1 class="hero__title">
                    "Hi — I'm "
                    <span class="hero__name">{OWNER_FIRST_NAME}</span>
                </h1>
                <p class="hero__tagline">{HERO_TAGLINE}</p>

                <div class="hero__actions">
                    <a href="#projects" class="btn hero__cta hero__cta--primary">
                        "View projects →"
                    </a>
                    <a href="#contact" class="hero__cta">
                        "Contact me"
                    </a>
                </div>

                <div class="hero__stats">
                    {HERO_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="hero__stat">
                                    <div class="hero__stat-value">{stat.value}</div>
                                    <div class="hero__stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="hero__art">
                <div class="hero__card">
                    <div class="hero__card-title">"Design + Dev"</div>
                    <div class="hero__card-subtitle">"Creative websites & delightful apps"</div>
                </div>
            </div>
        </section>
    }
}
