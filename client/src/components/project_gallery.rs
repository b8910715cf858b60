//! Project gallery grid and its cards.
//!
//! DESIGN
//! ======
//! The gallery is a pure function of [`projects`]: no state, no effects, the
//! same cards in the same order on every render.

use leptos::prelude::*;

use crate::content::projects::{PROJECT_TAG, Project, projects};

#[component]
pub fn ProjectGallery() -> impl IntoView {
    view! {
        <section id="projects" class="projects">
            <div class="projects__header">
                <h2 class="projects__title">"Projects"</h2>
                <p class="projects__subtitle">"A small selection of recent work."</p>
            </div>

            <div class="projects__grid">
                {projects()
                    .iter()
                    .map(|project| view! { <ProjectCard project=*project/> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// A single gallery card.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card" data-project-id=project.id.to_string()>
            <div class="project-card__media">
                <img class="project-card__image" src=project.image alt=project.title/>
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <div class="project-card__footer">
                    <a href="#" class="project-card__link">"View"</a>
                    <span class="project-card__tag">{PROJECT_TAG}</span>
                </div>
            </div>
        </article>
    }
}
