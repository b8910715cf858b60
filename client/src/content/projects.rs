//! Project gallery entries.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// One gallery card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// Category shown in the footer of every card.
pub const PROJECT_TAG: &str = "Web / UI";

static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Aurora Dashboard",
        description: "A modern dashboard UI focused on data visualisation, with realtime widgets and responsive charts.",
        image: "https://images.unsplash.com/photo-1509395176047-4a66953fd231?auto=format&fit=crop&w=1200&q=60",
    },
    Project {
        id: 2,
        title: "Nomad Blog",
        description: "A minimal, content-first blog template with rich typography and beautiful reading experience.",
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=1200&q=60",
    },
    Project {
        id: 3,
        title: "RouteFinder App",
        description: "A mobile-first navigation app that blends offline maps with curated POIs and routing features.",
        image: "https://images.unsplash.com/photo-1504805572947-34fad45aed93?auto=format&fit=crop&w=1200&q=60",
    },
    Project {
        id: 4,
        title: "Studio Brand Kit",
        description: "A creative brand kit and component library for designers — color systems, tokens, and patterns.",
        image: "https://images.unsplash.com/photo-1499951360447-b19be8fe80f5?auto=format&fit=crop&w=1200&q=60",
    },
];

/// All projects in display order.
#[must_use]
pub fn projects() -> &'static [Project] {
    PROJECTS
}
