use leptos::{html::Div, prelude::*};

use super::{
    animate::{on_hover_enter, on_hover_leave, use_entrance},
    common::{Glyph, SectionDivider, SectionHeading},
};
use crate::{
    choreography::{project_cards, project_hover, project_link_hover},
    icons::Icon,
    portfolio::ProjectEntry,
    state::Section,
};

#[component]
fn ProjectLink(href: String, icon: Icon, label: &'static str) -> impl IntoView {
    let hover = project_link_hover();
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            on:mouseenter=on_hover_enter(hover)
            on:mouseleave=on_hover_leave(hover)
            class="flex items-center gap-2 text-gray-300 hover:text-cyan-400 transition-colors font-semibold"
        >
            <Glyph icon class="text-xl" />
            " "
            {label}
        </a>
    }
}

#[component]
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    let hover = project_hover();
    view! {
        <div
            on:mouseenter=on_hover_enter(hover)
            on:mouseleave=on_hover_leave(hover)
            class="relative bg-gradient-to-br from-cyan-500/5 to-purple-600/5 rounded-2xl overflow-hidden border border-cyan-500/20 hover:border-cyan-400 transition-colors group cursor-pointer card-glow"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-cyan-500/0 to-purple-600/0 group-hover:from-cyan-500/10 group-hover:to-purple-600/10 transition-colors"></div>

            <div class="relative h-56 bg-gradient-to-br from-cyan-500/20 to-purple-600/20 flex items-center justify-center overflow-hidden">
                <div class="absolute inset-0 bg-grid opacity-30"></div>
                <div class="text-7xl group-hover:scale-110 transition-transform duration-500 relative z-10">
                    "💻"
                </div>
            </div>

            <div class="relative p-8">
                <h3 class="text-2xl font-black mb-3 text-gray-100 group-hover:text-gradient">
                    {project.title}
                </h3>
                <p class="text-gray-300 mb-6 leading-relaxed">{project.description}</p>

                <div class="flex flex-wrap gap-2 mb-6 min-h-0">
                    {project
                        .tech
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="px-4 py-1.5 bg-gradient-to-r from-cyan-500/20 to-purple-600/20 border border-cyan-500/30 text-cyan-300 text-sm font-semibold rounded-full">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex gap-6">
                    <ProjectLink href=project.github icon=Icon::Github label="Code" />
                    <ProjectLink href=project.live icon=Icon::ExternalLink label="Live" />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects(projects: Vec<ProjectEntry>) -> impl IntoView {
    let grid_ref = NodeRef::<Div>::new();
    use_entrance(grid_ref, project_cards());

    view! {
        <section id=Section::Projects.anchor() class="relative py-32 px-4">
            <SectionDivider spaced=true />
            <div class="max-w-7xl mx-auto">
                <SectionHeading lead="Featured" accent="Projects" />
                <div node_ref=grid_ref class="grid md:grid-cols-2 lg:grid-cols-3 gap-10">
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{app::common::render, portfolio::PortfolioDocument};

    const CHIP: &str = "text-cyan-300 text-sm font-semibold rounded-full";

    fn render_projects(json: &str) -> String {
        let projects = PortfolioDocument::from_json(json).unwrap().projects();
        render(move || view! { <Projects projects /> })
    }

    #[test]
    fn test_default_projects_render() {
        let html = render_projects("{}");
        assert!(html.contains(r#"id="projects""#));
        assert!(html.contains("E-Commerce Platform"));
        assert!(html.contains("Task Management App"));
        assert!(html.contains("Social Media Dashboard"));
        assert_eq!(html.matches(CHIP).count(), 11);
    }

    #[test]
    fn test_empty_tech_renders_no_chips() {
        let html = render_projects(
            r#"{"projects": {"projects": [
                {"title": "Bare", "description": "No stack", "tech": []}
            ]}}"#,
        );
        assert!(html.contains("Bare"));
        assert_eq!(html.matches(CHIP).count(), 0);
        assert_eq!(html.matches(r##"href="#""##).count(), 2);
    }
}
