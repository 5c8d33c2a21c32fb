use leptos::{html::Div, prelude::*};

use super::{
    animate::{on_hover_enter, on_hover_leave, use_mount_tween},
    common::Glyph,
};
use crate::{
    choreography::{hero_button_hover, hero_scroll_bob, hero_sequence, hero_social_hover, Step},
    icons::Icon,
    motion::Targets,
    particles::{clock_seed, particle_field, Particle},
    portfolio::HeroContent,
    state::Section,
};

const CALLS_TO_ACTION: [(Section, &str); 2] =
    [(Section::Projects, "View My Work"), (Section::Contact, "Contact Me")];

/// Decorative drifting dots behind the hero. Generated after mount so the
/// server and client renders agree; dropped together with the hero.
#[component]
fn ParticleField() -> impl IntoView {
    let (particles, set_particles) = signal(Vec::<Particle>::new());
    Effect::new(move |_| set_particles.set(particle_field(clock_seed())));

    view! {
        <div class="absolute inset-0 pointer-events-none">
            {move || {
                particles
                    .get()
                    .into_iter()
                    .map(|p| view! { <div class="particle" style=p.style()></div> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn Hero(content: HeroContent) -> impl IntoView {
    let title_ref = NodeRef::<Div>::new();
    let subtitle_ref = NodeRef::<Div>::new();
    let description_ref = NodeRef::<Div>::new();
    let socials_ref = NodeRef::<Div>::new();
    let buttons_ref = NodeRef::<Div>::new();

    let sequence = hero_sequence(content.socials.len(), CALLS_TO_ACTION.len());
    let play = |target: NodeRef<Div>, step: Step, targets: Targets| {
        use_mount_tween(target, step.tween, targets, step.start)
    };
    play(title_ref, sequence.title, Targets::Container);
    play(subtitle_ref, sequence.subtitle, Targets::Container);
    play(description_ref, sequence.description, Targets::Container);
    play(socials_ref, sequence.socials, Targets::Children);
    play(buttons_ref, sequence.buttons, Targets::Children);

    let social_hover = hero_social_hover();
    let button_hover = hero_button_hover();

    view! {
        <section
            id=Section::Home.anchor()
            class="relative min-h-screen flex items-center justify-center px-4 pt-16 overflow-hidden"
        >
            <div class="orb w-96 h-96 bg-cyan-500 top-20 -left-48 animate-pulse"></div>
            <div
                class="orb w-96 h-96 bg-purple-600 bottom-20 -right-48 animate-pulse"
                style="animation-delay: 1s"
            ></div>

            <ParticleField />

            <div class="max-w-7xl mx-auto text-center relative z-10">
                <div class="flex justify-center mb-6">
                    <div class="p-4 bg-gradient-to-br from-cyan-500/10 to-purple-600/10 rounded-2xl border border-cyan-500/20">
                        <Glyph icon=Icon::Code class="text-5xl text-cyan-400" />
                    </div>
                </div>

                <div node_ref=title_ref>
                    <h1 class="text-6xl md:text-8xl font-black mb-6 leading-tight">
                        "Hi, I'm " <span class="text-gradient glow-text">{content.name}</span>
                    </h1>
                </div>

                <div node_ref=subtitle_ref>
                    <p class="text-3xl md:text-4xl font-bold bg-gradient-to-r from-cyan-300 to-purple-400 bg-clip-text text-transparent mb-8">
                        {content.title}
                    </p>
                </div>

                <div node_ref=description_ref>
                    <p class="text-xl text-gray-300 mb-12 max-w-3xl mx-auto leading-relaxed">
                        {content.description}
                    </p>
                </div>

                <div node_ref=socials_ref class="flex justify-center gap-6 mb-12">
                    {content
                        .socials
                        .into_iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.icon.name()
                                    on:mouseenter=on_hover_enter(social_hover)
                                    on:mouseleave=on_hover_leave(social_hover)
                                    class="w-14 h-14 flex items-center justify-center rounded-full bg-gradient-to-br from-cyan-500/10 to-purple-600/10 border border-cyan-500/30 text-2xl text-cyan-400 hover:text-white hover:border-cyan-400 transition-colors cursor-pointer card-glow"
                                >
                                    <Glyph icon=social.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div node_ref=buttons_ref class="flex flex-wrap justify-center gap-4">
                    {CALLS_TO_ACTION
                        .iter()
                        .enumerate()
                        .map(|(i, (section, label))| {
                            let class = if i == 0 {
                                "px-10 py-4 bg-gradient-to-r from-cyan-500 to-blue-600 rounded-full font-bold text-lg hover:shadow-2xl hover:shadow-cyan-500/50 cursor-pointer"
                            } else {
                                "px-10 py-4 border-2 border-cyan-500 rounded-full font-bold text-lg hover:bg-cyan-500/10 hover:shadow-xl hover:shadow-cyan-500/30 cursor-pointer"
                            };
                            view! {
                                <a
                                    href=section.href()
                                    on:mouseenter=on_hover_enter(button_hover)
                                    on:mouseleave=on_hover_leave(button_hover)
                                    class=class
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="absolute bottom-12 left-1/2 -translate-x-1/2">
                    <div
                        class="w-7 h-12 border-2 border-cyan-400 rounded-full flex justify-center shadow-lg shadow-cyan-500/30"
                        style=hero_scroll_bob().style()
                    >
                        <div class="w-1.5 h-3 bg-cyan-400 rounded-full mt-2 shadow-lg shadow-cyan-500/50"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{app::common::render, portfolio::PortfolioDocument};

    #[test]
    fn test_hero_defaults_render() {
        let html = render(|| view! { <Hero content=PortfolioDocument::default().hero() /> });
        assert!(html.contains(r#"id="home""#));
        assert!(html.contains("Your Name"));
        assert!(html.contains("Full Stack Web Developer"));
        assert!(html.contains("devicon-github-plain"));
        assert!(html.contains("devicon-linkedin-plain"));
        assert!(html.contains("devicon-twitter-original"));
        assert!(html.contains("View My Work"));
        assert!(html.contains(r##"href="#contact""##));
    }

    #[test]
    fn test_particles_are_not_server_rendered() {
        let html = render(|| view! { <Hero content=PortfolioDocument::default().hero() /> });
        assert!(!html.contains(r#"class="particle""#));
        assert!(html.contains("animation: drift"));
    }
}
