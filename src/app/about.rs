use leptos::{html::Div, prelude::*};

use super::{
    animate::{on_hover_enter, on_hover_leave, use_entrance},
    common::{SectionDivider, SectionHeading},
};
use crate::{
    choreography::{about_bio, about_stats, stat_hover},
    portfolio::AboutContent,
    state::Section,
};

const BIO_CARD_CLASSES: [&str; 2] = [
    "p-8 bg-gradient-to-br from-cyan-500/5 to-purple-600/5 rounded-2xl border border-cyan-500/20 card-glow",
    "p-8 bg-gradient-to-br from-purple-600/5 to-cyan-500/5 rounded-2xl border border-purple-500/20 card-glow",
];

#[component]
pub fn About(content: AboutContent) -> impl IntoView {
    let bio_ref = NodeRef::<Div>::new();
    let stats_ref = NodeRef::<Div>::new();
    use_entrance(bio_ref, about_bio());
    use_entrance(stats_ref, about_stats());

    let hover = stat_hover();

    view! {
        <section id=Section::About.anchor() class="relative py-32 px-4">
            <SectionDivider spaced=true />
            <div class="max-w-6xl mx-auto">
                <SectionHeading lead="About" accent="Me" class="text-5xl md:text-6xl font-black text-center mb-16" />

                <div class="grid md:grid-cols-2 gap-16 items-center">
                    <div node_ref=bio_ref class="space-y-6">
                        {content
                            .paragraphs
                            .into_iter()
                            .zip(BIO_CARD_CLASSES)
                            .map(|(paragraph, class)| {
                                view! {
                                    <div class=class>
                                        <p class="text-gray-200 text-xl leading-relaxed">{paragraph}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div node_ref=stats_ref class="grid grid-cols-2 gap-6">
                        {content
                            .stats
                            .into_iter()
                            .map(|stat| {
                                view! {
                                    <div
                                        on:mouseenter=on_hover_enter(hover)
                                        on:mouseleave=on_hover_leave(hover)
                                        class="relative p-8 bg-gradient-to-br from-cyan-500/10 to-purple-600/10 rounded-2xl text-center border border-cyan-500/30 hover:border-cyan-400 cursor-pointer card-glow overflow-hidden group"
                                    >
                                        <div class="absolute inset-0 bg-gradient-to-br from-cyan-500/0 to-purple-600/0 group-hover:from-cyan-500/20 group-hover:to-purple-600/20 transition-colors"></div>
                                        <div class="relative z-10">
                                            <div class="text-5xl font-black text-gradient mb-3">{stat.value}</div>
                                            <div class="text-gray-300 font-semibold text-sm uppercase tracking-wider">
                                                {stat.label}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
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
    fn test_about_defaults_render() {
        let html = render(|| view! { <About content=PortfolioDocument::default().about() /> });
        assert!(html.contains(r#"id="about""#));
        assert!(html.contains("I am a passionate full stack web developer"));
        assert!(html.contains("With a strong foundation"));
        for value in ["3+", "50+", "20+", "30+"] {
            assert!(html.contains(value), "missing stat {value}");
        }
        assert_eq!(html.matches("text-5xl font-black text-gradient mb-3").count(), 4);
    }

    #[test]
    fn test_empty_stats_render_empty_grid() {
        let content = PortfolioDocument::from_json(r#"{"about": {"stats": []}}"#)
            .unwrap()
            .about();
        let html = render(move || view! { <About content /> });
        assert!(html.contains("grid grid-cols-2 gap-6"));
        assert_eq!(html.matches("text-5xl font-black text-gradient mb-3").count(), 0);
    }
}
