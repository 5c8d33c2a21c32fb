use leptos::{html::Div, prelude::*};

use super::{
    animate::{on_hover_enter, on_hover_leave, use_entrance},
    common::{Glyph, SectionDivider, SectionHeading},
};
use crate::{
    choreography::{skill_categories, skill_hover, skill_tiles},
    portfolio::{SkillCategory, SkillEntry, SkillsContent},
    state::Section,
};

#[component]
fn SkillTile(skill: SkillEntry) -> impl IntoView {
    let hover = skill_hover();
    // entries without a recognised icon get the default glyph in the accent color
    let (icon, own_icon) = skill.glyph();
    let (class, style) = if own_icon {
        let style = skill
            .color
            .as_ref()
            .map(|c| format!("color: {c}"))
            .unwrap_or_default();
        ("drop-shadow-lg", style)
    } else {
        ("text-cyan-400 drop-shadow-lg", String::new())
    };

    view! {
        <div
            on:mouseenter=on_hover_enter(hover)
            on:mouseleave=on_hover_leave(hover)
            class="group relative"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-cyan-500/20 to-purple-600/20 rounded-3xl blur-xl opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
            <div class="relative h-full p-8 bg-gradient-to-br from-slate-800/80 to-slate-900/80 backdrop-blur-sm rounded-3xl border-2 border-cyan-500/20 group-hover:border-cyan-400/60 transition-colors duration-300 cursor-pointer">
                <div class="mb-6 flex justify-center">
                    <div class="relative w-24 h-24 flex items-center justify-center">
                        <div
                            class="absolute inset-0 rounded-full bg-gradient-to-r from-cyan-400 via-blue-500 to-purple-600 opacity-0 group-hover:opacity-100 group-hover:animate-spin transition-opacity duration-300"
                            style="animation-duration: 3s"
                        ></div>
                        <div class="absolute inset-1 rounded-full bg-gradient-to-br from-slate-800 to-slate-900"></div>
                        <div class="relative text-5xl group-hover:scale-110 transition-transform duration-300">
                            <Glyph icon class=class style=style />
                        </div>
                    </div>
                </div>
                <h3 class="text-center text-lg font-bold text-gray-200 group-hover:text-transparent group-hover:bg-clip-text group-hover:bg-gradient-to-r group-hover:from-cyan-400 group-hover:to-purple-600 transition-colors duration-300">
                    {skill.name}
                </h3>
                <div class="absolute top-3 right-3 w-2 h-2 bg-cyan-400 rounded-full opacity-0 group-hover:opacity-100 transition-opacity"></div>
                <div class="absolute bottom-3 left-3 w-2 h-2 bg-purple-600 rounded-full opacity-0 group-hover:opacity-100 transition-opacity"></div>
            </div>
        </div>
    }
}

#[component]
fn Categories(categories: Vec<SkillCategory>) -> impl IntoView {
    let categories_ref = NodeRef::<Div>::new();
    use_entrance(categories_ref, skill_categories());

    view! {
        <div node_ref=categories_ref class="grid md:grid-cols-3 gap-8">
            {categories
                .into_iter()
                .enumerate()
                .map(|(i, category)| {
                    view! {
                        <div class="group relative p-10 bg-gradient-to-br from-slate-800/60 to-slate-900/60 backdrop-blur-sm rounded-3xl border-2 border-cyan-500/20 hover:border-cyan-400/60 transition-colors duration-300 card-glow">
                            <div class="absolute -top-6 left-8 w-12 h-12 flex items-center justify-center bg-gradient-to-br from-cyan-500 to-blue-600 rounded-2xl shadow-lg shadow-cyan-500/50 font-black text-xl">
                                {i + 1}
                            </div>
                            <h3 class="text-2xl font-black text-gradient mb-8 mt-2">{category.title}</h3>
                            <ul class="space-y-4">
                                {category
                                    .items
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <li class="flex items-center text-gray-200 text-lg group/item">
                                                <div class="relative mr-4">
                                                    <span class="w-3 h-3 bg-gradient-to-r from-cyan-400 to-purple-600 rounded-full block shadow-lg shadow-cyan-500/50"></span>
                                                    <span class="absolute inset-0 w-3 h-3 bg-gradient-to-r from-cyan-400 to-purple-600 rounded-full animate-ping opacity-75"></span>
                                                </div>
                                                <span class="group-hover/item:text-cyan-400 transition-colors duration-200">
                                                    {item}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Skills(content: SkillsContent) -> impl IntoView {
    let grid_ref = NodeRef::<Div>::new();
    use_entrance(grid_ref, skill_tiles());

    view! {
        <section id=Section::Skills.anchor() class="relative py-10 px-4 overflow-hidden">
            <SectionDivider />
            <div class="absolute top-1/4 left-0 w-96 h-96 bg-cyan-500/10 rounded-full blur-3xl"></div>
            <div class="absolute bottom-1/4 right-0 w-96 h-96 bg-purple-600/10 rounded-full blur-3xl"></div>

            <div class="max-w-7xl mx-auto relative z-10">
                <SectionHeading lead="My" accent="Skills" class="text-5xl md:text-7xl font-black text-center mb-6" />
                <p class="text-center text-gray-300 text-xl mb-20 max-w-2xl mx-auto">
                    "Technologies and tools I use to bring ideas to life"
                </p>

                <div
                    node_ref=grid_ref
                    class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-6 md:gap-8 mb-24"
                >
                    {content
                        .tiles
                        .into_iter()
                        .map(|skill| view! { <SkillTile skill /> })
                        .collect_view()}
                </div>

                {content.categories.map(|categories| view! { <Categories categories /> })}
            </div>
        </section>
    }
}
