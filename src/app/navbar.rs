use leptos::{html::Div, prelude::*};
use leptos_use::use_window_scroll;

use super::{
    animate::{on_hover_enter, on_hover_leave, use_mount_tween},
    common::Glyph,
};
use crate::{
    choreography::{nav_entrance, nav_link_hover, nav_logo_hover},
    icons::Icon,
    motion::Targets,
    state::{is_scrolled, MenuState, Section},
};

#[component]
pub fn Navbar() -> impl IntoView {
    let bar_ref = NodeRef::<Div>::new();
    let (menu, set_menu) = signal(MenuState::default());
    // the scroll listener lives as long as this component
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    use_mount_tween(bar_ref, nav_entrance(), Targets::Container, 0.0);

    let logo_hover = nav_logo_hover();
    let link_hover = nav_link_hover();

    view! {
        <div
            node_ref=bar_ref
            class=move || {
                if scrolled.get() {
                    "fixed w-full z-50 transition-colors duration-300 bg-slate-900/95 backdrop-blur-sm shadow-lg"
                } else {
                    "fixed w-full z-50 transition-colors duration-300 bg-transparent"
                }
            }
        >
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a
                        href=Section::Home.href()
                        on:mouseenter=on_hover_enter(logo_hover)
                        on:mouseleave=on_hover_leave(logo_hover)
                        class="text-2xl font-bold text-gradient cursor-pointer"
                    >
                        "Portfolio"
                    </a>

                    <div class="hidden md:flex space-x-8">
                        {Section::ALL
                            .iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.href()
                                        on:mouseenter=on_hover_enter(link_hover)
                                        on:mouseleave=on_hover_leave(link_hover)
                                        class="text-gray-300 hover:text-primary transition-colors"
                                    >
                                        {section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="md:hidden">
                        <button
                            on:click=move |_| set_menu.update(MenuState::toggle)
                            class="text-2xl"
                            aria-label="Toggle navigation"
                            aria-expanded=move || menu.get().is_open().to_string()
                        >
                            {move || {
                                let icon = if menu.get().is_open() { Icon::Close } else { Icon::Menu };
                                view! { <Glyph icon /> }
                            }}
                        </button>
                    </div>
                </div>
            </nav>

            <Show when=move || menu.get().is_open()>
                <div class="md:hidden bg-slate-900/95 backdrop-blur-sm">
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        {Section::ALL
                            .iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.href()
                                        on:click=move |_| set_menu.update(MenuState::close)
                                        class="block px-3 py-2 text-gray-300 hover:text-primary transition-colors"
                                    >
                                        {section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::common::render;

    #[test]
    fn test_navbar_links_every_section() {
        let html = render(|| view! { <Navbar /> });
        for section in Section::ALL {
            assert!(html.contains(&format!(r#"href="{}""#, section.href())));
        }
        assert!(html.contains("bg-transparent"));
        assert!(html.contains(r#"aria-expanded="false""#));
    }
}
