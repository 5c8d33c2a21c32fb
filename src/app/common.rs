use leptos::{html::Div, prelude::*};

use super::animate::use_entrance;
use crate::{icons::Icon, motion::EntranceBinding};

#[component]
pub fn Glyph(
    icon: Icon,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] style: String,
) -> impl IntoView {
    view! { <i class=format!("{} {class}", icon.class()) style=style aria-hidden="true"></i> }
}

#[component]
pub fn SectionDivider(#[prop(optional)] spaced: bool) -> impl IntoView {
    view! { <div class=if spaced { "section-divider mb-20" } else { "section-divider" }></div> }
}

/// Section title with the accent word in the gradient style. Fades up into
/// place when scrolled to.
#[component]
pub fn SectionHeading(
    lead: &'static str,
    accent: &'static str,
    #[prop(default = "text-5xl md:text-6xl font-black text-center mb-20")] class: &'static str,
) -> impl IntoView {
    let heading_ref = NodeRef::<Div>::new();
    use_entrance(heading_ref, EntranceBinding::heading());

    view! {
        <div node_ref=heading_ref>
            <h2 class=class>
                {lead} " " <span class="text-gradient glow-text">{accent}</span>
            </h2>
        </div>
    }
}

#[component]
pub fn Loading() -> impl IntoView {
    view! { <div class="flex items-center justify-center min-h-screen">"Loading..."</div> }
}

/// Renders a view to server-side HTML under a fresh reactive owner.
#[cfg(all(test, feature = "ssr"))]
pub fn render<V: IntoView + 'static>(view: impl FnOnce() -> V) -> String {
    Owner::new().with(|| view().to_html())
}
