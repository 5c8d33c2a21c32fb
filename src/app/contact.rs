use leptos::{ev, html::Div, prelude::*};

use super::{
    animate::{on_hover_enter, on_hover_leave, use_entrance},
    common::{Glyph, SectionDivider, SectionHeading},
};
use crate::{
    choreography::{contact_form, contact_info, contact_row_hover},
    portfolio::ContactContent,
    state::{ContactForm, FormField, Section},
};

const FIELD_CLASS: &str = "w-full px-6 py-4 bg-gradient-to-br from-cyan-500/5 to-purple-600/5 border border-cyan-500/30 rounded-2xl focus:border-cyan-400 focus:outline-none transition-all text-gray-200 placeholder-gray-500";

pub const DEMO_ACKNOWLEDGEMENT: &str = "Message sent! (This is a demo)";

/// Default submit handler. Nothing is sent anywhere.
pub fn demo_submit(form: ContactForm) {
    log::info!("Form submitted: {form:?}");
    #[cfg(target_arch = "wasm32")]
    if let Err(err) = window().alert_with_message(DEMO_ACKNOWLEDGEMENT) {
        log::warn!("Could not show submit confirmation: {err:?}");
    }
}

#[component]
pub fn Contact(
    content: ContactContent,
    /// Receives the form contents on submit. Defaults to [`demo_submit`].
    #[prop(optional)]
    on_submit: Option<Callback<ContactForm>>,
) -> impl IntoView {
    let on_submit = on_submit.unwrap_or_else(|| Callback::new(demo_submit));
    let (form, set_form) = signal(ContactForm::default());

    let info_ref = NodeRef::<Div>::new();
    let fields_ref = NodeRef::<Div>::new();
    use_entrance(info_ref, contact_info());
    use_entrance(fields_ref, contact_form());

    let row_hover = contact_row_hover();

    let on_input = move |ev: ev::Event| {
        let Some(name) = event_target::<web_sys::Element>(&ev).get_attribute("name") else {
            return;
        };
        let value = event_target_value(&ev);
        set_form.update(|form| {
            if !form.set_named(&name, value) {
                log::warn!("Ignoring input from unknown field {name}");
            }
        });
    };

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(form.get_untracked());
    };

    view! {
        <section id=Section::Contact.anchor() class="relative py-32 px-4">
            <SectionDivider spaced=true />

            <div class="max-w-6xl mx-auto">
                <SectionHeading lead="Get In" accent="Touch" />

                <div class="grid md:grid-cols-2 gap-16">
                    <div node_ref=info_ref>
                        <h3 class="text-3xl font-black mb-6 text-gradient">"Let's work together!"</h3>
                        <p class="text-gray-200 text-xl mb-12 leading-relaxed">{content.message}</p>

                        <div class="space-y-6">
                            {content
                                .channels
                                .into_iter()
                                .map(|channel| {
                                    view! {
                                        <div
                                            on:mouseenter=on_hover_enter(row_hover)
                                            on:mouseleave=on_hover_leave(row_hover)
                                            class="flex items-center gap-6 p-6 bg-gradient-to-br from-cyan-500/5 to-purple-600/5 rounded-2xl border border-cyan-500/20 cursor-pointer card-glow group"
                                        >
                                            <div class="w-14 h-14 flex items-center justify-center rounded-full bg-gradient-to-br from-cyan-500/20 to-purple-600/20 text-2xl text-cyan-400 group-hover:scale-110 transition-transform">
                                                <Glyph icon=channel.icon />
                                            </div>
                                            <div>
                                                <div class="text-sm text-gray-400 uppercase tracking-wider mb-1">
                                                    {channel.label}
                                                </div>
                                                <div class="text-gray-200 font-semibold text-lg">
                                                    {channel.value}
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <form on:submit=submit>
                        <div node_ref=fields_ref class="space-y-6">
                            <div>
                                <input
                                    type="text"
                                    name=FormField::Name.name()
                                    placeholder="Your Name"
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=on_input
                                    required
                                    class=FIELD_CLASS
                                />
                            </div>
                            <div>
                                <input
                                    type="email"
                                    name=FormField::Email.name()
                                    placeholder="Your Email"
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=on_input
                                    required
                                    class=FIELD_CLASS
                                />
                            </div>
                            <div>
                                <textarea
                                    name=FormField::Message.name()
                                    placeholder="Your Message"
                                    prop:value=move || form.with(|f| f.message.clone())
                                    on:input=on_input
                                    required
                                    rows="6"
                                    class=format!("{FIELD_CLASS} resize-none")
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                class="w-full px-10 py-4 bg-gradient-to-r from-cyan-500 to-blue-600 rounded-2xl font-bold text-lg hover:shadow-2xl hover:shadow-cyan-500/50 transition-all"
                            >
                                "Send Message"
                            </button>
                        </div>
                    </form>
                </div>
            </div>

            <footer class="text-center mt-20 text-gray-400">
                <p class="text-lg">
                    {format!(
                        "© {} Portfolio. Built with Rust, Leptos & Tailwind CSS",
                        env!("BUILD_YEAR"),
                    )}
                </p>
            </footer>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{app::common::render, portfolio::PortfolioDocument};

    #[test]
    fn test_contact_defaults_render() {
        let html = render(|| view! { <Contact content=PortfolioDocument::default().contact() /> });
        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains("your.email@example.com"));
        assert!(html.contains("+1 234 567 8900"));
        assert!(html.contains("Your City, Country"));
        assert_eq!(html.matches("group-hover:scale-110").count(), 3);
        assert!(html.contains(env!("BUILD_YEAR")));
    }

    #[test]
    fn test_form_controls_named_after_fields() {
        let html = render(|| view! { <Contact content=PortfolioDocument::default().contact() /> });
        for field in [FormField::Name, FormField::Email, FormField::Message] {
            assert!(html.contains(&format!(r#"name="{}""#, field.name())));
        }
        assert!(html.contains("Send Message"));
    }

    #[test]
    fn test_injected_submit_receives_form() {
        let received = Arc::new(Mutex::new(Vec::<ContactForm>::new()));
        let on_submit = {
            let received = Arc::clone(&received);
            Callback::new(move |form: ContactForm| received.lock().unwrap().push(form))
        };

        let html = render(move || {
            view! { <Contact content=PortfolioDocument::default().contact() on_submit /> }
        });
        assert!(html.contains("Send Message"));

        let mut form = ContactForm::default();
        form.set(FormField::Name, "Ada".to_string());
        form.set(FormField::Message, "Hello".to_string());
        Owner::new().with(|| on_submit.run(form.clone()));

        assert_eq!(*received.lock().unwrap(), vec![form]);
    }

    #[test]
    fn test_demo_submit_is_infallible() {
        demo_submit(ContactForm::default());
        let mut form = ContactForm::default();
        form.set(FormField::Email, "someone@example.com".to_string());
        demo_submit(form);
    }
}
