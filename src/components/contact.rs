use crate::components::glyph_icon;
use crate::content::{self, ContactMethod};
use crate::services::{clipboard, relay};
use crate::settings::Settings;
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fi_icons, Icon};
use portfolio_core::contact::{apply_submit_result, ContactForm, SubmitStatus, BANNER_TIMEOUT_SECS};
use std::time::Duration;
use tokio::time::sleep;

#[component]
pub fn Contact() -> Element {
    let settings = use_context::<Signal<Settings>>();
    let mut form = use_signal(ContactForm::default);
    let mut status = use_signal(|| SubmitStatus::Idle);
    // Monotonic banner generation; a stale auto-clear timer must not wipe a
    // banner raised by a later submission.
    let mut banner_epoch = use_signal(|| 0u64);

    let mut submit = move |_| {
        if *status.read() == SubmitStatus::Sending {
            return;
        }
        let payload = form.read().clone();
        if !payload.is_complete() {
            return;
        }
        status.set(SubmitStatus::Sending);
        let endpoint = settings.read().relay_endpoint.clone();
        spawn(async move {
            let result = relay::submit(&endpoint, &payload).await;
            if let Err(ref e) = result {
                tracing::error!("contact form submission failed: {e}");
            }
            let new_status = {
                let mut fields = form.write();
                apply_submit_result(&mut fields, result.is_ok())
            };
            status.set(new_status);

            let epoch = *banner_epoch.read() + 1;
            banner_epoch.set(epoch);
            sleep(Duration::from_secs(BANNER_TIMEOUT_SECS)).await;
            if *banner_epoch.read() == epoch {
                status.set(SubmitStatus::Idle);
            }
        });
    };

    let input_classes = "w-full px-4 py-3 bg-slate-900 border border-slate-800 rounded-lg text-white placeholder-gray-500 focus:border-emerald-500 focus:outline-none transition-colors";

    rsx! {
        section {
            id: "contact",
            class: "py-20 bg-slate-900 relative",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",

                div {
                    class: "text-center mb-12 sm:mb-16",
                    h2 {
                        class: "text-sm font-mono text-emerald-500 uppercase tracking-wider mb-4",
                        "Let's Build Something Amazing"
                    }
                    h3 {
                        class: "text-3xl sm:text-4xl md:text-5xl font-bold text-white mb-6",
                        "Let's Build Something "
                        span { class: "text-emerald-400", "Smart" }
                    }
                    p {
                        class: "text-base sm:text-lg md:text-xl text-gray-300 max-w-3xl mx-auto px-4",
                        "Let's build something that automates the boring stuff or solves a local problem. "
                        "Ready to turn repetitive tasks into intelligent systems?"
                    }
                }

                div {
                    class: "grid grid-cols-1 lg:grid-cols-3 gap-8 sm:gap-12",

                    // Contact methods and socials
                    div {
                        class: "lg:col-span-1 space-y-6 sm:space-y-8",
                        div {
                            h4 { class: "text-xl sm:text-2xl font-bold text-white mb-4 sm:mb-6", "Get In Touch" }
                            div {
                                class: "space-y-4",
                                for method in content::CONTACT_METHODS {
                                    ContactMethodCard { key: "{method.title}", method }
                                }
                            }
                        }

                        div {
                            class: "space-y-4",
                            div {
                                class: "flex items-center space-x-3 text-gray-300",
                                span { class: "text-emerald-500", Icon { width: 20, height: 20, icon: fi_icons::FiMapPin } }
                                span { "Remote & Available Worldwide" }
                            }
                            div {
                                class: "flex items-center space-x-3 text-gray-300",
                                span { class: "text-emerald-500", Icon { width: 20, height: 20, icon: fi_icons::FiClock } }
                                span { "Usually responds within 24 hours" }
                            }
                        }

                        div {
                            h5 { class: "font-semibold text-white mb-4", "Follow My Work" }
                            div {
                                class: "flex space-x-4",
                                for social in content::SOCIAL_LINKS {
                                    a {
                                        key: "{social.name}",
                                        href: "{social.url}",
                                        class: "p-3 bg-slate-950 border border-slate-800 rounded-lg text-gray-400 {social.hover} transition-all duration-300",
                                        {glyph_icon(social.glyph, 20)}
                                    }
                                }
                            }
                        }
                    }

                    // The form
                    div {
                        class: "lg:col-span-2",
                        div {
                            class: "bg-slate-950 border border-slate-800 rounded-xl p-4 sm:p-8",
                            h4 { class: "text-xl sm:text-2xl font-bold text-white mb-4 sm:mb-6", "Start a Project" }

                            if *status.read() == SubmitStatus::Succeeded {
                                div {
                                    class: "mb-6 p-4 bg-green-500/20 border border-green-500/50 rounded-lg text-green-400",
                                    "🎉 Message sent successfully! I'll get back to you soon."
                                }
                            }
                            if *status.read() == SubmitStatus::Failed {
                                div {
                                    class: "mb-6 p-4 bg-red-500/20 border border-red-500/50 rounded-lg text-red-400",
                                    "❌ Failed to send message. Please try again or contact me directly."
                                }
                            }

                            div {
                                class: "space-y-4 sm:space-y-6",
                                div {
                                    class: "grid grid-cols-1 md:grid-cols-2 gap-4 sm:gap-6",
                                    div {
                                        label { class: "block text-sm font-medium text-gray-300 mb-2", "Name *" }
                                        input {
                                            r#type: "text",
                                            class: input_classes,
                                            placeholder: "Your name",
                                            value: "{form.read().name}",
                                            oninput: move |event| form.write().name = event.value(),
                                        }
                                    }
                                    div {
                                        label { class: "block text-sm font-medium text-gray-300 mb-2", "Email *" }
                                        input {
                                            r#type: "email",
                                            class: input_classes,
                                            placeholder: "your.email@example.com",
                                            value: "{form.read().email}",
                                            oninput: move |event| form.write().email = event.value(),
                                        }
                                    }
                                }

                                div {
                                    class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                                    div {
                                        label { class: "block text-sm font-medium text-gray-300 mb-2", "Project Type" }
                                        select {
                                            class: input_classes,
                                            value: "{form.read().project_type}",
                                            oninput: move |event| form.write().project_type = event.value(),
                                            for kind in content::PROJECT_TYPES {
                                                option {
                                                    key: "{kind.value}",
                                                    value: "{kind.value}",
                                                    selected: kind.value == form.read().project_type,
                                                    {kind.label}
                                                }
                                            }
                                        }
                                    }
                                    div {
                                        label { class: "block text-sm font-medium text-gray-300 mb-2", "Subject *" }
                                        input {
                                            r#type: "text",
                                            class: input_classes,
                                            placeholder: "What's this about?",
                                            value: "{form.read().subject}",
                                            oninput: move |event| form.write().subject = event.value(),
                                        }
                                    }
                                }

                                div {
                                    label { class: "block text-sm font-medium text-gray-300 mb-2", "Message *" }
                                    textarea {
                                        class: "{input_classes} resize-none",
                                        rows: "6",
                                        placeholder: "Tell me about your project, the problems you're trying to solve, or just say hello! The more details, the better I can help.",
                                        value: "{form.read().message}",
                                        oninput: move |event| form.write().message = event.value(),
                                    }
                                }

                                button {
                                    class: "w-full md:w-auto flex items-center justify-center space-x-2 px-8 py-4 bg-emerald-600 hover:bg-emerald-700 disabled:bg-emerald-600/50 text-white font-semibold rounded-lg transition-all duration-300",
                                    disabled: *status.read() == SubmitStatus::Sending,
                                    onclick: move |event| submit(event),
                                    if *status.read() == SubmitStatus::Sending {
                                        span { class: "w-5 h-5 border-2 border-white/30 border-t-white rounded-full spinner" }
                                        span { "Sending..." }
                                    } else {
                                        Icon { width: 20, height: 20, icon: fi_icons::FiSend }
                                        span { "Send Message" }
                                    }
                                }
                            }
                        }
                    }
                }

                // Call to action
                div {
                    class: "mt-16 text-center bg-gradient-to-r from-emerald-600/20 to-purple-600/20 border border-emerald-500/30 rounded-xl p-8",
                    h4 {
                        class: "text-2xl font-bold text-white mb-4",
                        "Ready to Build Something That Actually Works?"
                    }
                    p {
                        class: "text-gray-300 mb-6 max-w-2xl mx-auto",
                        "Let's turn your ideas into tools that solve real problems. Whether it's automating workflows, "
                        "building intelligent bots, or creating systems that scale - I'm here to make it happen."
                    }
                    div {
                        class: "flex flex-col sm:flex-row gap-4 justify-center",
                        a {
                            href: "#projects",
                            class: "px-6 py-3 bg-emerald-600 hover:bg-emerald-700 text-white font-semibold rounded-lg transition-colors",
                            "See My Work"
                        }
                        a {
                            href: "mailto:{content::CONTACT_EMAIL}",
                            class: "px-6 py-3 border border-emerald-500 text-emerald-500 hover:bg-emerald-500 hover:text-white font-semibold rounded-lg transition-all",
                            "Start a Project"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactMethodCard(method: &'static ContactMethod) -> Element {
    let mut copied = use_signal(|| false);

    let copy_onclick = move |_| {
        if clipboard::copy_text(method.value).is_ok() {
            copied.set(true);
            spawn(async move {
                sleep(Duration::from_secs(2)).await;
                copied.set(false);
            });
        }
    };

    rsx! {
        div {
            class: "relative group",
            a {
                href: "{method.action}",
                class: "block p-4 bg-slate-950 border border-slate-800 rounded-lg hover:border-emerald-500/50 transition-all duration-300",
                div {
                    class: "flex items-start space-x-4",
                    div {
                        class: "p-3 rounded-lg bg-gradient-to-r {method.accent} text-white group-hover:scale-110 transition-transform",
                        {glyph_icon(method.glyph, 20)}
                    }
                    div {
                        class: "flex-1",
                        h5 {
                            class: "font-semibold text-white group-hover:text-emerald-500 transition-colors",
                            {method.title}
                        }
                        p { class: "text-emerald-500 font-mono text-sm mb-1", {method.value} }
                        p { class: "text-gray-400 text-sm", {method.description} }
                    }
                }
            }
            button {
                class: "absolute top-3 right-3 p-1.5 rounded text-gray-500 opacity-0 group-hover:opacity-100 hover:bg-slate-800 hover:text-white transition-all",
                onclick: copy_onclick,
                if *copied.read() {
                    Icon { width: 16, height: 16, icon: fi_icons::FiCheck }
                } else {
                    Icon { width: 16, height: 16, icon: fi_icons::FiClipboard }
                }
            }
        }
    }
}
