use crate::components::glyph_icon;
use crate::content;
use dioxus::prelude::*;

#[component]
pub fn Skills() -> Element {
    let mut active_category = use_signal(|| content::SKILL_CATEGORIES[0].key);

    let selected = content::SKILL_CATEGORIES
        .iter()
        .find(|category| category.key == *active_category.read())
        .unwrap_or(&content::SKILL_CATEGORIES[0]);

    rsx! {
        section {
            id: "skills",
            class: "py-20 bg-slate-950 relative",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",

                div {
                    class: "text-center mb-16",
                    h2 {
                        class: "text-sm font-mono text-emerald-500 uppercase tracking-wider mb-4",
                        "Technical Arsenal"
                    }
                    h3 {
                        class: "text-3xl sm:text-4xl md:text-5xl font-bold text-white mb-6",
                        "Skills & Expertise"
                    }
                    p {
                        class: "text-xl text-gray-300 max-w-3xl mx-auto",
                        "Battle-tested across languages, frameworks, databases, and the APIs that glue them together."
                    }
                }

                div {
                    class: "flex flex-wrap justify-center gap-3 mb-12",
                    for category in content::SKILL_CATEGORIES {
                        button {
                            key: "{category.key}",
                            class: if category.key == *active_category.read() {
                                "flex items-center space-x-2 px-4 py-2 bg-emerald-600 text-white rounded-lg font-semibold transition-colors"
                            } else {
                                "flex items-center space-x-2 px-4 py-2 bg-slate-900 border border-slate-800 text-gray-300 rounded-lg font-semibold hover:border-emerald-500/50 transition-colors"
                            },
                            onclick: move |_| active_category.set(category.key),
                            {glyph_icon(category.glyph, 16)}
                            span { {category.title} }
                        }
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6 max-w-4xl mx-auto",
                    for skill in selected.skills {
                        div {
                            key: "{skill.name}",
                            class: "p-4 bg-slate-900 border border-slate-800 rounded-lg",
                            div {
                                class: "flex items-center justify-between mb-2",
                                span { class: "font-semibold text-white", {skill.name} }
                                span { class: "text-sm text-gray-400 font-mono", {skill.experience} }
                            }
                            div {
                                class: "h-2 bg-slate-800 rounded-full overflow-hidden",
                                div {
                                    class: "h-full bg-gradient-to-r {selected.accent} rounded-full transition-all duration-700",
                                    style: "width: {skill.level}%;",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
