use crate::components::glyph_icon;
use crate::content;
use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            id: "about",
            class: "py-20 bg-slate-900 relative",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",

                div {
                    class: "text-center mb-16",
                    h2 {
                        class: "text-sm font-mono text-emerald-500 uppercase tracking-wider mb-4",
                        "About the Developer"
                    }
                    h3 {
                        class: "text-4xl md:text-5xl font-bold text-white mb-6",
                        "Building Tools That Actually Work"
                    }
                    p {
                        class: "text-xl text-gray-300 max-w-3xl mx-auto leading-relaxed",
                        "I'm Abone Joseph, passionate about solving problems using automation, code, and AI. "
                        "Every project I build serves a real purpose - whether it's streamlining business processes, "
                        "creating intelligent assistants, or building platforms that actually work."
                    }
                }

                div {
                    class: "grid grid-cols-2 md:grid-cols-4 gap-4 sm:gap-6 mb-12 sm:mb-16",
                    for stat in content::STATS {
                        div {
                            key: "{stat.label}",
                            class: "text-center p-4 sm:p-6 bg-slate-950 border border-slate-800 rounded-lg hover:border-emerald-500/50 hover:-translate-y-1 transition-all duration-300",
                            div {
                                class: "flex justify-center mb-3 sm:mb-4",
                                div {
                                    class: "p-2 sm:p-3 bg-emerald-600/20 rounded-full text-emerald-400",
                                    {glyph_icon(stat.glyph, 24)}
                                }
                            }
                            div { class: "text-3xl font-bold text-white mb-1", {stat.number} }
                            div { class: "text-sm text-gray-400", {stat.label} }
                        }
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-6 sm:gap-8",
                    for step in content::JOURNEY {
                        div {
                            key: "{step.phase}",
                            class: "p-6 bg-slate-950 border border-slate-800 rounded-xl hover:border-emerald-500/50 transition-all duration-300",
                            div {
                                class: "inline-flex p-3 rounded-lg bg-gradient-to-r {step.accent} text-white mb-4",
                                {glyph_icon(step.glyph, 24)}
                            }
                            h4 { class: "text-xl font-bold text-white mb-3", {step.phase} }
                            p { class: "text-gray-400 leading-relaxed", {step.description} }
                        }
                    }
                }
            }
        }
    }
}
