use crate::components::glyph_icon;
use crate::content::{self, Project};
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fi_icons, Icon};

/// State of the demo-video modal; `None` while closed.
#[derive(Clone, PartialEq)]
struct VideoModal {
    title: String,
    src: String,
}

#[component]
pub fn Projects() -> Element {
    let mut video_modal = use_signal(|| None::<VideoModal>);

    rsx! {
        section {
            id: "projects",
            class: "py-20 bg-slate-950 relative",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",

                div {
                    class: "text-center mb-16",
                    h2 {
                        class: "text-sm font-mono text-emerald-500 uppercase tracking-wider mb-4",
                        "🧠 Battle-Tested Tools"
                    }
                    h3 {
                        class: "text-4xl md:text-5xl font-bold text-white mb-6",
                        "Systems I've Built"
                    }
                    p {
                        class: "text-xl text-gray-300 max-w-3xl mx-auto",
                        "Systems I've built that solve real-world problems through automation, AI, and smart integrations."
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6 sm:gap-8 mb-12",
                    for project in content::PROJECTS.iter().filter(|p| p.featured) {
                        ProjectCard {
                            key: "{project.name}",
                            project,
                            on_play: move |modal| video_modal.set(Some(modal)),
                        }
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                    for project in content::PROJECTS.iter().filter(|p| !p.featured) {
                        ProjectCard {
                            key: "{project.name}",
                            project,
                            on_play: move |modal| video_modal.set(Some(modal)),
                        }
                    }
                }
            }

            {video_modal.read().clone().map(|modal| rsx! {
                div {
                    class: "fixed inset-0 bg-black/90 backdrop-blur-sm z-50 flex items-center justify-center p-4",
                    onclick: move |_| video_modal.set(None),
                    div {
                        class: "bg-slate-900 border border-slate-700 rounded-xl w-full max-w-3xl overflow-hidden",
                        onclick: |event| event.stop_propagation(),
                        div {
                            class: "flex items-center justify-between px-4 py-3 border-b border-slate-700",
                            span { class: "text-white font-semibold", "{modal.title}" }
                            button {
                                class: "text-gray-400 hover:text-white transition-colors",
                                onclick: move |_| video_modal.set(None),
                                Icon { width: 20, height: 20, icon: fi_icons::FiX }
                            }
                        }
                        video {
                            class: "w-full",
                            src: "{modal.src}",
                            controls: true,
                            autoplay: true,
                        }
                    }
                }
            })}
        }
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_play: EventHandler<VideoModal>) -> Element {
    rsx! {
        div {
            class: "group bg-slate-900 border border-slate-800 rounded-xl overflow-hidden hover:border-emerald-500/50 hover:-translate-y-1 transition-all duration-300",

            div {
                class: "relative h-40 sm:h-48 bg-gradient-to-br from-gray-800 to-gray-900 flex items-center justify-center overflow-hidden",
                div { class: "absolute inset-0 bg-gradient-to-br {project.accent} opacity-20" }
                div {
                    class: "text-white z-10",
                    {glyph_icon(project.glyph, 64)}
                }
                {project.video.map(|video| rsx! {
                    div {
                        class: "absolute top-4 right-4 z-20",
                        button {
                            class: "p-2 bg-emerald-600/80 backdrop-blur-sm rounded-full text-white hover:bg-emerald-700 transition-colors",
                            onclick: move |_| {
                                on_play.call(VideoModal {
                                    title: project.name.to_string(),
                                    src: video.to_string(),
                                });
                            },
                            Icon { width: 16, height: 16, icon: fi_icons::FiPlay }
                        }
                    }
                })}
            }

            div {
                class: "p-6",
                h4 {
                    class: "text-xl font-bold text-white mb-2 group-hover:text-emerald-400 transition-colors",
                    {project.name}
                }
                p { class: "text-gray-400 mb-4", {project.description} }
                div {
                    class: "flex flex-wrap gap-2 mb-4",
                    for tech in project.stack {
                        span {
                            key: "{tech}",
                            class: "px-2 py-1 bg-slate-800 border border-slate-700 rounded text-xs text-gray-300 font-mono",
                            {*tech}
                        }
                    }
                }
                {project.demo_url.map(|url| rsx! {
                    a {
                        href: "{url}",
                        class: "inline-flex items-center space-x-2 text-emerald-400 hover:text-emerald-300 text-sm font-semibold transition-colors",
                        span { "Live Demo" }
                        Icon { width: 14, height: 14, icon: fi_icons::FiExternalLink }
                    }
                })}
            }
        }
    }
}
