use crate::content;
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fi_icons, Icon};
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

const TYPE_INTERVAL: Duration = Duration::from_millis(50);

#[component]
pub fn Hero() -> Element {
    let mut typed = use_signal(String::new);

    // Scripted typing effect over the fixed headline. The task dies with the
    // component scope, so a remount restarts it cleanly.
    use_effect(move || {
        spawn(async move {
            for ch in content::HERO_HEADLINE.chars() {
                sleep(TYPE_INTERVAL).await;
                typed.write().push(ch);
            }
        });
    });

    // Decorative pulsing dots, positioned once per mount.
    let particles = use_hook(|| {
        let mut rng = rand::thread_rng();
        (0..20)
            .map(|_| {
                (
                    rng.gen_range(0.0..100.0f64),
                    rng.gen_range(0.0..100.0f64),
                    rng.gen_range(0.0..2.0f64),
                )
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        section {
            id: "home",
            class: "min-h-screen flex items-center justify-center relative overflow-hidden pt-16",

            div {
                class: "absolute inset-0 overflow-hidden",
                for (index, (left, top, delay)) in particles.iter().enumerate() {
                    span {
                        key: "{index}",
                        class: "hero-particle absolute w-1 h-1 bg-emerald-500 rounded-full",
                        style: "left: {left}%; top: {top}%; animation-delay: {delay}s;",
                    }
                }
            }

            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center relative z-10",
                div {
                    class: "space-y-8",

                    div {
                        class: "space-y-4",
                        div {
                            class: "text-sm font-mono text-emerald-500 uppercase tracking-wider",
                            {content::HERO_TAGLINE}
                        }
                        h1 {
                            class: "text-3xl sm:text-4xl md:text-6xl lg:text-7xl font-bold leading-tight",
                            span { class: "text-white", "Hi, I'm " }
                            span {
                                class: "text-transparent bg-clip-text bg-gradient-to-r from-blue-400 via-purple-500 to-cyan-400 font-mono",
                                {content::DEVELOPER_NAME}
                            }
                            br {}
                            span {
                                class: "block text-white text-xl sm:text-2xl md:text-3xl lg:text-4xl mt-4",
                                "{typed}"
                                span { class: "terminal-cursor text-emerald-500", "|" }
                            }
                        }
                    }

                    p {
                        class: "text-base sm:text-lg md:text-xl text-gray-300 max-w-2xl mx-auto px-4",
                        {content::HERO_SUBTEXT}
                    }

                    div {
                        class: "flex flex-col sm:flex-row gap-3 sm:gap-4 justify-center items-center pt-6 sm:pt-8 px-4",
                        a {
                            href: "#projects",
                            class: "group bg-emerald-600 hover:bg-emerald-700 text-white px-6 sm:px-8 py-3 sm:py-4 rounded-lg font-semibold text-base sm:text-lg transition-all duration-300 flex items-center space-x-2 shadow-lg hover:shadow-xl",
                            Icon { width: 20, height: 20, icon: fi_icons::FiEye }
                            span { "See Projects" }
                            Icon { width: 16, height: 16, icon: fi_icons::FiExternalLink }
                        }
                        a {
                            href: content::CV_URL,
                            class: "group border-2 border-emerald-500 text-emerald-500 hover:bg-emerald-500 hover:text-white px-6 sm:px-8 py-3 sm:py-4 rounded-lg font-semibold text-base sm:text-lg transition-all duration-300 flex items-center space-x-2",
                            Icon { width: 20, height: 20, icon: fi_icons::FiDownload }
                            span { "Download CV" }
                        }
                    }

                    div {
                        class: "pt-12",
                        p { class: "text-sm text-gray-400 mb-4 font-mono", "SKILLS" }
                        div {
                            class: "flex flex-wrap justify-center gap-3 text-gray-300 max-w-4xl mx-auto",
                            for skill in content::HERO_SKILLS {
                                span {
                                    key: "{skill}",
                                    class: "px-3 py-1 bg-emerald-600/20 border border-emerald-500/30 rounded-md text-emerald-300 text-sm",
                                    {*skill}
                                }
                            }
                        }
                    }
                }

                div {
                    class: "absolute bottom-8 left-1/2 -translate-x-1/2 text-gray-400 scroll-hint",
                    Icon { width: 24, height: 24, icon: fi_icons::FiChevronDown }
                }
            }
        }
    }
}
