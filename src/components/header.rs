use crate::content;
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fi_icons, Icon};

#[component]
pub fn Header(scrolled: bool, on_terminal_toggle: EventHandler<()>) -> Element {
    let mut mobile_open = use_signal(|| false);

    let bar_classes = if scrolled {
        "bg-slate-950/90 backdrop-blur-md border-b border-slate-800"
    } else {
        "bg-transparent"
    };

    rsx! {
        header {
            class: "fixed top-0 left-0 right-0 z-40 transition-all duration-300 {bar_classes}",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex items-center justify-between h-16",

                    // Logo
                    div {
                        class: "flex items-center space-x-3",
                        div {
                            class: "relative",
                            div {
                                class: "w-10 h-10 bg-gradient-to-br from-blue-500 via-purple-600 to-cyan-500 rounded-xl flex items-center justify-center shadow-lg text-white",
                                Icon { width: 24, height: 24, icon: fi_icons::FiCode }
                            }
                            div {
                                class: "absolute -top-1 -right-1 w-4 h-4 bg-gradient-to-r from-yellow-400 to-orange-500 rounded-full flex items-center justify-center text-white",
                                Icon { width: 10, height: 10, icon: fi_icons::FiZap }
                            }
                        }
                        div {
                            class: "flex flex-col",
                            span {
                                class: "font-bold text-xl text-white tracking-tight",
                                "Abone "
                                span {
                                    class: "text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-cyan-400",
                                    "Joseph"
                                }
                            }
                            span {
                                class: "text-xs text-gray-400 font-medium tracking-wider",
                                {content::DEVELOPER_TITLE}
                            }
                        }
                    }

                    // Desktop navigation
                    nav {
                        class: "hidden md:flex items-center space-x-8",
                        for item in content::NAV_ITEMS {
                            a {
                                key: "{item.name}",
                                href: "{item.href}",
                                class: "text-gray-300 hover:text-white transition-colors duration-200 font-medium",
                                {item.name}
                            }
                        }
                        button {
                            class: "flex items-center space-x-2 px-4 py-2 bg-slate-900 border border-emerald-500/30 rounded-lg text-emerald-400 hover:border-emerald-500 transition-colors font-mono text-sm",
                            onclick: move |_| on_terminal_toggle.call(()),
                            Icon { width: 16, height: 16, icon: fi_icons::FiTerminal }
                            span { "terminal" }
                        }
                        a {
                            href: content::CV_URL,
                            class: "flex items-center space-x-2 px-4 py-2 bg-emerald-600 hover:bg-emerald-700 rounded-lg text-white font-semibold text-sm transition-colors",
                            Icon { width: 16, height: 16, icon: fi_icons::FiDownload }
                            span { "CV" }
                        }
                    }

                    // Mobile menu toggle
                    button {
                        class: "md:hidden text-gray-300 hover:text-white p-2",
                        onclick: move |_| mobile_open.toggle(),
                        if *mobile_open.read() {
                            Icon { width: 24, height: 24, icon: fi_icons::FiX }
                        } else {
                            Icon { width: 24, height: 24, icon: fi_icons::FiMenu }
                        }
                    }
                }
            }

            if *mobile_open.read() {
                nav {
                    class: "md:hidden bg-slate-950/95 backdrop-blur-md border-b border-slate-800 px-4 py-4 space-y-2",
                    for item in content::NAV_ITEMS {
                        a {
                            key: "{item.name}",
                            href: "{item.href}",
                            class: "block py-2 text-gray-300 hover:text-white transition-colors font-medium",
                            onclick: move |_| mobile_open.set(false),
                            {item.name}
                        }
                    }
                    button {
                        class: "flex items-center space-x-2 py-2 text-emerald-400 font-mono text-sm",
                        onclick: move |_| {
                            mobile_open.set(false);
                            on_terminal_toggle.call(());
                        },
                        Icon { width: 16, height: 16, icon: fi_icons::FiTerminal }
                        span { "terminal" }
                    }
                }
            }
        }
    }
}
