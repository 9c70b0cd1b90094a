use dioxus::prelude::*;

/// Boot screen shown while the shell pretends to initialize.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-slate-950 flex items-center justify-center",
            div {
                class: "text-center",
                div {
                    class: "text-4xl font-mono mb-4 text-emerald-500",
                    span { class: "glitch", "INITIALIZING..." }
                }
                div {
                    class: "flex space-x-1 justify-center",
                    span { class: "w-3 h-3 bg-emerald-500 rounded-full boot-dot" }
                    span { class: "w-3 h-3 bg-emerald-500 rounded-full boot-dot boot-dot-2" }
                    span { class: "w-3 h-3 bg-emerald-500 rounded-full boot-dot boot-dot-3" }
                }
            }
        }
    }
}
