use dioxus::prelude::*;
use dioxus_free_icons::{icons::fi_icons, Icon};
use portfolio_core::dispatch;
use portfolio_core::models::{Message, Sender};
use rand::Rng;
use std::ops::Range;
use std::time::Duration;
use tokio::time::sleep;

const GREETING_SEED: &str = "👋 Hey there! I'm Oracle GPT, the AI assistant built by this developer. Ask me anything about the projects, tech stack, or just chat!";

/// Simulated thinking time before the reply appears, in milliseconds.
const REPLY_DELAY_MS: Range<u64> = 1000..3000;

#[component]
pub fn BotChat() -> Element {
    let mut messages = use_signal(|| vec![Message::bot(GREETING_SEED)]);
    let mut draft = use_signal(String::new);
    let mut is_open = use_signal(|| false);
    let mut is_typing = use_signal(|| false);

    // Keep the newest message in view. The short delay lets the DOM render
    // the appended bubble before we scroll.
    use_effect(move || {
        let _ = messages.read();
        let _ = is_typing.read();
        spawn(async move {
            sleep(Duration::from_millis(20)).await;
            let _ = document::eval(
                r#"
                const el = document.getElementById('bot-chat-messages');
                if (el) { el.scrollTop = el.scrollHeight; }
            "#,
            )
            .await;
        });
    });

    let mut submit = move || {
        let text = draft.read().trim().to_string();
        if text.is_empty() {
            return;
        }
        if *is_typing.read() {
            // One reply in flight at a time.
            tracing::warn!("reply pending, ignoring chat submission");
            return;
        }
        draft.set(String::new());
        messages.write().push(Message::user(text.clone()));
        is_typing.set(true);
        spawn(async move {
            let delay = rand::thread_rng().gen_range(REPLY_DELAY_MS);
            sleep(Duration::from_millis(delay)).await;
            messages.write().push(Message::bot(dispatch::reply_to(&text)));
            is_typing.set(false);
        });
    };

    rsx! {
        div {
            class: "fixed bottom-4 right-4 sm:bottom-6 sm:right-6 z-40",

            if *is_open.read() {
                div {
                    class: "absolute bottom-16 right-0 w-80 sm:w-96 h-[500px] flex flex-col bg-slate-950/95 backdrop-blur-sm border border-slate-700 rounded-xl shadow-2xl",

                    // Header
                    div {
                        class: "flex items-center justify-between p-4 border-b border-slate-700",
                        div {
                            class: "flex items-center space-x-3",
                            div {
                                class: "w-8 h-8 bg-gradient-to-r from-emerald-500 to-emerald-600 rounded-full flex items-center justify-center text-white",
                                Icon { width: 16, height: 16, icon: fi_icons::FiCpu }
                            }
                            div {
                                h3 { class: "font-semibold text-white text-sm", "Oracle GPT" }
                                p { class: "text-xs text-green-400", "● Online" }
                            }
                        }
                        button {
                            class: "text-gray-400 hover:text-white transition-colors p-1",
                            onclick: move |_| is_open.set(false),
                            Icon { width: 16, height: 16, icon: fi_icons::FiX }
                        }
                    }

                    // Transcript
                    div {
                        id: "bot-chat-messages",
                        class: "flex-1 p-3 space-y-3 overflow-y-auto",
                        for message in messages.read().iter() {
                            MessageBubble { key: "{message.id}", message: message.clone() }
                        }
                        if *is_typing.read() {
                            TypingIndicator {}
                        }
                    }

                    // Input
                    div {
                        class: "p-3 border-t border-slate-700",
                        div {
                            class: "flex space-x-2",
                            input {
                                r#type: "text",
                                class: "flex-1 bg-slate-800 border border-slate-600 rounded-lg px-3 py-2 text-white placeholder-gray-400 focus:outline-none focus:border-emerald-500 text-sm",
                                placeholder: "Ask me anything...",
                                value: "{draft}",
                                oninput: move |event| draft.set(event.value()),
                                onkeydown: move |event| {
                                    if event.key() == Key::Enter && !event.data.modifiers().contains(Modifiers::SHIFT) {
                                        event.prevent_default();
                                        submit();
                                    }
                                },
                            }
                            button {
                                class: "bg-emerald-500 hover:bg-emerald-600 disabled:bg-gray-600 text-white p-2 rounded-lg transition-colors",
                                disabled: draft.read().trim().is_empty(),
                                onclick: move |_| submit(),
                                Icon { width: 16, height: 16, icon: fi_icons::FiSend }
                            }
                        }
                    }
                }
            }

            // Floating toggle button
            button {
                class: "relative w-14 h-14 bg-gradient-to-r from-emerald-500 to-emerald-600 hover:from-emerald-600 hover:to-emerald-700 rounded-full shadow-lg hover:shadow-xl transition-all duration-300 flex items-center justify-center text-white",
                onclick: move |_| is_open.toggle(),
                if *is_open.read() {
                    Icon { width: 24, height: 24, icon: fi_icons::FiX }
                } else {
                    Icon { width: 24, height: 24, icon: fi_icons::FiMessageCircle }
                    span { class: "absolute -top-1 -right-1 w-3 h-3 bg-red-500 rounded-full notify-dot" }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: Message) -> Element {
    let is_user = message.sender == Sender::User;

    let container = if is_user { "flex justify-end" } else { "flex justify-start" };
    let bubble = if is_user {
        "bg-emerald-500 text-white"
    } else {
        "bg-slate-800 text-gray-100"
    };

    rsx! {
        div {
            class: "{container}",
            div {
                class: "max-w-[85%] rounded-lg p-2.5 text-sm {bubble}",
                div {
                    class: "flex items-start space-x-2",
                    if is_user {
                        span { class: "mt-0.5 flex-shrink-0", Icon { width: 12, height: 12, icon: fi_icons::FiUser } }
                    } else {
                        span { class: "mt-0.5 flex-shrink-0 text-emerald-400", Icon { width: 12, height: 12, icon: fi_icons::FiCpu } }
                    }
                    div {
                        class: "flex-1",
                        p { class: "text-xs leading-relaxed", "{message.text}" }
                        p { class: "text-xs opacity-60 mt-1", "{message.timestamp}" }
                    }
                }
            }
        }
    }
}

#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div {
            class: "flex justify-start",
            div {
                class: "bg-slate-800 rounded-lg p-2.5 max-w-[85%]",
                div {
                    class: "flex items-center space-x-2",
                    span { class: "text-emerald-400", Icon { width: 12, height: 12, icon: fi_icons::FiCpu } }
                    div {
                        class: "flex space-x-1",
                        span { class: "w-1.5 h-1.5 bg-emerald-400 rounded-full boot-dot" }
                        span { class: "w-1.5 h-1.5 bg-emerald-400 rounded-full boot-dot boot-dot-2" }
                        span { class: "w-1.5 h-1.5 bg-emerald-400 rounded-full boot-dot boot-dot-3" }
                    }
                }
            }
        }
    }
}
