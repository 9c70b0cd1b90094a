use dioxus::prelude::*;
use portfolio_core::terminal::{self, TranscriptAction, TranscriptEntry};
use std::time::Duration;
use tokio::time::sleep;

#[component]
pub fn TerminalPlayground(on_close: EventHandler<()>) -> Element {
    let mut entries = use_signal(|| {
        terminal::WELCOME
            .iter()
            .map(|line| TranscriptEntry::output(*line))
            .collect::<Vec<_>>()
    });
    let mut input = use_signal(String::new);
    // Set once `exit` ran; no further input is accepted after the notice.
    let mut closing = use_signal(|| false);

    // Focus the prompt as soon as the overlay mounts.
    use_effect(move || {
        spawn(async move {
            let _ = document::eval(
                r#"
                const el = document.getElementById('terminal-input');
                if (el) { el.focus(); }
            "#,
            )
            .await;
        });
    });

    // Keep the transcript pinned to the newest line.
    use_effect(move || {
        let _ = entries.read();
        spawn(async move {
            sleep(Duration::from_millis(20)).await;
            let _ = document::eval(
                r#"
                const el = document.getElementById('terminal-scroll');
                if (el) { el.scrollTop = el.scrollHeight; }
            "#,
            )
            .await;
        });
    });

    let mut run_command = move || {
        if *closing.read() {
            return;
        }
        let line = input.read().clone();
        input.set(String::new());

        entries
            .write()
            .push(TranscriptEntry::input(format!("{} {}", terminal::PROMPT, line.trim())));

        let outcome = terminal::execute(&line);
        match outcome.action {
            TranscriptAction::Clear => entries.write().clear(),
            TranscriptAction::Close => {
                {
                    let mut log = entries.write();
                    for output in outcome.lines {
                        log.push(TranscriptEntry::output(output));
                    }
                }
                closing.set(true);
                on_close.call(());
            }
            TranscriptAction::None => {
                let mut log = entries.write();
                for output in outcome.lines {
                    log.push(TranscriptEntry::output(output));
                }
            }
        }
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/80 backdrop-blur-sm z-50 flex items-center justify-center p-4",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-slate-950 border border-emerald-500/30 rounded-lg w-full max-w-4xl h-[600px] flex flex-col overflow-hidden",
                onclick: |event| event.stop_propagation(),

                // Title bar
                div {
                    class: "bg-slate-900 px-4 py-2 flex items-center justify-between border-b border-emerald-500/30",
                    div {
                        class: "flex items-center space-x-2",
                        span { class: "w-3 h-3 rounded-full bg-red-500" }
                        span { class: "w-3 h-3 rounded-full bg-yellow-500" }
                        span { class: "w-3 h-3 rounded-full bg-green-500" }
                    }
                    div { class: "text-emerald-400 font-mono text-sm", "Final Boss Terminal" }
                    button {
                        class: "text-gray-400 hover:text-white transition-colors",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                // Transcript and prompt
                div {
                    id: "terminal-scroll",
                    class: "flex-1 p-4 overflow-y-auto font-mono text-sm bg-slate-950",
                    for (index, entry) in entries.read().iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "mb-1",
                            div {
                                class: if entry.kind == terminal::EntryKind::Input {
                                    "text-emerald-400"
                                } else {
                                    "text-gray-300"
                                },
                                "{entry.content}"
                            }
                        }
                    }

                    div {
                        class: "flex items-center mt-2",
                        span { class: "text-emerald-400 mr-2", {terminal::PROMPT} }
                        input {
                            id: "terminal-input",
                            r#type: "text",
                            class: "flex-1 bg-transparent text-emerald-400 outline-none font-mono",
                            placeholder: "Type a command...",
                            autocomplete: "off",
                            disabled: *closing.read(),
                            value: "{input}",
                            oninput: move |event| input.set(event.value()),
                            onkeydown: move |event| {
                                if event.key() == Key::Enter {
                                    event.prevent_default();
                                    run_command();
                                }
                            },
                        }
                        span { class: "text-emerald-400 terminal-cursor ml-1", "█" }
                    }
                }
            }
        }
    }
}
