#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use dioxus::desktop::tao::dpi::{LogicalSize, PhysicalSize};
use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler, Config, WindowBuilder};
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fi_icons, Icon};
use dotenvy::dotenv;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::sleep;

mod components;
mod content;
mod menu;
mod services;
mod settings;

use components::animated_cursor::PointerState;
use settings::SettingsManager;

fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_default()
        .join("dev.finalboss.portfolio")
        .join("settings.json")
}

fn main() {
    dotenv().ok();
    dioxus_logger::init(tracing::Level::INFO).expect("failed to init logger");

    let initial = SettingsManager::new(settings_path()).load();

    LaunchBuilder::new()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(env!("APP_NAME"))
                        .with_resizable(true)
                        .with_inner_size(LogicalSize::new(initial.window_width, initial.window_height)),
                )
                .with_custom_head(
                    r#"<script src="https://cdn.tailwindcss.com"></script>
<link rel="preconnect" href="https://fonts.googleapis.com">
<link href="https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;700&display=swap" rel="stylesheet">
<style>"#
                        .to_string()
                        + include_str!("../assets/app.css")
                        + "</style>",
                ),
        )
        .launch(app);
}

fn app() -> Element {
    let window = use_window();
    let settings_manager = use_context_provider(|| Signal::new(SettingsManager::new(settings_path())));
    let mut settings = use_context_provider(|| {
        let loaded = settings_manager.read().load();
        Signal::new(loaded)
    });
    let mut pointer = use_context_provider(|| Signal::new(PointerState::default()));

    let mut is_loading = use_signal(|| true);
    let mut show_terminal = use_signal(|| false);
    let mut is_scrolled = use_signal(|| false);
    let mut last_known_size = use_signal(|| PhysicalSize::new(0u32, 0u32));

    // Fake boot sequence before the shell mounts.
    use_effect(move || {
        spawn(async move {
            sleep(Duration::from_secs(2)).await;
            is_loading.set(false);
        });
    });

    // One-time setup for the native menu.
    use_effect(move || {
        let menu = menu::build_menu();
        #[cfg(target_os = "macos")]
        menu.init_for_nsapp();
        #[cfg(target_os = "windows")]
        menu.init_for_hwnd(window.hwnd());
        let _ = menu;
    });

    // Track resizes so the size on screen when the user lets go of the mouse
    // can be persisted below.
    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent { event: WindowEvent::Resized(new_size), .. } = event {
            last_known_size.set(*new_size);
        }
    });

    rsx! {
        if *is_loading.read() {
            components::loading::LoadingScreen {}
        } else {
            div {
                class: "app-shell relative h-screen bg-slate-950 text-white overflow-hidden",
                onmousemove: move |event| {
                    let coords = event.data.client_coordinates();
                    let pressed = pointer.read().pressed;
                    pointer.set(PointerState { x: coords.x, y: coords.y, pressed });
                },
                onmousedown: move |_| pointer.write().pressed = true,
                onmouseup: {
                    let window = window.clone();
                    move |_| {
                        pointer.write().pressed = false;
                        let physical = *last_known_size.read();
                        if physical.width > 0 && physical.height > 0 {
                            let logical = physical.to_logical::<f64>(window.scale_factor());
                            let mut current = settings.read().clone();
                            if current.window_width != logical.width
                                || current.window_height != logical.height
                            {
                                current.window_width = logical.width;
                                current.window_height = logical.height;
                                settings.set(current);
                                if let Err(e) = settings_manager.read().save(&settings.read()) {
                                    tracing::error!("Failed to save settings: {}", e);
                                }
                            }
                        }
                    }
                },

                if settings.read().show_matrix_background {
                    components::matrix_background::MatrixBackground {}
                }
                components::animated_cursor::AnimatedCursor {}

                div {
                    id: "page-scroll",
                    class: "relative h-screen overflow-y-auto z-10",
                    onscroll: move |_| {
                        spawn(async move {
                            if let Ok(value) = document::eval(
                                r#"
                                const el = document.getElementById('page-scroll');
                                return el ? el.scrollTop : 0;
                            "#,
                            )
                            .await
                            {
                                is_scrolled.set(value.as_f64().unwrap_or(0.0) > 50.0);
                            }
                        });
                    },

                    components::header::Header {
                        scrolled: *is_scrolled.read(),
                        on_terminal_toggle: move |_| show_terminal.toggle(),
                    }
                    main {
                        components::hero::Hero {}
                        components::projects::Projects {}
                        components::about::About {}
                        components::skills::Skills {}
                        components::contact::Contact {}
                    }
                }

                if *show_terminal.read() {
                    components::terminal_playground::TerminalPlayground {
                        on_close: move |_| show_terminal.set(false),
                    }
                }

                components::bot_chat::BotChat {}

                // Scroll to top
                button {
                    class: "fixed bottom-8 left-8 bg-emerald-600 hover:bg-emerald-700 text-white p-3 rounded-full shadow-lg z-40",
                    onclick: move |_| {
                        spawn(async move {
                            let _ = document::eval(
                                r#"
                                const el = document.getElementById('page-scroll');
                                if (el) { el.scrollTo({ top: 0, behavior: 'smooth' }); }
                            "#,
                            )
                            .await;
                        });
                    },
                    Icon { width: 24, height: 24, icon: fi_icons::FiArrowUp }
                }
            }
        }
    }
}
