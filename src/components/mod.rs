pub mod about;
pub mod animated_cursor;
pub mod bot_chat;
pub mod contact;
pub mod header;
pub mod hero;
pub mod loading;
pub mod matrix_background;
pub mod projects;
pub mod skills;
pub mod terminal_playground;

use crate::content::Glyph;
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fi_icons, Icon};

/// Render the feather icon behind a semantic content glyph.
pub fn glyph_icon(glyph: Glyph, size: u32) -> Element {
    match glyph {
        Glyph::Bot => rsx! { Icon { width: size, height: size, icon: fi_icons::FiCpu } },
        Glyph::BookOpen => rsx! { Icon { width: size, height: size, icon: fi_icons::FiBookOpen } },
        Glyph::CloudRain => rsx! { Icon { width: size, height: size, icon: fi_icons::FiCloudRain } },
        Glyph::Code => rsx! { Icon { width: size, height: size, icon: fi_icons::FiCode } },
        Glyph::Coffee => rsx! { Icon { width: size, height: size, icon: fi_icons::FiCoffee } },
        Glyph::Database => rsx! { Icon { width: size, height: size, icon: fi_icons::FiDatabase } },
        Glyph::DollarSign => rsx! { Icon { width: size, height: size, icon: fi_icons::FiDollarSign } },
        Glyph::Github => rsx! { Icon { width: size, height: size, icon: fi_icons::FiGithub } },
        Glyph::Linkedin => rsx! { Icon { width: size, height: size, icon: fi_icons::FiLinkedin } },
        Glyph::Mail => rsx! { Icon { width: size, height: size, icon: fi_icons::FiMail } },
        Glyph::MessageCircle => rsx! { Icon { width: size, height: size, icon: fi_icons::FiMessageCircle } },
        Glyph::Phone => rsx! { Icon { width: size, height: size, icon: fi_icons::FiPhone } },
        Glyph::Server => rsx! { Icon { width: size, height: size, icon: fi_icons::FiServer } },
        Glyph::Smartphone => rsx! { Icon { width: size, height: size, icon: fi_icons::FiSmartphone } },
        Glyph::Star => rsx! { Icon { width: size, height: size, icon: fi_icons::FiStar } },
        Glyph::Target => rsx! { Icon { width: size, height: size, icon: fi_icons::FiTarget } },
        Glyph::Tool => rsx! { Icon { width: size, height: size, icon: fi_icons::FiTool } },
        Glyph::TrendingUp => rsx! { Icon { width: size, height: size, icon: fi_icons::FiTrendingUp } },
        Glyph::Twitter => rsx! { Icon { width: size, height: size, icon: fi_icons::FiTwitter } },
        Glyph::Zap => rsx! { Icon { width: size, height: size, icon: fi_icons::FiZap } },
    }
}
