//! Keyword dispatch for the chat assistant.
//!
//! Free-text input is lower-cased and tested against an ordered list of
//! keyword groups; the first group with a matching substring wins and one of
//! its candidate replies is chosen uniformly at random. Input that matches
//! nothing falls through to the default group. Stateless per call.

use rand::seq::SliceRandom;

/// A topic with its trigger keywords and candidate replies.
pub struct TopicGroup {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub replies: &'static [&'static str],
}

pub static GREETING: TopicGroup = TopicGroup {
    name: "greeting",
    keywords: &["hello", "hi", "hey"],
    replies: &[
        "Hello! I'm Oracle GPT, ready to help you learn more about this developer's work!",
        "Hi there! Want to know about the amazing projects and tools built here?",
        "Hey! I'm the AI assistant that showcases this developer's skills. What would you like to know?",
    ],
};

pub static PROJECTS: TopicGroup = TopicGroup {
    name: "projects",
    keywords: &["project", "work", "built"],
    replies: &[
        "This developer has built some incredible tools! From Telegram bots that automate payments to AI assistants that work like magic. The School Portal System manages entire academic ecosystems, while the Currency Tracker Bot provides real-time FX alerts. Each project solves real problems!",
        "The project portfolio is impressive! Oracle GPT (that's me!), WhatsApp Auto Reply Bot, Payment Link Generator, and more. Every tool is built to automate boring tasks and solve actual problems people face daily.",
    ],
};

pub static SKILLS: TopicGroup = TopicGroup {
    name: "skills",
    keywords: &["skill", "tech", "stack", "language"],
    replies: &[
        "The tech stack is battle-tested: JavaScript, Python, PHP, React, Node.js, MongoDB, Firebase, and specialized APIs like Telegram Bot API, WhatsApp API, and OpenAI API. Currently mastering TypeScript and cloud deployment!",
        "This developer excels in full-stack development with a focus on automation and AI integration. From frontend React apps to backend Python bots, the skills span across languages, frameworks, databases, and intelligent APIs.",
    ],
};

pub static AUTOMATION: TopicGroup = TopicGroup {
    name: "automation",
    keywords: &["automat", "bot", "ai"],
    replies: &[
        "Automation is the core philosophy here! Why do manual work when you can build bots and systems that handle it? From payment processing to customer support, everything gets automated intelligently.",
        "The goal is simple: build tools so smart they feel like magic, but solve problems so real you can't live without them. Every project automates something that used to waste time.",
    ],
};

pub static CONTACT: TopicGroup = TopicGroup {
    name: "contact",
    keywords: &["contact", "reach", "hire", "work together"],
    replies: &[
        "Ready to build something amazing? You can reach out via email, Telegram, or WhatsApp. The developer loves collaborating on projects that automate boring stuff or solve local problems!",
        "Let's connect! Whether you need a bot, an AI system, or just want to chat about automation, the contact section has all the details. The bots speak for themselves! 🤖",
    ],
};

/// Replies used when no keyword group matches.
pub static DEFAULT: TopicGroup = TopicGroup {
    name: "default",
    keywords: &[],
    replies: &[
        "That's an interesting question! This developer specializes in building functional tools, bots, and AI systems. What specific aspect would you like to know more about?",
        "I'm here to help you learn about the projects and skills showcased in this portfolio. Feel free to ask about automation, AI integration, or any specific technology!",
        "Great question! This portfolio showcases a developer who builds systems that actually work and solve real problems. What would you like to explore?",
    ],
};

/// Match order matters: the first group containing a keyword wins.
pub static TOPICS: &[&TopicGroup] = &[&GREETING, &PROJECTS, &SKILLS, &AUTOMATION, &CONTACT];

/// Resolve the winning topic group for a raw input line.
pub fn resolve(input: &str) -> &'static TopicGroup {
    let message = input.to_lowercase();
    TOPICS
        .iter()
        .copied()
        .find(|group| group.keywords.iter().any(|keyword| message.contains(keyword)))
        .unwrap_or(&DEFAULT)
}

/// Pick one reply for the input, uniformly at random among the winning
/// group's candidates.
pub fn reply_to(input: &str) -> &'static str {
    // Reply tables are static and non-empty, so `choose` cannot fail.
    resolve(input).replies.choose(&mut rand::thread_rng()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_keywords_select_the_greeting_group() {
        for input in ["hello", "Hi!", "HEY there", "well hello friend"] {
            assert_eq!(resolve(input).name, "greeting", "input: {input}");
        }
    }

    #[test]
    fn unrecognized_input_falls_back_to_default() {
        for input in ["", "what is the meaning of life?", "42", "weather tomorrow"] {
            assert_eq!(resolve(input).name, "default", "input: {input}");
        }
    }

    #[test]
    fn first_matching_group_wins() {
        // Contains both a greeting and a projects keyword; greeting is listed
        // first so it must win.
        assert_eq!(resolve("hello, show me your projects").name, "greeting");
        // "work together" also contains "work", which the projects group
        // claims earlier in the match order.
        assert_eq!(resolve("can we work together?").name, "projects");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(resolve("TELL ME ABOUT YOUR SKILLS").name, "skills");
        assert_eq!(resolve("AuToMaTion plans?").name, "automation");
    }

    #[test]
    fn substring_matching_catches_word_stems() {
        // "automat" is a stem keyword, so inflected forms match too.
        assert_eq!(resolve("do you automate things?").name, "automation");
    }

    #[test]
    fn reply_comes_from_the_winning_group_only() {
        for _ in 0..50 {
            assert!(GREETING.replies.contains(&reply_to("hey")));
            assert!(DEFAULT.replies.contains(&reply_to("zzz unmatched zzz")));
        }
    }

    #[test]
    fn every_group_has_candidates() {
        for group in TOPICS.iter().copied().chain([&DEFAULT]) {
            assert!(!group.replies.is_empty(), "group {} is empty", group.name);
        }
    }
}
