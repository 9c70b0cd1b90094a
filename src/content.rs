//! Static portfolio content rendered by the presentation components.
//!
//! Everything here is fixed at compile time; components only read it.

/// Semantic glyph names, mapped to feather icons by the components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Bot,
    BookOpen,
    CloudRain,
    Code,
    Coffee,
    Database,
    DollarSign,
    Github,
    Linkedin,
    Mail,
    MessageCircle,
    Phone,
    Server,
    Smartphone,
    Star,
    Target,
    Tool,
    TrendingUp,
    Twitter,
    Zap,
}

pub const DEVELOPER_NAME: &str = "Abone Joseph";
pub const DEVELOPER_TITLE: &str = "FULL STACK DEVELOPER";
pub const HERO_TAGLINE: &str = "Full Stack Developer • Bot Builder • AI Systems Expert";
pub const HERO_HEADLINE: &str = "Full Stack Developer & Problem Solver";
pub const HERO_SUBTEXT: &str =
    "I build bots, systems & AI solutions that solve real problems. From automation to full-stack applications.";
pub const CV_URL: &str = "/videos/Abone_Joseph_CV.pdf";
pub const CONTACT_EMAIL: &str = "abonejoseph@gmail.com";

pub const HERO_SKILLS: &[&str] = &[
    "Python",
    "React",
    "PHP",
    "JavaScript",
    "TypeScript",
    "Video Editing",
    "AI Integration",
    "Bot Development",
];

#[derive(PartialEq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "Projects", href: "#projects" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Skills", href: "#skills" },
    NavItem { name: "Contact", href: "#contact" },
];

#[derive(PartialEq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
    pub stack: &'static [&'static str],
    /// Optional demo-video asset, shown in the video modal.
    pub video: Option<&'static str>,
    pub demo_url: Option<&'static str>,
    pub featured: bool,
    /// Tailwind gradient classes for the card accent.
    pub accent: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Oracle GPT",
        description: "Your personal AI assistant like ChatGPT built with OpenAI API",
        glyph: Glyph::Star,
        stack: &["Python", "OpenAI API", "Flask", "React"],
        video: Some("/videos/oracle gpt video.mp4"),
        demo_url: Some("https://courageous-mochi-71a6b7.netlify.app/"),
        featured: true,
        accent: "from-purple-500 to-pink-500",
    },
    Project {
        name: "School Portal System",
        description: "Full academic management system with login, grade reports, staff/admin panel",
        glyph: Glyph::BookOpen,
        stack: &["React", "Node.js", "MongoDB", "Express"],
        video: None,
        demo_url: None,
        featured: true,
        accent: "from-blue-500 to-cyan-500",
    },
    Project {
        name: "Telegram AI Assistant",
        description: "A Telegram bot that acts like a pocket AI for chats",
        glyph: Glyph::Zap,
        stack: &["Python", "Telegram Bot API", "OpenAI", "Redis"],
        video: None,
        demo_url: None,
        featured: true,
        accent: "from-green-500 to-teal-500",
    },
    Project {
        name: "Payment Link Generator",
        description: "Automates Telegram bot payments via secure links",
        glyph: Glyph::DollarSign,
        stack: &["Node.js", "Stripe API", "Telegram API", "PostgreSQL"],
        video: Some("/videos/telegram payment link.mp4"),
        demo_url: None,
        featured: true,
        accent: "from-orange-500 to-red-500",
    },
    Project {
        name: "WhatsApp Auto Reply Bot",
        description: "A smart responder built on WhatsApp Business API",
        glyph: Glyph::Bot,
        stack: &["Node.js", "WhatsApp API", "NLP", "MongoDB"],
        video: None,
        demo_url: None,
        featured: false,
        accent: "from-emerald-500 to-green-500",
    },
    Project {
        name: "Currency Tracker Bot",
        description: "Alerts users of black market FX rates in real time",
        glyph: Glyph::Database,
        stack: &["Python", "Telegram API", "Web Scraping", "SQLite"],
        video: Some("/videos/telegram currency tracker.mp4"),
        demo_url: None,
        featured: true,
        accent: "from-yellow-500 to-orange-500",
    },
    Project {
        name: "Oracle Weather",
        description: "Professional weather forecast app with interactive maps and detailed analytics",
        glyph: Glyph::CloudRain,
        stack: &["JavaScript", "Weather API", "HTML/CSS", "Responsive Design"],
        video: None,
        demo_url: Some("https://abonechima.github.io/weather-app/"),
        featured: true,
        accent: "from-sky-500 to-blue-500",
    },
];

#[derive(PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub glyph: Glyph,
}

pub const STATS: &[Stat] = &[
    Stat { number: "50+", label: "Projects Built", glyph: Glyph::Code },
    Stat { number: "10+", label: "Bots Deployed", glyph: Glyph::Zap },
    Stat { number: "5+", label: "APIs Integrated", glyph: Glyph::Target },
    Stat { number: "∞", label: "Problems Solved", glyph: Glyph::Coffee },
];

#[derive(PartialEq)]
pub struct JourneyPhase {
    pub phase: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
    pub accent: &'static str,
}

pub const JOURNEY: &[JourneyPhase] = &[
    JourneyPhase {
        phase: "The Problem Solver",
        description: "Started coding to automate boring tasks and solve real-world problems that others just accepted as 'the way things are'.",
        glyph: Glyph::Target,
        accent: "from-yellow-500 to-orange-500",
    },
    JourneyPhase {
        phase: "The Bot Builder",
        description: "Discovered the power of bots and APIs. Built my first Telegram bot and never looked back - automation became my superpower.",
        glyph: Glyph::Zap,
        accent: "from-blue-500 to-purple-500",
    },
    JourneyPhase {
        phase: "The System Architect",
        description: "Evolved from simple scripts to full-stack systems. Now I build platforms that scale and tools that teams actually want to use.",
        glyph: Glyph::TrendingUp,
        accent: "from-green-500 to-teal-500",
    },
];

#[derive(PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0-100, rendered as a bar width.
    pub level: u8,
    pub experience: &'static str,
}

#[derive(PartialEq)]
pub struct SkillCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub glyph: Glyph,
    pub accent: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        key: "languages",
        title: "Languages",
        glyph: Glyph::Code,
        accent: "from-blue-500 to-cyan-500",
        skills: &[
            Skill { name: "Python", level: 95, experience: "4+ years" },
            Skill { name: "JavaScript", level: 90, experience: "3+ years" },
            Skill { name: "PHP", level: 88, experience: "3+ years" },
            Skill { name: "TypeScript", level: 85, experience: "2+ years" },
            Skill { name: "Java", level: 80, experience: "2+ years" },
            Skill { name: "HTML/CSS", level: 92, experience: "4+ years" },
        ],
    },
    SkillCategory {
        key: "frameworks",
        title: "Frameworks & Libraries",
        glyph: Glyph::Server,
        accent: "from-green-500 to-emerald-500",
        skills: &[
            Skill { name: "React", level: 90, experience: "3+ years" },
            Skill { name: "Node.js", level: 85, experience: "3+ years" },
            Skill { name: "Express.js", level: 80, experience: "2+ years" },
            Skill { name: "Laravel", level: 75, experience: "2+ years" },
        ],
    },
    SkillCategory {
        key: "databases",
        title: "Databases",
        glyph: Glyph::Database,
        accent: "from-purple-500 to-pink-500",
        skills: &[
            Skill { name: "SQL (MySQL/PostgreSQL)", level: 90, experience: "3+ years" },
            Skill { name: "MongoDB", level: 85, experience: "2+ years" },
            Skill { name: "Firebase", level: 80, experience: "2+ years" },
            Skill { name: "SQLite", level: 85, experience: "3+ years" },
        ],
    },
    SkillCategory {
        key: "apis",
        title: "Bots/APIs",
        glyph: Glyph::Bot,
        accent: "from-orange-500 to-red-500",
        skills: &[
            Skill { name: "Telegram Bot API", level: 95, experience: "3+ years" },
            Skill { name: "WhatsApp API", level: 90, experience: "2+ years" },
            Skill { name: "OpenAI API", level: 85, experience: "2+ years" },
            Skill { name: "REST APIs", level: 90, experience: "4+ years" },
        ],
    },
    SkillCategory {
        key: "tools",
        title: "Dev Tools",
        glyph: Glyph::Tool,
        accent: "from-teal-500 to-blue-500",
        skills: &[
            Skill { name: "Git & GitHub", level: 95, experience: "4+ years" },
            Skill { name: "VS Code", level: 95, experience: "4+ years" },
            Skill { name: "Postman", level: 85, experience: "3+ years" },
            Skill { name: "XAMPP", level: 80, experience: "3+ years" },
        ],
    },
    SkillCategory {
        key: "creative",
        title: "Creative & Media",
        glyph: Glyph::Smartphone,
        accent: "from-pink-500 to-rose-500",
        skills: &[
            Skill { name: "Video Editing", level: 85, experience: "3+ years" },
            Skill { name: "Content Creation", level: 80, experience: "2+ years" },
            Skill { name: "UI/UX Design", level: 75, experience: "2+ years" },
            Skill { name: "Adobe Premiere", level: 80, experience: "3+ years" },
        ],
    },
];

#[derive(PartialEq)]
pub struct ContactMethod {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub accent: &'static str,
    pub glyph: Glyph,
}

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        title: "Email",
        value: "abonejoseph@gmail.com",
        description: "Best for detailed project discussions",
        action: "mailto:abonejoseph@gmail.com",
        accent: "from-blue-500 to-cyan-500",
        glyph: Glyph::Mail,
    },
    ContactMethod {
        title: "Telegram",
        value: "@De_Auracle",
        description: "Quick questions and bot demos",
        action: "https://t.me/De_Auracle",
        accent: "from-blue-400 to-blue-600",
        glyph: Glyph::MessageCircle,
    },
    ContactMethod {
        title: "WhatsApp",
        value: "+234 706 887 2813",
        description: "Voice calls and urgent matters",
        action: "https://wa.me/2347068872813",
        accent: "from-green-500 to-green-600",
        glyph: Glyph::Phone,
    },
];

#[derive(PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub hover: &'static str,
    pub glyph: Glyph,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/AboneChima",
        hover: "hover:text-gray-300",
        glyph: Glyph::Github,
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/abonejoseph",
        hover: "hover:text-blue-400",
        glyph: Glyph::Linkedin,
    },
    SocialLink {
        name: "Twitter",
        url: "https://twitter.com/mainoracle10",
        hover: "hover:text-blue-400",
        glyph: Glyph::Twitter,
    },
];

#[derive(PartialEq)]
pub struct ProjectType {
    pub value: &'static str,
    pub label: &'static str,
}

pub const PROJECT_TYPES: &[ProjectType] = &[
    ProjectType { value: "general", label: "General Inquiry" },
    ProjectType { value: "bot", label: "Bot Development" },
    ProjectType { value: "webapp", label: "Web Application" },
    ProjectType { value: "api", label: "API Integration" },
    ProjectType { value: "automation", label: "Automation Solution" },
    ProjectType { value: "consultation", label: "Technical Consultation" },
];
