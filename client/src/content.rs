//! Static site content: navigation, titles, skills, projects, contact details.
//!
//! Everything here is fixed configuration loaded once; components borrow it
//! as `'static` data and never mutate it.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::skills::{SkillCategory, SkillEntry, SkillLevel};

pub const OWNER_NAME: &str = "Ghanshyam Hadiya";
pub const OWNER_FIRST_NAME: &str = "Ghanshyam";
pub const OWNER_LAST_NAME: &str = "Hadiya";
pub const OWNER_EMAIL: &str = "ghanshyamhadiya013@gmail.com";
pub const RESUME_HREF: &str = "/assets/Ghanshyam_Hadiya.pdf";
pub const PROFILE_IMAGE_SRC: &str = "/assets/profile.jpg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Section element id, also the fragment the link points at.
    pub id: &'static str,
    pub label: &'static str,
}

impl NavLink {
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.id)
    }
}

/// Navigable sections in document order. The scroll tracker relies on
/// this order.
pub static NAV_LINKS: &[NavLink] = &[
    NavLink { id: "home", label: "Home" },
    NavLink { id: "skills", label: "Skills" },
    NavLink { id: "projects", label: "Projects" },
    NavLink { id: "contact", label: "Contact" },
];

pub static JOB_TITLES: &[&str] = &["Full Stack Developer", "React Developer", "Node.js Engineer", "UI/UX Enthusiast"];

pub static SKILLS: &[SkillEntry] = &[
    SkillEntry {
        name: "HTML5",
        mark: "H5",
        accent: "#E34F26",
        category: SkillCategory::Frontend,
        level: SkillLevel::Expert,
        description: "Semantic markup, accessibility best practices, and modern HTML5 features.",
        year_started: 2020,
        related_skills: &["CSS3", "JavaScript"],
    },
    SkillEntry {
        name: "CSS3",
        mark: "C3",
        accent: "#1572B6",
        category: SkillCategory::Frontend,
        level: SkillLevel::Expert,
        description: "Advanced layouts with Flexbox and Grid, animations, and responsive design.",
        year_started: 2020,
        related_skills: &["HTML5", "Tailwind CSS"],
    },
    SkillEntry {
        name: "JavaScript",
        mark: "JS",
        accent: "#F7DF1E",
        category: SkillCategory::Frontend,
        level: SkillLevel::Advanced,
        description: "ES6+, DOM manipulation, asynchronous programming, and functional patterns.",
        year_started: 2020,
        related_skills: &["React", "Node.js"],
    },
    SkillEntry {
        name: "React",
        mark: "Re",
        accent: "#61DAFB",
        category: SkillCategory::Frontend,
        level: SkillLevel::Advanced,
        description: "Component architecture, hooks, context API, and performance optimization.",
        year_started: 2021,
        related_skills: &["Redux", "JavaScript"],
    },
    SkillEntry {
        name: "Redux",
        mark: "Rx",
        accent: "#764ABC",
        category: SkillCategory::Frontend,
        level: SkillLevel::Intermediate,
        description: "State management, reducers, and middleware integration with React applications.",
        year_started: 2021,
        related_skills: &["React", "JavaScript"],
    },
    SkillEntry {
        name: "Tailwind CSS",
        mark: "Tw",
        accent: "#06B6D4",
        category: SkillCategory::Frontend,
        level: SkillLevel::Advanced,
        description: "Utility-first approach, responsive design, and custom configurations.",
        year_started: 2022,
        related_skills: &["CSS3", "React"],
    },
    SkillEntry {
        name: "Bootstrap",
        mark: "Bs",
        accent: "#563D7C",
        category: SkillCategory::Frontend,
        level: SkillLevel::Advanced,
        description: "Component-based UI development, grid system, and customization.",
        year_started: 2020,
        related_skills: &["CSS3", "HTML5"],
    },
    SkillEntry {
        name: "Node.js",
        mark: "No",
        accent: "#339933",
        category: SkillCategory::Backend,
        level: SkillLevel::Intermediate,
        description: "Server-side JavaScript, asynchronous programming, and API development.",
        year_started: 2021,
        related_skills: &["Express", "MongoDB"],
    },
    SkillEntry {
        name: "Express",
        mark: "Ex",
        accent: "#FFFFFF",
        category: SkillCategory::Backend,
        level: SkillLevel::Intermediate,
        description: "RESTful API development, middleware integration, and route handling.",
        year_started: 2021,
        related_skills: &["Node.js", "MongoDB"],
    },
    SkillEntry {
        name: "MongoDB",
        mark: "Mo",
        accent: "#47A248",
        category: SkillCategory::Backend,
        level: SkillLevel::Intermediate,
        description: "NoSQL database design, CRUD operations, and Mongoose ODM.",
        year_started: 2021,
        related_skills: &["Express", "Node.js"],
    },
    SkillEntry {
        name: "SQL",
        mark: "SQ",
        accent: "#00758F",
        category: SkillCategory::Backend,
        level: SkillLevel::Intermediate,
        description: "Relational database design, complex queries, and data manipulation.",
        year_started: 2021,
        related_skills: &["MySQL", "Node.js"],
    },
    SkillEntry {
        name: "EJS",
        mark: "EJ",
        accent: "#A91E50",
        category: SkillCategory::Backend,
        level: SkillLevel::Intermediate,
        description: "Server-side templating, dynamic content generation, and layout management.",
        year_started: 2021,
        related_skills: &["Express", "Node.js"],
    },
    SkillEntry::uncurated("Postman", "Pm", "#FFCA28", SkillCategory::Tools),
    SkillEntry {
        name: "Git",
        mark: "Gi",
        accent: "#F05032",
        category: SkillCategory::Tools,
        level: SkillLevel::Advanced,
        description: "Version control, branching strategies, and collaborative development.",
        year_started: 2020,
        related_skills: &["GitHub", "Command Line"],
    },
    SkillEntry {
        name: "NPM",
        mark: "Np",
        accent: "#CB3837",
        category: SkillCategory::Tools,
        level: SkillLevel::Advanced,
        description: "Package management, dependency control, and script automation.",
        year_started: 2020,
        related_skills: &["Node.js", "JavaScript"],
    },
];

/// Headline figures shown under the skills grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static LEARNING_STATS: &[Stat] = &[
    Stat { value: "3+", label: "Years of Web Development" },
    Stat { value: "15+", label: "Technologies Mastered" },
    Stat { value: "8+", label: "Major Projects Completed" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub source_href: Option<&'static str>,
    pub live_href: Option<&'static str>,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "ShopSphere",
        summary: "Full stack e-commerce storefront with product search, cart, and order history backed by a REST API.",
        tags: &["React", "Redux", "Node.js", "Express", "MongoDB"],
        source_href: Some("https://github.com/ghanshyamhadiya"),
        live_href: None,
    },
    Project {
        title: "TaskFlow",
        summary: "Kanban-style task board with drag and drop columns, labels, and per-user workspaces.",
        tags: &["React", "Tailwind CSS", "Firebase"],
        source_href: Some("https://github.com/ghanshyamhadiya"),
        live_href: None,
    },
    Project {
        title: "BlogCraft",
        summary: "Server-rendered blogging platform with authentication, markdown posts, and comment threads.",
        tags: &["Node.js", "Express", "EJS", "SQL"],
        source_href: Some("https://github.com/ghanshyamhadiya"),
        live_href: None,
    },
    Project {
        title: "Portfolio",
        summary: "This site: a single-page portfolio with a typewriter hero, filterable skills, and a contact form.",
        tags: &["Rust", "Leptos", "WASM"],
        source_href: Some("https://github.com/ghanshyamhadiya"),
        live_href: Some("#home"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub static CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { title: "Email", value: OWNER_EMAIL, href: "mailto:ghanshyamhadiya013@gmail.com" },
    ContactChannel { title: "Phone", value: "+91 7622******", href: "tel:+917622******" },
    ContactChannel { title: "Location", value: "Gujarat, India", href: "https://goo.gl/maps/india" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// Links that leave the site open in a new tab.
    #[must_use]
    pub fn is_external(self) -> bool {
        self.href.starts_with("http")
    }
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: "https://github.com/ghanshyamhadiya" },
    SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/in/ghanshyam-hadiya-13971b2bb" },
    SocialLink { label: "Twitter", href: "https://twitter.com" },
    SocialLink { label: "Instagram", href: "https://www.instagram.com/ghnshym__00" },
    SocialLink { label: "Email", href: "mailto:ghanshyamhadiya013@gmail.com" },
];
