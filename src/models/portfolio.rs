//! Portfolio content: timeline records, skills, projects and contact details.
//!
//! Everything here is constant data. Localized fields are resolved against
//! the active language when [`Portfolio::build`] runs, so the App rebuilds
//! its content after a language switch.

use crate::i18n::{Language, LocaleTable, resolve};

use super::timeline::{FREELANCE, FULL_TIME, INTERNSHIP, TimelineEntry};

pub const EMAIL: &str = "mohammedbenbrahim474@gmail.com";
pub const PHONE: &str = "+212 696 149 750";

/// Education tags; the education tab never filters on them
pub const LICENCE: &str = "licence";
pub const TECHNICIAN: &str = "technician";
pub const BACCALAUREATE: &str = "baccalaureate";

/// Work timeline category chips, in cycle order
pub const WORK_FILTERS: [(&str, &str); 3] = [
    ("all", "about.filterAll"),
    (INTERNSHIP, "about.filterInternship"),
    (FULL_TIME, "about.filterFullTime"),
];

pub const EXPERTISE: [&str; 3] = ["React Expert", "Node.js", "TypeScript"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        url: "https://github.com/mohammedbenbrahim",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/mohammed-benbrahim-636456239/",
    },
    SocialLink {
        name: "X",
        url: "https://x.com/MedKaito",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: String,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: &'static [&'static str],
    pub code_url: &'static str,
    pub demo_url: &'static str,
}

/// Whether a contact card can be copied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    Copy,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub id: &'static str,
    pub label: String,
    pub value: String,
    pub action: ContactAction,
}

/// All displayable content, localized for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    pub work: Vec<TimelineEntry>,
    pub education: Vec<TimelineEntry>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub contact: Vec<ContactInfo>,
}

impl Portfolio {
    pub fn build(table: &LocaleTable, language: Language) -> Self {
        let t = |key: &'static str| resolve(table, language, key).to_string();

        Self {
            work: work_entries(&t),
            education: education_entries(&t),
            skills: skill_categories(&t),
            projects: projects(&t),
            contact: contact_info(&t),
        }
    }
}

fn work_entries(t: &dyn Fn(&'static str) -> String) -> Vec<TimelineEntry> {
    vec![
        TimelineEntry::new(1, &t("about.work1Title"), &t("about.work1Company"), FULL_TIME)
            .with_date(&t("about.work1Year"))
            .with_location("Casablanca, Morocco")
            .with_description(&format!(
                "{} Orchestrated the migration of legacy systems to modern microservices architecture. Improved system reliability by 40% through rigorous testing and CI/CD implementation. Mentored 3 junior developers.",
                t("about.work1Desc")
            ))
            .with_tags(&["React", "Node.js", "TypeScript", "PostgreSQL", "AWS"]),
        TimelineEntry::new(2, &t("about.work2Title"), &t("about.work2Company"), INTERNSHIP)
            .with_date(&t("about.work2Year"))
            .with_location("Casablanca, Settat")
            .with_description(&format!(
                "{} Developed responsive frontend interfaces using React and Tailwind CSS. Collaborated with the UX team to implement pixel-perfect designs. Optimized backend API endpoints using Django Rest Framework.",
                t("about.work2Desc")
            ))
            .with_tags(&["Django", "Rest Framework", "React", "PostgreSQL", "JavaScript"]),
        TimelineEntry::new(3, "Freelance Full Stack Dev", "Upwork", FREELANCE)
            .with_date("2022 - 2023")
            .with_location("Remote")
            .with_description(
                "Delivered over 10 custom web solutions for international clients. Specialized in e-commerce platforms and custom dashboards.",
            )
            .with_tags(&["Next.js", "Tailwind", "Firebase", "Stripe"]),
    ]
}

fn education_entries(t: &dyn Fn(&'static str) -> String) -> Vec<TimelineEntry> {
    vec![
        TimelineEntry::new(101, &t("about.exp1Title"), &t("about.exp1Company"), LICENCE)
            .with_date(&t("about.exp1Year"))
            .with_location("Mohammedia, Morocco")
            .with_description(&t("about.exp1Desc"))
            .with_tags(&["React", "Node.js", "Cloud"]),
        TimelineEntry::new(102, &t("about.exp2Title"), &t("about.exp2Company"), TECHNICIAN)
            .with_date(&t("about.exp2Year"))
            .with_location("Casablanca, Morocco")
            .with_description(&t("about.exp2Desc"))
            .with_tags(&["C", "Java", "SQL"]),
        TimelineEntry::new(103, &t("about.exp3Title"), &t("about.exp3Company"), BACCALAUREATE)
            .with_date(&t("about.exp3Year"))
            .with_location("Casablanca, Morocco")
            .with_description(&t("about.exp3Desc")),
    ]
}

fn skill_categories(t: &dyn Fn(&'static str) -> String) -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            title: t("skills.frontend"),
            skills: &[
                "React / Next.js",
                "TypeScript",
                "Angular",
                "Tailwind CSS",
                "Vue.js",
                "HTML5",
                "CSS3",
                "Sass",
                "Bootstrap",
                "JQuery",
            ],
        },
        SkillCategory {
            title: t("skills.backend"),
            skills: &[
                "Node.js",
                "Express.js",
                "Python",
                "PHP",
                "Laravel",
                "Java",
                "C",
                "C#",
                "Firebase",
                ".NET",
            ],
        },
        SkillCategory {
            title: t("skills.database"),
            skills: &["MySQL", "PostgreSQL", "MongoDB", "SQL", "Supabase"],
        },
        SkillCategory {
            title: t("skills.mobile"),
            skills: &["React Native", "Expo", "Swift", "Kotlin", "Flutter"],
        },
        SkillCategory {
            title: t("skills.tools"),
            skills: &[
                "Agile/Scrum",
                "Git / GitHub",
                "VS Code",
                "Postman",
                "Figma",
                "Docker",
                "Jira",
                "PhpMyAdmin",
                "Xcode",
                "WordPress",
                "Shopify",
            ],
        },
    ]
}

fn projects(t: &dyn Fn(&'static str) -> String) -> Vec<Project> {
    vec![
        Project {
            title: t("projects.project1Title"),
            description: t("projects.project1Desc"),
            tags: &["React", "Node.js", "PostgreSQL", "Stripe"],
            code_url: "#",
            demo_url: "#",
        },
        Project {
            title: t("projects.project2Title"),
            description: t("projects.project2Desc"),
            tags: &["Next.js", "TypeScript", "MongoDB"],
            code_url: "#",
            demo_url: "#",
        },
        Project {
            title: t("projects.project3Title"),
            description: t("projects.project3Desc"),
            tags: &["React", "Tailwind CSS", "Framer Motion"],
            code_url: "#",
            demo_url: "#",
        },
    ]
}

fn contact_info(t: &dyn Fn(&'static str) -> String) -> Vec<ContactInfo> {
    vec![
        ContactInfo {
            id: "email",
            label: t("contact.email"),
            value: EMAIL.to_string(),
            action: ContactAction::Copy,
        },
        ContactInfo {
            id: "phone",
            label: t("contact.phone"),
            value: PHONE.to_string(),
            action: ContactAction::Copy,
        },
        ContactInfo {
            id: "location",
            label: t("contact.location"),
            value: t("about.location"),
            action: ContactAction::None,
        },
    ]
}
