//! Static page content: profile, navigation, skills, projects, contact

/// Page sections reachable from the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Contact,
}

pub const NAV_LINKS: &[(&str, Section)] = &[
    ("Home", Section::Hero),
    ("About", Section::About),
    ("Projects", Section::Projects),
    ("Contact", Section::Contact),
];

pub const SITE_NAME: &str = "DevForge";
pub const OWNER_NAME: &str = "Abhishek M G";
pub const TAGLINE_PREFIX: &str = "I build";
pub const AVAILABILITY: &str = "Available for hire";

/// Rotating hero titles for the typewriter
pub const HERO_TITLES: &[&str] = &[
    "Python Applications",
    "Data Pipelines",
    "ML Models",
    "Automation Scripts",
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Hi! I'm Abhishek, an aspiring Python Developer currently pursuing my \
     Bachelor of Computer Applications (B.C.A).",
    "My journey involves building clean, maintainable, and scalable Python \
     applications, from automation scripts and data pipelines to GUI apps \
     and machine learning experiments.",
    "I focus on efficient software design, readable code, and leveraging \
     the power of the Python ecosystem (Pandas, PyTorch, PyQt6) to solve \
     real-world problems.",
];

/// Skill categories used to pick an icon per card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Development,
    DataMl,
    Database,
    Tools,
}

impl SkillCategory {
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Development => "Development",
            SkillCategory::DataMl => "Data & ML",
            SkillCategory::Database => "Database",
            SkillCategory::Tools => "Tools",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SkillCategory::Development => "\u{1f4bb}",
            SkillCategory::DataMl => "\u{1f9e0}",
            SkillCategory::Database => "\u{1f5c4}",
            SkillCategory::Tools => "\u{1f6e0}",
        }
    }
}

pub struct Skill {
    pub name: &'static str,
    /// Proficiency from 0 to 100
    pub level: u8,
    pub category: SkillCategory,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Python (Core)",
        level: 95,
        category: SkillCategory::Development,
    },
    Skill {
        name: "NumPy / Pandas",
        level: 90,
        category: SkillCategory::DataMl,
    },
    Skill {
        name: "PyTorch",
        level: 75,
        category: SkillCategory::DataMl,
    },
    Skill {
        name: "MySQL / SQLite",
        level: 85,
        category: SkillCategory::Database,
    },
    Skill {
        name: "PyQt6",
        level: 70,
        category: SkillCategory::Development,
    },
    Skill {
        name: "Git / GitHub",
        level: 85,
        category: SkillCategory::Tools,
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Personal Portfolio (Django)",
        description: "A Django-based website to showcase projects, resume, and \
                      contact info, emphasizing clean architecture.",
        tags: &["Django", "Python", "HTML/CSS"],
        link: "https://github.com/abhi-abhi86",
    },
    Project {
        title: "Data Analysis & ML Experiments",
        description: "Data cleaning workflows, model training, and evaluation \
                      scripts using the Scientific Python stack.",
        tags: &["Pandas", "Scikit-learn", "PyTorch", "NumPy"],
        link: "https://github.com/abhi-abhi86/Multi-Species-Disease-Detection-and-Management-System.git",
    },
    Project {
        title: "GUI & Productivity Tools",
        description: "Desktop utilities for image processing (Pillow), PDF \
                      generation (ReportLab), and productivity tools.",
        tags: &["PyQt6", "Python", "Pillow", "ReportLab"],
        link: "https://github.com/abhi-abhi86",
    },
];

pub const CONTACT_EMAIL: &str = "abhishekmgabhishekmg726@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/abhi-abhi86";
pub const ALL_REPOS_URL: &str = "https://github.com/abhi-abhi86?tab=repositories";

pub const CONTACT_BLURB: &str = "I'm currently looking for opportunities to apply my \
     skills in Python development and Data Science. Whether you have a question \
     about my projects or just want to say hi, I'll try my best to get back to you!";

pub const CHAT_GREETING: &str = "Hi! I'm the AI assistant for this portfolio. \
     Ask me anything about the projects or skills!";

/// Persona handed to the text-generation service with every request
pub const SYSTEM_INSTRUCTION: &str = "You are an AI assistant for Abhishek M G's portfolio website.
Abhishek is an aspiring Python Developer currently pursuing a Bachelor of Computer Applications (B.C.A).
He specializes in:
- Python (Automation, Scripting, GUIs)
- Data Science (Pandas, NumPy, Matplotlib)
- Machine Learning (Scikit-learn, PyTorch, Transformers)
- Databases (MySQL, SQLite)

Your goal is to answer questions about Abhishek's skills, projects, and experience professionally and concisely.
If asked about contact info, direct them to the contact form or email: abhishekmgabhishekmg726@gmail.com";
