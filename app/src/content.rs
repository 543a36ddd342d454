//! Everything the page displays that is not UI state.
//!
//! The records are `'static` literals: the site is rebuilt to change them.

use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};

/// The anchored sections of the page, in page order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// The `id` attribute of the `<section>` element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// The navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "HOME",
            Section::About => "ABOUT",
            Section::Projects => "PROJECTS",
            Section::Skills => "SKILLS",
            Section::Contact => "CONTACT",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(id: &str) -> Result<Self> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| Error::UnknownSection { id: String::from(id) })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Tailwind gradient classes used as the card's artwork.
    pub gradient: &'static str,
    pub year: &'static str,
    pub link: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed mastery, in percent.
    pub level: u8,
    pub icon: &'static str,
    pub description: &'static str,
}

impl Skill {
    pub const MAX_LEVEL: u8 = 100;

    /// The width of the skill bar, in percent.
    ///
    /// Bars stay empty until their section has been scrolled into view so
    /// that the CSS transition plays when the reader gets there.
    pub fn bar_width(&self, section_visible: bool) -> u8 {
        if section_visible {
            self.level.min(Self::MAX_LEVEL)
        } else {
            0
        }
    }

    /// The percentage shown next to the skill name, clamped like the bar.
    pub fn level_label(&self) -> String {
        format!("{}%", self.level.min(Self::MAX_LEVEL))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EducationEntry {
    pub years: &'static str,
    pub title: &'static str,
    pub institution: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interest {
    pub icon: &'static str,
    pub name: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpokenLanguage {
    pub flag: &'static str,
    pub name: &'static str,
    pub proficiency: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    /// What the link reads as in running text, e.g. the bare address.
    pub text: &'static str,
    pub external: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub short_name: &'static str,
    pub full_name: &'static str,
    pub brand: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub phones: &'static [&'static str],
    pub emails: &'static [&'static str],
    pub age: &'static str,
    pub nationality: &'static str,
    pub situation: &'static str,
}

pub const PROFILE: Profile = Profile {
    short_name: "Miantsa",
    full_name: "Miantsasoa Malala Andrianina",
    brand: "CAT - DEV",
    headline: "Étudiant Master 1 Informatique",
    tagline: "Building the future, one line of code at a time.",
    location: "Lot II v 44 bis Besarety, Antananarivo",
    phones: &["+261 38 20 127 11", "+261 34 40 691 87 (WhatsApp)"],
    emails: &["miantsasu@gmail.com", "miantsasu1@gmail.com"],
    age: "22 ans",
    nationality: "Malagasy",
    situation: "Célibataire",
};

pub const TYPEWRITER_PHRASES: &[&str] = &[
    "MERN Stack Developer",
    "UI/UX Designer",
    "Problem Solver",
    "Creative Thinker",
];

pub const EMAIL_LINK: ContactLink = ContactLink {
    label: "Email",
    icon: "✉️",
    href: "mailto:miantsasu@gmail.com",
    text: "miantsasu@gmail.com",
    external: false,
};

pub const WHATSAPP_LINK: ContactLink = ContactLink {
    label: "WhatsApp",
    icon: "📱",
    href: "https://wa.me/261344069187",
    text: "+261 34 40 691 87",
    external: true,
};

// Placeholders until the profiles exist.
pub const LINKEDIN_LINK: ContactLink = ContactLink {
    label: "LinkedIn",
    icon: "💼",
    href: "#",
    text: "LinkedIn",
    external: false,
};

pub const GITHUB_LINK: ContactLink = ContactLink {
    label: "GitHub",
    icon: "🐙",
    href: "#",
    text: "GitHub",
    external: false,
};

pub const SOCIAL_LINKS: [ContactLink; 4] = [EMAIL_LINK, WHATSAPP_LINK, LINKEDIN_LINK, GITHUB_LINK];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "ANATRA Podcast",
        description: "Plateforme de gestion de podcast avec système d'administration et diffusion",
        tags: &["React", "Node.js", "MongoDB", "Express"],
        gradient: "bg-gradient-to-br from-blue-500 to-cyan-500",
        year: "2025",
        link: "#",
    },
    Project {
        title: "Gestion de Bibliothèque",
        description: "Application complète de gestion de bibliothèque avec CRUD et authentification",
        tags: &["MongoDB", "Express", "React", "Node.js"],
        gradient: "bg-gradient-to-br from-sky-500 to-blue-500",
        year: "2024",
        link: "#",
    },
    Project {
        title: "Stage Fynatec",
        description: "Développement web et projets variés durant 3 mois de stage professionnel",
        tags: &["PHP", "JavaScript", "MySQL"],
        gradient: "bg-gradient-to-br from-indigo-500 to-blue-600",
        year: "2023",
        link: "#",
    },
    Project {
        title: "Projects & Designs",
        description: "Création de designs modernes et interfaces utilisateur avec Canva",
        tags: &["Canva", "UI/UX", "Design"],
        gradient: "bg-gradient-to-br from-cyan-500 to-teal-500",
        year: "2024",
        link: "#",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "MERN Stack", level: 50, icon: "⚛️", description: "MongoDB, Express, React, Node.js" },
    Skill { name: "PHP & MySQL", level: 70, icon: "🐘", description: "Développement backend" },
    Skill { name: "JavaScript", level: 60, icon: "⚡", description: "ES6+ & Frameworks modernes" },
    Skill { name: "Design UI/UX", level: 70, icon: "🎨", description: "Canva & Prototyping" },
    Skill { name: "VS Code & Git", level: 80, icon: "💻", description: "Outils de développement" },
    Skill { name: "Pack Office", level: 50, icon: "📊", description: "Suite bureautique complète" },
];

/// Most recent first.
pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry { years: "2024-2025", title: "Master 1 Informatique", institution: "ISM Advancea Ambatonakanga" },
    EducationEntry { years: "2023-2024", title: "Licence Informatique", institution: "ISM Advancea Ambatonakanga" },
    EducationEntry { years: "2022-2023", title: "DTS Informatique", institution: "ISM Advancea Ambatonakanga" },
    EducationEntry { years: "2020-2021", title: "Baccalauréat Série D", institution: "Lycée Saint Etienne Ambanidia" },
];

pub const INTERESTS: &[Interest] = &[
    Interest { icon: "🏀", name: "Basketball", detail: "N1B du Club L2BV" },
    Interest { icon: "♟️", name: "Échecs", detail: "900 Elo & Professeur pour enfants" },
    Interest { icon: "🎵", name: "Musique", detail: "Étudiant à l'EGM" },
    Interest { icon: "🎤", name: "Chant", detail: "Membre de Chorale" },
    Interest { icon: "🧩", name: "Rubik's Cube", detail: "Résolution & speedcubing" },
];

pub const LANGUAGES: &[SpokenLanguage] = &[
    SpokenLanguage { flag: "🇲🇬", name: "Malagasy", proficiency: "Maternelle" },
    SpokenLanguage { flag: "🇫🇷", name: "Français", proficiency: "Moyen" },
    SpokenLanguage { flag: "🇬🇧", name: "Anglais", proficiency: "B1" },
    SpokenLanguage { flag: "🇩🇪", name: "Allemand", proficiency: "A1" },
];

pub const QUALITIES: &[&str] = &["Sérieux", "Dynamique", "Créatif"];

pub const TOOLS: &[&str] = &[
    "VS Code",
    "Canva",
    "Pack Office",
    "Git",
    "MongoDB",
    "Express",
    "React",
    "Node.js",
    "PHP",
    "MySQL",
];
