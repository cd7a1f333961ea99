//! Static copy and theme tokens for the site.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const OWNER: &str = "Jayson Reales";
pub const LOGO: &str = "jayson.";
pub const LOCATION: (&str, &str) = ("Albay,", "Philippines");
pub const EMAIL: &str = "jaysonreales0@gmail.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/jayson-reales/";
pub const CV_URL: &str =
    "https://drive.google.com/file/d/1NXpj89alSl-VGSrKevt2lnMX2gZd9ha6/view?usp=sharing";
pub const BOOKING_URL: &str = "https://calendar.app.google/EBGM6HYNXev2TZC67";
pub const COMING_SOON_ANIMATION: &str = "under-development";

/// Which wording the pitch section uses. Both decks ship the same behaviour.
/// Chosen on the server and shipped to the browser as a lowercase string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteVariant {
    #[default]
    Mentoring,
    Coaching,
}

impl SiteVariant {
    pub fn pitch_id(&self) -> &'static str {
        match self {
            Self::Mentoring => "mentoring",
            Self::Coaching => "coaching",
        }
    }

    pub fn pitch_label(&self) -> &'static str {
        match self {
            Self::Mentoring => "Mentoring",
            Self::Coaching => "Coaching",
        }
    }

    pub fn pitch_heading(&self) -> &'static str {
        match self {
            Self::Mentoring => "Looking for 1:1 mentoring to grow your web development career?",
            Self::Coaching => "Looking for 1:1 coaching to grow your web development career?",
        }
    }

    pub fn testimonials_heading(&self) -> &'static str {
        match self {
            Self::Mentoring => "Testimonials from my mentees",
            Self::Coaching => "Testimonials from my students",
        }
    }

    /// Regions the portfolio page observes, in page order.
    pub fn regions(&self) -> [&'static str; 5] {
        ["hero", "work", "about", "skills", self.pitch_id()]
    }

    pub fn nav_links(&self) -> [NavLink; 5] {
        [
            NavLink::new("Home", "#hero"),
            NavLink::new("Work", "#work"),
            NavLink::new("About", "#about"),
            NavLink::new(self.pitch_label(), pitch_anchor(*self)),
            NavLink::new("Contact", "#contact"),
        ]
    }
}

fn pitch_anchor(variant: SiteVariant) -> &'static str {
    match variant {
        SiteVariant::Mentoring => "#mentoring",
        SiteVariant::Coaching => "#coaching",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl FromStr for SiteVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mentoring" => Ok(Self::Mentoring),
            "coaching" => Ok(Self::Coaching),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub shipped: bool,
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub employer: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub detail: &'static str,
}

pub const HERO_BADGES: [&str; 4] = [
    "💻 Frontend Development",
    "💾 Backend Development",
    "📱 Responsive Design",
    "🚀 Building personal projects",
];

pub const FEATURED_PROJECT: Project = Project {
    title: "APCIA E-Commerce",
    summary: "E-commerce for farmers",
    image: "/images/apcia.jpg",
    shipped: true,
    href: None,
};

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Kapuntukan Resto Bar Reservation and Scheduling",
        summary: "A simple system for reserving tables and scheduling events at Kapuntukan Resto Bar.",
        image: "/images/kapuntukan.png",
        shipped: false,
        href: Some("/coming-soon"),
    },
    Project {
        title: "Solana Staking DApp",
        summary: "A decentralized application for staking Solana tokens and earning rewards.",
        image: "/images/solana.png",
        shipped: false,
        href: Some("/coming-soon"),
    },
    Project {
        title: "MindLeap",
        summary: "Visualize knowledge. Recall with power.",
        image: "/images/mindleap.png",
        shipped: false,
        href: Some("/coming-soon"),
    },
];

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Driven by curiosity and a passion for clean, efficient code, I build user-friendly experiences that balance technical precision with creative problem-solving. I thrive on turning complex requirements into intuitive, reliable products that exceed expectations.",
    "Beyond web development, I'm diving into Web3, exploring the world of cryptocurrency trading and airdrops, and enjoying downtime playing guitar or spending time with my dog, Bela",
];

pub const EXPERIENCE: [Experience; 3] = [
    Experience {
        employer: "Computer Arts and Technological College, Inc.",
        role: "IT Instructor",
        period: "Jan 2023 - Present",
        detail: "Taught students programming languages like Python, JavaScript + ReactJS, and PHP/MySQL, and guided them in building real-world apps and capstone projects.",
    },
    Experience {
        employer: "Computer Arts and Technological College, Inc.",
        role: "Web Developer/Programmer",
        period: "Oct 2022 - Sept 2024",
        detail: "Developed and maintained the school's website and web applications, building secure, database-driven solutions to improve the digital experience.",
    },
    Experience {
        employer: "Pixel8 Academy",
        role: "UI/UX Designer Intern",
        period: "Sept 2021 - Jan 2022",
        detail: "Converted mockups into high-fidelity prototypes, ensuring responsive, user-friendly designs while collaborating closely with developers.",
    },
];

pub const SKILLS: [&str; 7] = [
    "Front-End Development",
    "Back-End Development",
    "Responsive Web Design",
    "Web Application Architecture",
    "UI/UX Implementation",
    "API Integration",
    "Performance Optimization",
];

/// Staggered transition delay for the skill at `index`, in milliseconds.
pub fn skill_delay_ms(index: usize) -> usize {
    200 + index * 100
}

pub const PITCH_BODY: &str = "I'm here to help! I've guided many aspiring developers to land their first roles in tech. Whether you're feeling stuck building your portfolio, considering a career switch into web development, or need advice on tackling real-world coding challenges, I've got you covered.";
pub const SESSION_RATE: &str = "₱1,500";
pub const SESSION_UNIT: &str = "/1hr session";

pub const TESTIMONIALS: [&str; 2] = [
    "Sir Jayson is an amazing instructor. He explains complex programming concepts in a simple, clear way that helped me build real projects with confidence.",
    "Learning from Sir Jayson transformed my skills. His hands-on lessons and constant support made me feel ready to tackle real-world web development challenges.",
];

pub const COMING_SOON_BODY: &str = "I'm working hard to bring you something incredible. This project page is currently under development and will be ready soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Portfolio,
    ComingSoon,
}

/// Tailwind class sets for one page in one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub page: &'static str,
    pub logo: &'static str,
    pub nav_frosted: &'static str,
    pub icon_hover: &'static str,
    pub theme_icon: &'static str,
    pub bar: &'static str,
    pub menu: &'static str,
    pub muted: &'static str,
    pub link: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub badge: &'static str,
    pub ring: &'static str,
    pub caret: &'static str,
    pub outline_button: &'static str,
}

const DARK: ThemeTokens = ThemeTokens {
    page: "bg-neutral-950 text-white",
    logo: "text-white",
    nav_frosted: "bg-black/60 backdrop-blur-sm",
    icon_hover: "hover:bg-white/10",
    theme_icon: "",
    bar: "bg-white",
    menu: "bg-black",
    muted: "text-gray-400",
    link: "text-gray-300 hover:text-white",
    card: "bg-gray-900 border-gray-800 hover:border-gray-700",
    border: "border-gray-800",
    badge: "border-gray-600 text-white",
    ring: "bg-white/5 backdrop-blur-sm",
    caret: "bg-green-400",
    outline_button: "border-gray-600 text-white hover:bg-white/10",
};

const LIGHT: ThemeTokens = ThemeTokens {
    page: "bg-gray-50 text-neutral-950",
    logo: "text-neutral-950",
    nav_frosted: "bg-white/60 backdrop-blur-sm",
    icon_hover: "hover:bg-black/10",
    theme_icon: "",
    bar: "bg-black",
    menu: "bg-white",
    muted: "text-gray-600",
    link: "text-gray-700 hover:text-neutral-950",
    card: "bg-gray-50 border-gray-200 hover:border-gray-300",
    border: "border-gray-200",
    badge: "border-gray-400 text-neutral-950",
    ring: "bg-black/5 backdrop-blur-sm",
    caret: "bg-white",
    outline_button: "border-gray-400 text-neutral-950 hover:bg-black/10",
};

impl ThemeTokens {
    /// The coming-soon page tints the sun icon and inverts the outline
    /// button text in dark mode; everything else is shared.
    pub fn resolve(page: Page, dark: bool) -> Self {
        match (page, dark) {
            (Page::Portfolio, true) => DARK,
            (Page::Portfolio, false) => LIGHT,
            (Page::ComingSoon, true) => ThemeTokens {
                outline_button: "border-gray-600 text-black hover:bg-white/10 hover:text-white",
                ..DARK
            },
            (Page::ComingSoon, false) => ThemeTokens {
                theme_icon: "text-yellow-500",
                ..LIGHT
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parsing() {
        assert_eq!("mentoring".parse::<SiteVariant>(), Ok(SiteVariant::Mentoring));
        assert_eq!(" Coaching ".parse::<SiteVariant>(), Ok(SiteVariant::Coaching));
        assert_eq!(
            "tutoring".parse::<SiteVariant>(),
            Err(UnknownVariant("tutoring".to_string()))
        );
    }

    #[test]
    fn test_variant_wire_format() {
        // the browser learns the variant from the server as JSON
        let encoded = serde_json::to_string(&SiteVariant::Coaching).unwrap();
        assert_eq!(encoded, "\"coaching\"");
        let decoded: SiteVariant = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.regions(), SiteVariant::Coaching.regions());
        assert!(serde_json::from_str::<SiteVariant>("\"Coaching\"").is_err());
    }

    #[test]
    fn test_variant_only_changes_pitch_naming() {
        let mentoring = SiteVariant::Mentoring.regions();
        let coaching = SiteVariant::Coaching.regions();
        assert_eq!(mentoring[..4], coaching[..4]);
        assert_eq!(mentoring[4], "mentoring");
        assert_eq!(coaching[4], "coaching");

        let links = SiteVariant::Coaching.nav_links();
        assert_eq!(links[3], NavLink::new("Coaching", "#coaching"));
        assert_eq!(links[4].href, "#contact");
    }

    #[test]
    fn test_skill_delays_stagger() {
        let delays: Vec<usize> = (0..SKILLS.len()).map(skill_delay_ms).collect();
        assert_eq!(delays, vec![200, 300, 400, 500, 600, 700, 800]);
    }

    #[test]
    fn test_theme_tokens_per_page() {
        let portfolio = ThemeTokens::resolve(Page::Portfolio, false);
        let coming_soon = ThemeTokens::resolve(Page::ComingSoon, false);
        assert_eq!(portfolio.theme_icon, "");
        assert_eq!(coming_soon.theme_icon, "text-yellow-500");
        assert_eq!(portfolio.page, coming_soon.page);
        assert_ne!(
            ThemeTokens::resolve(Page::Portfolio, true).outline_button,
            ThemeTokens::resolve(Page::ComingSoon, true).outline_button
        );
    }
}
