use yew_icons::IconId;

pub const HEADING: &str = "100 Days of Web Development";
pub const SUBTITLE: &str = "A Journey of Growth and Achievement";
pub const CELEBRATE_LABEL: &str = "Celebrate!";
pub const CLOSING_MESSAGE: &str = "Thank you to everyone who supported me on this incredible journey. Here's to achieving even greater things in the future!";

/// One card in the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardContent {
    pub icon: IconId,
    /// CSS class tinting the icon.
    pub accent: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const CARDS: &[CardContent] = &[
    CardContent {
        icon: IconId::LucideHeart,
        accent: "accent-red",
        title: "Gratitude",
        text: "A huge thank you to all my teachers of Apna collage, especially Shradha Khapra Ma'am, for their invaluable guidance and support.",
    },
    CardContent {
        icon: IconId::LucideGraduationCap,
        accent: "accent-blue",
        title: "Learning Platform",
        text: "Thank you Apna Collage , a platform where anyone can learn web development from scratch to advanced levels.",
    },
    CardContent {
        icon: IconId::LucideRocket,
        accent: "accent-yellow",
        title: "Consistency & Focus",
        text: "This challenge taught me the importance of consistency, continuous learning, and maintaining focus.",
    },
    CardContent {
        icon: IconId::LucideBriefcase,
        accent: "accent-green",
        title: "Career Success",
        text: "I'm thrilled to have secured a paid internship during this challenge, marking the beginning of my professional journey.",
    },
];
