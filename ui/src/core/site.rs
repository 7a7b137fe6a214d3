//! Compile-time profile of the site owner.

use crate::icons::Icon;

pub const OWNER_NAME: &str = "Pablo";
pub const OWNER_EMAIL: &str = "pablo@example.com";
pub const OWNER_MAILTO: &str = "mailto:pablo@example.com";

/// One card in the contact section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub icon: Icon,
    pub label_key: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    /// Modifier class for the icon badge colour.
    pub accent: &'static str,
}

pub static CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        icon: Icon::Mail,
        label_key: "contact.email",
        value: OWNER_EMAIL,
        href: OWNER_MAILTO,
        accent: "contact-card__badge--email",
    },
    ContactLink {
        icon: Icon::Github,
        label_key: "contact.github",
        value: "github.com/pabloogl",
        href: "https://github.com/pabloogl",
        accent: "contact-card__badge--github",
    },
    ContactLink {
        icon: Icon::Linkedin,
        label_key: "contact.linkedin",
        value: "linkedin.com/in/pablo",
        href: "https://linkedin.com/in/pablo",
        accent: "contact-card__badge--linkedin",
    },
];
