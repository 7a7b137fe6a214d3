//! Stroke icons (24×24 grid, Lucide geometry) drawn as inline SVG.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowRight,
    BarChart,
    Brain,
    Cloud,
    Code,
    Database,
    ExternalLink,
    GitBranch,
    Github,
    Globe,
    Layers,
    Linkedin,
    Mail,
    Menu,
    Moon,
    Send,
    Sun,
    Terminal,
    Workflow,
    X,
}

impl Icon {
    /// Path data for the icon, one `d` attribute per entry.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Icon::Brain => &[
                "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
                "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
                "M12 5v13",
            ],
            Icon::Cloud => &["M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"],
            Icon::Code => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
            Icon::Database => &[
                "M3 5a9 3 0 1 0 18 0 9 3 0 1 0-18 0",
                "M3 5v14a9 3 0 0 0 18 0V5",
                "M3 12a9 3 0 0 0 18 0",
            ],
            Icon::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Icon::GitBranch => &[
                "M6 3v12",
                "M15 6a3 3 0 1 0 6 0 3 3 0 1 0-6 0",
                "M3 18a3 3 0 1 0 6 0 3 3 0 1 0-6 0",
                "M18 9a9 9 0 0 1-9 9",
            ],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Globe => &[
                "M2 12a10 10 0 1 0 20 0 10 10 0 1 0-20 0",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::Layers => &[
                "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
                "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
                "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0 2 2 0 1 0-4 0",
            ],
            Icon::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "m22 6-10 7L2 6",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Icon::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            Icon::Sun => &[
                "M8 12a4 4 0 1 0 8 0 4 4 0 1 0-8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Icon::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
            Icon::Workflow => &["M3 3h8v8H3z", "M7 11v4a2 2 0 0 0 2 2h4", "M13 13h8v8h-8z"],
            Icon::X => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

#[component]
pub fn IconGlyph(
    icon: Icon,
    #[props(default = 20)] size: u32,
    #[props(default)] class: String,
) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in icon.paths().iter() {
                path { key: "{d}", d: *d }
            }
        }
    }
}
