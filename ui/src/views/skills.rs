use dioxus::prelude::*;

use crate::core::menu::Section;
use crate::i18n::use_i18n;
use crate::icons::{Icon, IconGlyph};
use crate::t;

pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
}

pub struct SkillCategory {
    pub title_key: &'static str,
    pub skills: [Skill; 4],
}

pub static SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title_key: "skills.categories.data_science",
        skills: [
            Skill { name: "Python", icon: Icon::Code },
            Skill { name: "Machine Learning", icon: Icon::Brain },
            Skill { name: "Data Analysis", icon: Icon::BarChart },
            Skill { name: "Statistical Modeling", icon: Icon::Workflow },
        ],
    },
    SkillCategory {
        title_key: "skills.categories.engineering",
        skills: [
            Skill { name: "SQL / NoSQL", icon: Icon::Database },
            Skill { name: "ETL Pipelines", icon: Icon::Layers },
            Skill { name: "Apache Spark", icon: Icon::Workflow },
            Skill { name: "Cloud Platforms", icon: Icon::Cloud },
        ],
    },
    SkillCategory {
        title_key: "skills.categories.tools",
        skills: [
            Skill { name: "Git", icon: Icon::GitBranch },
            Skill { name: "Docker", icon: Icon::Terminal },
            Skill { name: "AWS / GCP", icon: Icon::Cloud },
            Skill { name: "Airflow", icon: Icon::Workflow },
        ],
    },
];

pub static ALSO_EXPERIENCED: [&str; 11] = [
    "Pandas",
    "NumPy",
    "Scikit-learn",
    "TensorFlow",
    "PyTorch",
    "Jupyter",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "Kafka",
    "Kubernetes",
];

#[component]
pub fn Skills() -> Element {
    let i18n = use_i18n();

    rsx! {
        section { id: Section::Skills.id(), class: "section section--muted skills",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title", {t!(i18n, "skills.title")} }
                    p { class: "section__subtitle", {t!(i18n, "skills.subtitle")} }
                }

                div { class: "skills__grid",
                    for category in SKILL_CATEGORIES.iter() {
                        div { key: "{category.title_key}", class: "skills-card",
                            h3 { class: "skills-card__title", {i18n.tr(category.title_key)} }
                            ul { class: "skills-card__list",
                                for skill in category.skills.iter() {
                                    li { key: "{skill.name}", class: "skills-card__item",
                                        span { class: "skills-card__icon",
                                            IconGlyph { icon: skill.icon }
                                        }
                                        span { class: "skills-card__name", "{skill.name}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "skills__extra",
                    p { class: "skills__extra-label", {t!(i18n, "skills.also_experienced")} }
                    div { class: "skills__extra-tags",
                        for tech in ALSO_EXPERIENCED.iter() {
                            span { key: "{tech}", class: "tag tag--outline", "{tech}" }
                        }
                    }
                }
            }
        }
    }
}
