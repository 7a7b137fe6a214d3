mod contact;
pub use contact::{Contact, Footer};

mod home;
pub use home::Home;

mod projects;
pub use projects::Projects;

mod skills;
pub use skills::{Skills, ALSO_EXPERIENCED, SKILL_CATEGORIES};
