//! Navbar menu state and the in-page sections it links to.

/// Page sections reachable from the navbar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav.home",
            Section::Skills => "nav.skills",
            Section::Projects => "nav.projects",
            Section::Contact => "nav.contact",
        }
    }
}

/// The two navbar toggles. They are independent: opening one leaves the
/// other as it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub mobile_open: bool,
    pub language_open: bool,
}

impl MenuState {
    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn toggle_language(&mut self) {
        self.language_open = !self.language_open;
    }

    /// A nav link was followed; the mobile menu would cover the target.
    pub fn select_nav_link(&mut self) {
        self.mobile_open = false;
    }

    /// A language was picked from either list.
    pub fn select_language(&mut self) {
        self.language_open = false;
        self.mobile_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_link_closes_open_mobile_menu() {
        let mut menu = MenuState::default();
        menu.toggle_mobile();
        assert!(menu.mobile_open);
        menu.select_nav_link();
        assert!(!menu.mobile_open);
    }

    #[test]
    fn toggles_are_independent() {
        let mut menu = MenuState::default();
        menu.toggle_mobile();
        menu.toggle_language();
        assert_eq!(
            menu,
            MenuState {
                mobile_open: true,
                language_open: true
            }
        );
        menu.toggle_language();
        assert!(menu.mobile_open);
    }

    #[test]
    fn nav_link_leaves_language_menu_alone() {
        let mut menu = MenuState {
            mobile_open: true,
            language_open: true,
        };
        menu.select_nav_link();
        assert!(menu.language_open);
    }

    #[test]
    fn language_choice_closes_both_menus() {
        let mut menu = MenuState {
            mobile_open: true,
            language_open: true,
        };
        menu.select_language();
        assert_eq!(menu, MenuState::default());
    }

    #[test]
    fn anchors_follow_section_ids() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["#home", "#skills", "#projects", "#contact"]);
    }
}
