/// Page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Services,
    Contact,
}

impl Section {
    /// Navigation order.
    pub const NAV: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Services,
        Section::Contact,
    ];

    /// The element id the section is rendered with.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::NAV.into_iter().find(|s| s.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_order() {
        let ids = Section::NAV.map(Section::id);
        assert_eq!(ids, ["about", "skills", "projects", "services", "contact"]);
    }

    #[test]
    fn test_ids_unique_and_round_trip() {
        let ids = Section::NAV
            .iter()
            .map(|s| s.id())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), Section::NAV.len());
        for s in Section::NAV {
            assert_eq!(Section::from_id(s.id()), Some(s));
        }
        assert_eq!(Section::from_id("education"), None);
    }
}
