//! Navigation-related state types.
//!
//! This module contains the pages, their routes, the top menu and focus.

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Menu,
    Page,
}

/// Specifying the different pages.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Page {
    Intro,
    Main,
    Projects,
    About,
    Contact,
    NotFound,
}

impl Page {
    /// Resolve a route to its page. Unknown routes land on `NotFound`.
    ///
    pub fn from_route(route: &str) -> Page {
        match route.trim().trim_end_matches('/') {
            "" => Page::Intro,
            "/main" => Page::Main,
            "/projects" | "/gallery" => Page::Projects,
            "/about" => Page::About,
            "/contact" => Page::Contact,
            _ => Page::NotFound,
        }
    }

    /// Return the canonical route of the page.
    ///
    pub fn route(&self) -> &'static str {
        match self {
            Page::Intro => "/",
            Page::Main => "/main",
            Page::Projects => "/projects",
            Page::About => "/about",
            Page::Contact => "/contact",
            Page::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Intro => "Intro",
            Page::Main => "Home",
            Page::Projects => "Projects",
            Page::About => "About",
            Page::Contact => "Contact",
            Page::NotFound => "Not Found",
        }
    }
}

/// Pages reachable from the top menu, in display order.
///
pub const MENU_PAGES: [Page; 4] = [Page::Main, Page::Projects, Page::About, Page::Contact];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus() {
        assert_eq!(Focus::Menu, Focus::Menu);
        assert_ne!(Focus::Menu, Focus::Page);
    }

    #[test]
    fn test_from_route() {
        assert_eq!(Page::from_route("/"), Page::Intro);
        assert_eq!(Page::from_route("/main"), Page::Main);
        assert_eq!(Page::from_route("/projects"), Page::Projects);
        assert_eq!(Page::from_route("/gallery"), Page::Projects);
        assert_eq!(Page::from_route("/about/"), Page::About);
        assert_eq!(Page::from_route("/contact"), Page::Contact);
        assert_eq!(Page::from_route("/blog"), Page::NotFound);
    }

    #[test]
    fn test_route_round_trip_for_menu() {
        for page in MENU_PAGES {
            assert_eq!(Page::from_route(page.route()), page);
        }
    }

    #[test]
    fn test_menu_titles() {
        let titles: Vec<&str> = MENU_PAGES.iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["Home", "Projects", "About", "Contact"]);
    }
}
