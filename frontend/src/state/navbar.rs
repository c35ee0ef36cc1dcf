//! Route table and navigation bar state.

pub const HOME_PATH: &str = "/";
pub const UPLOAD_PATH: &str = "/subir-imagen";
pub const SERVICES_PATH: &str = "/servicios";
pub const CONTACT_PATH: &str = "/contacto";

/// Top-level pages reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Uploader,
    Services,
    Contact,
}

impl Page {
    pub fn from_path(path: &str) -> Option<Page> {
        match path {
            HOME_PATH | UPLOAD_PATH => Some(Page::Uploader),
            SERVICES_PATH => Some(Page::Services),
            CONTACT_PATH => Some(Page::Contact),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Uploader => "Subir Imagen",
            Page::Services => "Servicios",
            Page::Contact => "Contacto",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub page: Page,
    pub href: &'static str,
    pub label: &'static str,
}

pub static NAV_LINKS: [NavLink; 3] = [
    NavLink {
        page: Page::Uploader,
        href: UPLOAD_PATH,
        label: "📁 Subir Imagen",
    },
    NavLink {
        page: Page::Services,
        href: SERVICES_PATH,
        label: "🏨 Servicios",
    },
    NavLink {
        page: Page::Contact,
        href: CONTACT_PATH,
        label: "📧 Contacto",
    },
];

/// A link is active when the current path resolves to its page.
pub fn is_link_active(link: &NavLink, path: &str) -> bool {
    Page::from_path(path) == Some(link.page)
}

pub fn link_class(link: &NavLink, path: &str) -> &'static str {
    if is_link_active(link, path) {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    }
}

/// Mobile menu toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    menu_open: bool,
}

impl NavbarState {
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Called whenever a link is activated.
    pub fn close(&mut self) {
        self.menu_open = false;
    }

    pub fn menu_class(&self) -> &'static str {
        if self.menu_open {
            "navbar__menu navbar__menu--active"
        } else {
            "navbar__menu"
        }
    }

    pub fn toggle_bar_class(&self) -> &'static str {
        if self.menu_open {
            "navbar__toggle-bar navbar__toggle-bar--active"
        } else {
            "navbar__toggle-bar"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_pages(path: &str) -> Vec<Page> {
        NAV_LINKS
            .iter()
            .filter(|l| is_link_active(l, path))
            .map(|l| l.page)
            .collect()
    }

    #[test]
    fn test_uploader_link_active_on_home_and_upload() {
        assert_eq!(active_pages("/"), vec![Page::Uploader]);
        assert_eq!(active_pages("/subir-imagen"), vec![Page::Uploader]);
    }

    #[test]
    fn test_active_link_follows_navigation() {
        assert_eq!(active_pages("/contacto"), vec![Page::Contact]);
        assert_eq!(active_pages("/"), vec![Page::Uploader]);
        assert_eq!(active_pages("/servicios"), vec![Page::Services]);
    }

    #[test]
    fn test_unknown_path_has_no_active_link() {
        assert!(active_pages("/reservas").is_empty());
        assert_eq!(link_class(&NAV_LINKS[0], "/reservas"), "navbar__link");
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut nav = NavbarState::default();
        assert_eq!(nav.menu_class(), "navbar__menu");

        nav.toggle();
        assert!(nav.is_menu_open());
        assert_eq!(nav.toggle_bar_class(), "navbar__toggle-bar navbar__toggle-bar--active");

        nav.close();
        assert!(!nav.is_menu_open());
        nav.close();
        assert!(!nav.is_menu_open());
    }
}
