//! Static navigation menu shared by all pages.

/// One entry in the top navigation bar.
pub struct MenuItem {
    pub title: &'static str,
    pub url: &'static str,
}

/// Site-wide navigation, rendered by the base template.
pub const MENU: &[MenuItem] = &[
    MenuItem {
        title: "Blog",
        url: "/",
    },
    MenuItem {
        title: "About",
        url: "/about",
    },
    MenuItem {
        title: "Add post",
        url: "/add_post",
    },
];
