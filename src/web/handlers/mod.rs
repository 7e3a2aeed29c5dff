//! Web page and endpoint handlers.

pub mod blog;
pub mod health;
pub mod login;
pub mod pages;
pub mod post_detail;
pub mod posts;
pub mod preview;
pub mod taxonomy;

pub use blog::{category_handler, index_handler, tag_handler};
pub use health::health_handler;
pub use login::login_handler;
pub use pages::about_handler;
pub use post_detail::{show_post_handler, submit_comment_handler};
pub use posts::{
    add_post_page_handler, create_post_handler, update_post_handler, update_post_page_handler,
};
pub use preview::preview_handler;
pub use taxonomy::{
    add_category_page_handler, add_tag_page_handler, create_category_handler, create_tag_handler,
    update_category_handler, update_category_page_handler,
};
