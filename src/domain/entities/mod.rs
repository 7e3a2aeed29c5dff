//! Core business entities.

mod category;
mod comment;
mod post;
mod tag;
mod user;

pub use category::{Category, NewCategory};
pub use comment::{Comment, CommentStatus, NewComment};
pub use post::{NewPost, Post, PostFilter, PostPatch, PostStatus};
pub use tag::{NewTag, Tag};
pub use user::User;
