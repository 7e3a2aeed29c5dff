pub mod markdown;
pub mod paginate;
pub mod slug;
pub mod token;
