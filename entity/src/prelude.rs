pub use super::author::Entity as Author;
pub use super::post::Entity as Post;
