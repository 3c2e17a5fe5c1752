pub mod create_post;
pub mod list_posts;
pub mod list_user_posts;
