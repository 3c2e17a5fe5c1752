pub mod create_post;
pub mod list_posts;
pub mod list_user_posts;

pub use create_post::create_post_handler;
pub use list_posts::list_posts_handler;
pub use list_user_posts::list_user_posts_handler;

pub use create_post::CreatePostRequestDto;
pub use list_posts::ListPostsQuery;
pub use list_user_posts::ListUserPostsQuery;
