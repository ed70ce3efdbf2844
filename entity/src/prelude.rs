pub use super::comment::Entity as Comment;
pub use super::friendship::Entity as Friendship;
pub use super::task_item::Entity as TaskItem;
pub use super::user::Entity as User;
