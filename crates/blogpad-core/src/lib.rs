// ABOUTME: Core library for blogpad, containing the post/comment model and its operations.
// ABOUTME: Defines the data store contract, the view-state controller, and the application instance.

pub mod app;
pub mod blog;
pub mod id;
pub mod model;
pub mod store;
pub mod view;

pub use app::{BlogApp, Notice, NoticeKind};
pub use blog::{Blog, BlogError};
pub use id::{format_date, generate_id};
pub use model::{Comment, Post, PostDraft};
pub use store::{MemorySlot, POSTS_KEY, PostStore, Slot, StoreError};
pub use view::{FormMode, View};
