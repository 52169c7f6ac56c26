// ABOUTME: BlogApp, the single application instance driving the view state, collection, and store.
// ABOUTME: Each user action runs to completion, persists on mutation, and may yield a Notice.

use crate::blog::{Blog, BlogError};
use crate::model::PostDraft;
use crate::store::PostStore;
use crate::view::{FormMode, View};

/// Whether a notice reports a completed action or a rejected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short message for the user, shown briefly and then dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// The application: current screen, the post collection, and where it is persisted.
#[derive(Debug)]
pub struct BlogApp {
    blog: Blog,
    view: View,
    store: PostStore,
}

impl BlogApp {
    /// Load the collection from the store and start on the list screen.
    pub fn new(store: PostStore) -> Self {
        let blog = Blog::from_posts(store.load());
        tracing::info!(posts = blog.len(), "blog loaded");
        Self {
            blog,
            view: View::Home,
            store,
        }
    }

    pub fn blog(&self) -> &Blog {
        &self.blog
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn into_store(self) -> PostStore {
        self.store
    }

    pub fn show_home(&mut self) {
        self.view.go_home();
    }

    pub fn show_post(&mut self, id: &str) {
        self.view.open_post(id);
        self.view.resolve(&self.blog);
    }

    pub fn show_new_post_form(&mut self) {
        self.view.new_post();
    }

    pub fn edit_current_post(&mut self) {
        self.view.edit();
        self.view.resolve(&self.blog);
    }

    pub fn cancel_form(&mut self) {
        self.view.cancel();
        self.view.resolve(&self.blog);
    }

    /// Submit the post form. The new-post form creates, the edit form
    /// updates its post. A submission arriving while no form is open (a
    /// resent request) changes nothing and returns to the list.
    pub fn save_post(&mut self, draft: PostDraft) -> Option<Notice> {
        let result = match &self.view {
            View::Form(FormMode::Edit(id)) => {
                let id = id.clone();
                self.blog
                    .update_post(&id, draft)
                    .map(|post| (post, "Post updated successfully!"))
            }
            View::Form(FormMode::New) => self
                .blog
                .create_post(draft)
                .map(|post| (post, "Post created successfully!")),
            View::Home | View::Post(_) => {
                tracing::debug!(view = ?self.view, "post form submitted with no form open");
                self.view.go_home();
                return None;
            }
        };

        match result {
            Ok((post, message)) => {
                tracing::info!(post_id = %post.id, "{}", message);
                self.persist();
                self.view.saved(post.id);
                Some(Notice::success(message))
            }
            Err(e) => self.reject(e),
        }
    }

    /// Delete the post currently on screen and return to the list.
    pub fn delete_current_post(&mut self) -> Option<Notice> {
        let id = self.view.current_post_id()?.to_string();

        match self.blog.delete_post(&id) {
            Ok(post) => {
                tracing::info!(post_id = %post.id, comments = post.comments.len(), "post deleted");
                self.persist();
                self.view.go_home();
                Some(Notice::success("Post deleted successfully!"))
            }
            Err(e) => self.reject(e),
        }
    }

    /// Append a comment to the post currently on screen.
    pub fn add_comment(&mut self, author: &str, text: &str) -> Option<Notice> {
        let id = self.view.current_post_id().unwrap_or_default().to_string();

        match self.blog.add_comment(&id, author, text) {
            Ok(comment) => {
                tracing::info!(post_id = %id, comment_id = %comment.id, "comment added");
                self.persist();
                Some(Notice::success("Comment added successfully!"))
            }
            Err(e) => self.reject(e),
        }
    }

    /// Validation failures are reported to the user; references to posts
    /// that no longer exist silently return to the list.
    fn reject(&mut self, error: BlogError) -> Option<Notice> {
        match error {
            BlogError::PostNotFound(id) => {
                tracing::debug!(post_id = %id, "action targeted a missing post");
                self.view.go_home();
                None
            }
            e => Some(Notice::error(e.to_string())),
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(self.blog.posts()) {
            tracing::error!("failed to persist posts: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::format_date;
    use crate::store::{MemorySlot, POSTS_KEY, Slot};

    fn app() -> BlogApp {
        BlogApp::new(PostStore::new(MemorySlot::new()))
    }

    fn draft() -> PostDraft {
        PostDraft::new("T", "A", "E", "C")
    }

    #[test]
    fn new_app_starts_home_with_stored_posts() {
        let slot = MemorySlot::new();
        let mut seeded = BlogApp::new(PostStore::new(slot.clone()));
        seeded.show_new_post_form();
        seeded.save_post(draft());

        let app = BlogApp::new(PostStore::new(slot));
        assert_eq!(app.view(), &View::Home);
        assert_eq!(app.blog().len(), 1);
    }

    #[test]
    fn create_post_adds_one_and_opens_it() {
        let mut app = app();
        app.show_new_post_form();

        let notice = app.save_post(draft()).unwrap();

        assert_eq!(notice, Notice::success("Post created successfully!"));
        assert_eq!(app.blog().len(), 1);
        let post = &app.blog().posts()[0];
        assert_eq!(post.date, format_date(None));
        assert_eq!(app.view(), &View::Post(post.id.clone()));
    }

    #[test]
    fn create_post_with_blank_field_is_rejected() {
        let mut app = app();
        app.show_new_post_form();

        let notice = app
            .save_post(PostDraft::new("T", "A", "", "C"))
            .unwrap();

        assert_eq!(notice, Notice::error("Please fill in all fields"));
        assert!(app.blog().is_empty());
        assert!(!app.store().is_initialized());
        assert_eq!(app.view(), &View::Form(FormMode::New));
    }

    #[test]
    fn edit_updates_in_place_and_returns_to_post() {
        let mut app = app();
        app.show_new_post_form();
        app.save_post(draft());
        let id = app.blog().posts()[0].id.clone();
        app.add_comment("R", "kept");

        app.edit_current_post();
        assert_eq!(app.view(), &View::Form(FormMode::Edit(id.clone())));
        let notice = app
            .save_post(PostDraft::new("T2", "A2", "E2", "C2"))
            .unwrap();

        assert_eq!(notice, Notice::success("Post updated successfully!"));
        assert_eq!(app.blog().len(), 1);
        let post = app.blog().get(&id).unwrap();
        assert_eq!(post.title, "T2");
        assert_eq!(post.comments.len(), 1);
        assert_eq!(app.view(), &View::Post(id));
    }

    #[test]
    fn cancel_edit_returns_to_post_and_cancel_new_returns_home() {
        let mut app = app();
        app.show_new_post_form();
        app.save_post(draft());
        let id = app.blog().posts()[0].id.clone();

        app.edit_current_post();
        app.cancel_form();
        assert_eq!(app.view(), &View::Post(id));

        app.show_new_post_form();
        app.cancel_form();
        assert_eq!(app.view(), &View::Home);
    }

    #[test]
    fn delete_removes_post_and_goes_home() {
        let slot = MemorySlot::new();
        let mut app = BlogApp::new(PostStore::new(slot.clone()));
        app.show_new_post_form();
        app.save_post(PostDraft::new("Keep", "A", "E", "C"));
        let keep = app.blog().posts()[0].id.clone();
        app.show_new_post_form();
        app.save_post(draft());
        app.add_comment("R", "goes too");

        let notice = app.delete_current_post().unwrap();

        assert_eq!(notice, Notice::success("Post deleted successfully!"));
        assert_eq!(app.view(), &View::Home);
        assert_eq!(app.blog().len(), 1);
        assert!(app.blog().contains(&keep));

        let reloaded = BlogApp::new(PostStore::new(slot));
        assert_eq!(reloaded.blog().len(), 1);
    }

    #[test]
    fn delete_without_current_post_does_nothing() {
        let mut app = app();
        assert!(app.delete_current_post().is_none());
        assert_eq!(app.view(), &View::Home);
    }

    #[test]
    fn comment_validation_keeps_post_screen() {
        let mut app = app();
        app.show_new_post_form();
        app.save_post(draft());
        let id = app.blog().posts()[0].id.clone();

        let notice = app.add_comment(" ", "text").unwrap();

        assert_eq!(notice, Notice::error("Please fill in all comment fields"));
        assert_eq!(app.view(), &View::Post(id.clone()));
        assert!(app.blog().get(&id).unwrap().comments.is_empty());
    }

    #[test]
    fn resent_save_after_edit_does_not_create() {
        let mut app = app();
        app.show_new_post_form();
        app.save_post(draft());
        let id = app.blog().posts()[0].id.clone();
        app.edit_current_post();
        app.save_post(PostDraft::new("T2", "A", "E", "C"));
        assert_eq!(app.view(), &View::Post(id.clone()));

        assert!(app.save_post(PostDraft::new("T2", "A", "E", "C")).is_none());

        assert_eq!(app.view(), &View::Home);
        assert_eq!(app.blog().len(), 1);
        assert_eq!(app.blog().get(&id).unwrap().title, "T2");
    }

    #[test]
    fn save_from_home_does_not_create() {
        let mut app = app();

        assert!(app.save_post(draft()).is_none());

        assert!(app.blog().is_empty());
        assert_eq!(app.view(), &View::Home);
        assert!(!app.store().is_initialized());
    }

    #[test]
    fn saving_edit_of_vanished_post_falls_back_home() {
        let mut app = app();
        app.show_new_post_form();
        app.save_post(draft());
        let id = app.blog().posts()[0].id.clone();
        app.edit_current_post();
        app.blog.delete_post(&id).unwrap();

        let notice = app.save_post(PostDraft::new("T2", "A", "E", "C"));

        assert!(notice.is_none());
        assert_eq!(app.view(), &View::Home);
        assert!(app.blog().is_empty());
    }

    #[test]
    fn commenting_on_vanished_post_falls_back_home() {
        let mut app = app();
        app.show_new_post_form();
        app.save_post(draft());
        let id = app.blog().posts()[0].id.clone();
        app.blog.delete_post(&id).unwrap();

        let notice = app.add_comment("R", "hello?");

        assert!(notice.is_none());
        assert_eq!(app.view(), &View::Home);
        assert!(app.blog().is_empty());
    }

    #[test]
    fn showing_missing_post_falls_back_home() {
        let mut app = app();
        app.show_post("nope");
        assert_eq!(app.view(), &View::Home);
    }

    #[test]
    fn round_trip_through_reload() {
        let slot = MemorySlot::new();
        let mut app = BlogApp::new(PostStore::new(slot.clone()));
        app.show_new_post_form();
        app.save_post(draft());
        let created = app.blog().posts()[0].clone();

        let reloaded = BlogApp::new(app.into_store());

        let post = reloaded.blog().get(&created.id).unwrap();
        assert_eq!(post.title, "T");
        assert_eq!(post.author, "A");
        assert_eq!(post.excerpt, "E");
        assert_eq!(post.content, "C");
        assert!(slot.get(POSTS_KEY).unwrap().unwrap().contains(&created.id));
    }
}
