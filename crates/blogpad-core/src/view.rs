// ABOUTME: The view-state controller: which screen is visible and which post it targets.
// ABOUTME: Pure state transitions with a fallback to the list screen for stale post ids.

use crate::blog::Blog;

/// Whether the post form is creating a post or editing an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit(String),
}

/// The active screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Post(String),
    Form(FormMode),
}

impl View {
    /// The post the current screen targets, if any.
    pub fn current_post_id(&self) -> Option<&str> {
        match self {
            View::Post(id) | View::Form(FormMode::Edit(id)) => Some(id),
            View::Home | View::Form(FormMode::New) => None,
        }
    }

    pub fn edit_mode(&self) -> bool {
        matches!(self, View::Form(FormMode::Edit(_)))
    }

    pub fn go_home(&mut self) {
        *self = View::Home;
    }

    pub fn open_post(&mut self, id: impl Into<String>) {
        *self = View::Post(id.into());
    }

    pub fn new_post(&mut self) {
        *self = View::Form(FormMode::New);
    }

    /// Switch the open post into its edit form. Has no effect on other screens.
    pub fn edit(&mut self) {
        if let View::Post(id) = self {
            let id = std::mem::take(id);
            *self = View::Form(FormMode::Edit(id));
        }
    }

    /// A form submission succeeded for `id`: show the saved post. A
    /// submission arriving from a stale page lands on the post as well.
    pub fn saved(&mut self, id: impl Into<String>) {
        *self = View::Post(id.into());
    }

    /// Back out of the current screen: an edit returns to its post,
    /// everything else returns to the list.
    pub fn cancel(&mut self) {
        *self = match std::mem::take(self) {
            View::Form(FormMode::Edit(id)) => View::Post(id),
            _ => View::Home,
        };
    }

    /// Fall back to the list when the targeted post no longer exists.
    /// Returns true if the view changed.
    pub fn resolve(&mut self, blog: &Blog) -> bool {
        let stale = self
            .current_post_id()
            .is_some_and(|id| !blog.contains(id));
        if stale {
            tracing::debug!(view = ?self, "targeted post is gone, falling back to home");
            self.go_home();
        }
        stale
    }
}
