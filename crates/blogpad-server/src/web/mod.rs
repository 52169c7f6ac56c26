// ABOUTME: Web UI route handlers serving the list, detail, and form screens via Askama templates.
// ABOUTME: Each handler performs one BlogApp action under the lock and renders the resulting screen.

use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Response};
use blogpad_core::{BlogApp, Notice, NoticeKind, PostDraft};
use serde::Deserialize;

use crate::app_state::SharedState;
use crate::render::{PostCard, PostDetail, PostForm, Screen, project};

use askama::Template;
use askama_derive_axum::IntoResponse as AskamaIntoResponse;

/// A notice as the toast partial displays it.
pub struct NoticeView {
    pub message: String,
    pub class: &'static str,
}

impl From<Notice> for NoticeView {
    fn from(notice: Notice) -> Self {
        let class = match notice.kind {
            NoticeKind::Success => "toast-success",
            NoticeKind::Error => "toast-error",
        };
        Self {
            message: notice.message,
            class,
        }
    }
}

/// List screen: every post as a card, newest first.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub cards: Vec<PostCard>,
    pub notice: Option<NoticeView>,
}

/// Detail screen: one post, its comments, and the comment form.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub post: PostDetail,
    pub comment_author: String,
    pub comment_text: String,
    pub notice: Option<NoticeView>,
}

/// Form screen for creating or editing a post.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "form.html")]
pub struct FormTemplate {
    pub form: PostForm,
    pub notice: Option<NoticeView>,
}

/// Form data for adding a comment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommentForm {
    pub author: String,
    pub text: String,
}

/// Input carried back into the page after a rejected submission so the user
/// does not have to type it again.
enum Retained {
    Nothing,
    Draft(PostDraft),
    Comment(CommentForm),
}

/// Project the app's current screen and render it with an optional toast.
fn render_page(app: &BlogApp, notice: Option<Notice>, retained: Retained) -> Response {
    let notice = notice.map(NoticeView::from);

    match project(app.view(), app.blog()) {
        Screen::List(cards) => HomeTemplate { cards, notice }.into_response(),
        Screen::Detail(post) => {
            let CommentForm { author, text } = match retained {
                Retained::Comment(comment) => comment,
                _ => CommentForm::default(),
            };
            PostTemplate {
                post,
                comment_author: author,
                comment_text: text,
                notice,
            }
            .into_response()
        }
        Screen::Form(mut form) => {
            if let Retained::Draft(draft) = retained {
                form.draft = draft;
            }
            FormTemplate { form, notice }.into_response()
        }
    }
}

fn is_rejection(notice: &Option<Notice>) -> bool {
    matches!(notice, Some(n) if n.kind == NoticeKind::Error)
}

/// GET / - Render whichever screen is current.
pub async fn index(State(state): State<SharedState>) -> Response {
    let app = state.app.lock().await;
    render_page(&app, None, Retained::Nothing)
}

/// POST /home - Show the post list.
pub async fn home(State(state): State<SharedState>) -> Response {
    let mut app = state.app.lock().await;
    app.show_home();
    render_page(&app, None, Retained::Nothing)
}

/// POST /posts/{id}/open - Show one post.
pub async fn open_post(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut app = state.app.lock().await;
    app.show_post(&id);
    render_page(&app, None, Retained::Nothing)
}

/// POST /posts/new - Show a blank post form.
pub async fn new_post_form(State(state): State<SharedState>) -> Response {
    let mut app = state.app.lock().await;
    app.show_new_post_form();
    render_page(&app, None, Retained::Nothing)
}

/// POST /current/edit - Show the edit form for the open post.
pub async fn edit_post_form(State(state): State<SharedState>) -> Response {
    let mut app = state.app.lock().await;
    app.edit_current_post();
    render_page(&app, None, Retained::Nothing)
}

/// POST /form/cancel - Leave the form without saving.
pub async fn cancel_form(State(state): State<SharedState>) -> Response {
    let mut app = state.app.lock().await;
    app.cancel_form();
    render_page(&app, None, Retained::Nothing)
}

/// POST /form/save - Create or update a post from the submitted form.
pub async fn save_post(
    State(state): State<SharedState>,
    Form(draft): Form<PostDraft>,
) -> Response {
    let mut app = state.app.lock().await;
    let notice = app.save_post(draft.clone());
    let retained = if is_rejection(&notice) {
        Retained::Draft(draft)
    } else {
        Retained::Nothing
    };
    render_page(&app, notice, retained)
}

/// POST /current/delete - Delete the open post and return to the list.
pub async fn delete_post(State(state): State<SharedState>) -> Response {
    let mut app = state.app.lock().await;
    let notice = app.delete_current_post();
    render_page(&app, notice, Retained::Nothing)
}

/// POST /current/comments - Add a comment to the open post.
pub async fn add_comment(
    State(state): State<SharedState>,
    Form(form): Form<CommentForm>,
) -> Response {
    let mut app = state.app.lock().await;
    let notice = app.add_comment(&form.author, &form.text);
    let retained = if is_rejection(&notice) {
        Retained::Comment(form)
    } else {
        Retained::Nothing
    };
    render_page(&app, notice, retained)
}
