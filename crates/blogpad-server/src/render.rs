// ABOUTME: Pure projection of the view state and post collection into the visible screen.
// ABOUTME: Decides list ordering, detail contents, and form prefill without touching HTML.

use std::cmp::Reverse;

use blogpad_core::{Blog, FormMode, Post, PostDraft, View};
use chrono::NaiveDate;

/// One entry on the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub author: String,
    pub date: String,
    pub excerpt: String,
}

/// One comment on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub author: String,
    pub date: String,
    pub text: String,
}

/// The full post shown on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub date: String,
    pub content: String,
    pub comments: Vec<CommentView>,
}

/// The post form, blank for a new post or filled with the edited post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub heading: &'static str,
    pub draft: PostDraft,
}

/// Exactly one screen is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List(Vec<PostCard>),
    Detail(PostDetail),
    Form(PostForm),
}

/// Project the current view over the collection. A view targeting a post
/// that no longer exists projects to the list.
pub fn project(view: &View, blog: &Blog) -> Screen {
    match view {
        View::Home => list(blog),
        View::Post(id) => match blog.get(id) {
            Some(post) => Screen::Detail(detail(post)),
            None => list(blog),
        },
        View::Form(FormMode::New) => Screen::Form(PostForm {
            heading: "NEW POST",
            draft: PostDraft::default(),
        }),
        View::Form(FormMode::Edit(id)) => match blog.get(id) {
            Some(post) => Screen::Form(PostForm {
                heading: "EDIT POST",
                draft: post.draft(),
            }),
            None => list(blog),
        },
    }
}

/// Posts ordered newest date first. Equal dates put the later-inserted post
/// first; dates that are not YYYY-MM-DD sort after every valid date.
pub fn sorted_by_date(posts: &[Post]) -> Vec<&Post> {
    let mut indexed: Vec<(usize, &Post)> = posts.iter().enumerate().collect();
    indexed.sort_by_key(|(index, post)| {
        let date = NaiveDate::parse_from_str(&post.date, "%Y-%m-%d").ok();
        Reverse((date, *index))
    });
    indexed.into_iter().map(|(_, post)| post).collect()
}

fn list(blog: &Blog) -> Screen {
    let cards = sorted_by_date(blog.posts())
        .into_iter()
        .map(|post| PostCard {
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author.clone(),
            date: post.date.clone(),
            excerpt: post.excerpt.clone(),
        })
        .collect();
    Screen::List(cards)
}

fn detail(post: &Post) -> PostDetail {
    PostDetail {
        id: post.id.clone(),
        title: post.title.clone(),
        author: post.author.clone(),
        date: post.date.clone(),
        content: post.content.clone(),
        comments: post
            .comments
            .iter()
            .map(|c| CommentView {
                author: c.author.clone(),
                date: c.date.clone(),
                text: c.text.clone(),
            })
            .collect(),
    }
}
