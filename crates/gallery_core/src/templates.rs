//! Markup for slides, the information panel and comments.

use askama::Template;
use shared::domain::{Comment, Photo};

use crate::Result;

pub const DEFAULT_LIKE_PATH: &str = "/photos/like";
pub const DEFAULT_FAVORITE_PATH: &str = "/photos/favorite";

/// Turns gallery data into markup fragments for a [`crate::view::GalleryView`].
pub trait Templates {
    fn photos(&self, photos: &[Photo]) -> Result<String>;
    /// `None` when no photo matches the requested id; renders an empty panel.
    fn photo_information(&self, photo: Option<&Photo>) -> Result<String>;
    fn comments(&self, comments: &[Comment]) -> Result<String>;
    fn comment(&self, comment: &Comment) -> Result<String>;
}

struct SlideView<'a> {
    id: i64,
    src: &'a str,
    title: &'a str,
    caption: &'a str,
}

#[derive(Template)]
#[template(path = "photos.html")]
struct PhotosTemplate<'a> {
    slides: Vec<SlideView<'a>>,
}

#[derive(Template)]
#[template(path = "photo_information.html")]
struct PhotoInformationTemplate<'a> {
    present: bool,
    id: i64,
    title: &'a str,
    created_at: &'a str,
    likes: i64,
    favorites: i64,
    like_path: &'a str,
    favorite_path: &'a str,
}

struct CommentView<'a> {
    name: &'a str,
    body: &'a str,
    date: &'a str,
}

impl<'a> From<&'a Comment> for CommentView<'a> {
    fn from(comment: &'a Comment) -> Self {
        Self {
            name: comment.name.as_deref().unwrap_or_default(),
            body: comment.body.as_deref().unwrap_or_default(),
            date: comment.date.as_deref().unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "comments.html")]
struct CommentsTemplate<'a> {
    entries: Vec<CommentView<'a>>,
}

#[derive(Template)]
#[template(path = "comment.html")]
struct CommentTemplate<'a> {
    entry: CommentView<'a>,
}

/// HTML fragments matching the gallery page's markup. Text is HTML-escaped.
#[derive(Debug, Clone)]
pub struct MarkupTemplates {
    like_path: String,
    favorite_path: String,
}

impl Default for MarkupTemplates {
    fn default() -> Self {
        Self::new(DEFAULT_LIKE_PATH, DEFAULT_FAVORITE_PATH)
    }
}

impl MarkupTemplates {
    pub fn new(like_path: impl Into<String>, favorite_path: impl Into<String>) -> Self {
        Self {
            like_path: like_path.into(),
            favorite_path: favorite_path.into(),
        }
    }
}

impl Templates for MarkupTemplates {
    fn photos(&self, photos: &[Photo]) -> Result<String> {
        let slides = photos
            .iter()
            .map(|photo| SlideView {
                id: photo.id.0,
                src: photo.src.as_deref().unwrap_or_default(),
                title: photo.title.as_deref().unwrap_or_default(),
                caption: photo.caption.as_deref().unwrap_or_default(),
            })
            .collect();
        Ok(PhotosTemplate { slides }.render()?)
    }

    fn photo_information(&self, photo: Option<&Photo>) -> Result<String> {
        let template = PhotoInformationTemplate {
            present: photo.is_some(),
            id: photo.map(|p| p.id.0).unwrap_or_default(),
            title: photo.and_then(|p| p.title.as_deref()).unwrap_or_default(),
            created_at: photo
                .and_then(|p| p.created_at.as_deref())
                .unwrap_or_default(),
            likes: photo.and_then(|p| p.likes).unwrap_or_default(),
            favorites: photo.and_then(|p| p.favorites).unwrap_or_default(),
            like_path: &self.like_path,
            favorite_path: &self.favorite_path,
        };
        Ok(template.render()?)
    }

    fn comments(&self, comments: &[Comment]) -> Result<String> {
        let entries = comments.iter().map(CommentView::from).collect();
        Ok(CommentsTemplate { entries }.render()?)
    }

    fn comment(&self, comment: &Comment) -> Result<String> {
        Ok(CommentTemplate {
            entry: CommentView::from(comment),
        }
        .render()?)
    }
}
