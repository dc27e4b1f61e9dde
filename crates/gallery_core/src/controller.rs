//! Gallery controller: owns the photo/comment state and keeps the view in sync with it.

use serde_json::Number;
use shared::{
    domain::{Comment, Photo, PhotoId},
    protocol::ActionRequest,
};
use tracing::{debug, info, warn};

use crate::{
    form::FormSubmission,
    navigation::{self, Direction},
    templates::Templates,
    transport::{GalleryApi, PostOutcome},
    view::{ActionElement, GalleryView, SlideState},
    GalleryError, Result,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    /// `None` until the photo list has been fetched.
    pub photos: Option<Vec<Photo>>,
    /// Comments of the displayed photo; replaced on every fetch.
    pub comments: Option<Vec<Comment>>,
    pub current_index: usize,
    /// Id the information panel was last rendered for.
    pub information_id: Option<PhotoId>,
}

impl GalleryState {
    fn photo_count(&self) -> usize {
        self.photos.as_ref().map_or(0, Vec::len)
    }

    fn photo_by_id(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.as_ref()?.iter().find(|photo| photo.id == id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// The clicked element is not an action button; nothing was sent.
    Ignored,
    Updated { total: Number },
    Rejected { status: u16 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Appended(Comment),
    Rejected { status: u16 },
}

pub struct GalleryController<A, V, T> {
    api: A,
    view: V,
    templates: T,
    state: GalleryState,
}

impl<A, V, T> GalleryController<A, V, T>
where
    A: GalleryApi,
    V: GalleryView,
    T: Templates,
{
    pub fn new(api: A, view: V, templates: T) -> Self {
        Self {
            api,
            view,
            templates,
            state: GalleryState::default(),
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn current_photo(&self) -> Option<&Photo> {
        self.state.photos.as_ref()?.get(self.state.current_index)
    }

    /// Loads the photo list, shows the first slide and its comments.
    pub async fn main(&mut self) -> Result<()> {
        self.fetch_photos().await?;
        self.render_photos()?;

        let first_id = match self.state.photos.as_deref() {
            Some([first, ..]) => first.id,
            _ => return Err(GalleryError::EmptyGallery),
        };
        self.state.current_index = 0;
        self.view.set_slide_state(0, SlideState::Active)?;

        self.render_photo_information(first_id)?;
        self.fetch_comments(first_id).await?;
        self.render_comments()?;
        info!(photos = self.state.photo_count(), "gallery initialized");
        Ok(())
    }

    /// Moves one slide in `direction`, wrapping at either end, and returns the new index.
    ///
    /// The information panel and comments are loaded for id `index + 1`, which
    /// names the displayed photo only when ids run `1..=N` in slide order.
    pub async fn transition_photo(&mut self, direction: Direction) -> Result<usize> {
        let len = self.state.photo_count();
        if len == 0 {
            return Err(GalleryError::NotInitialized);
        }

        self.view
            .set_slide_state(self.state.current_index, SlideState::Hidden)?;
        self.state.current_index = navigation::step(self.state.current_index, direction, len);
        self.view
            .set_slide_state(self.state.current_index, SlideState::Active)?;
        info!(index = self.state.current_index, ?direction, "slide changed");

        let photo_id = PhotoId::from_slide_index(self.state.current_index);
        self.render_photo_information(photo_id)?;
        self.fetch_comments(photo_id).await?;
        self.render_comments()?;
        Ok(self.state.current_index)
    }

    pub async fn handle_action_click(&mut self, element: &ActionElement) -> Result<ActionOutcome> {
        if !element.is_action() {
            debug!("click outside an action button ignored");
            return Ok(ActionOutcome::Ignored);
        }
        let path = element
            .href
            .as_deref()
            .ok_or(GalleryError::MissingAttribute("href"))?;

        let request = ActionRequest {
            photo_id: element.target_number(),
        };
        match self.api.post_action(path, &request).await? {
            PostOutcome::Accepted(body) => {
                self.view.update_action_total(element, &body.total);
                debug!(property = ?element.property, total = %body.total, "action total updated");
                Ok(ActionOutcome::Updated { total: body.total })
            }
            PostOutcome::Rejected { status } => Ok(ActionOutcome::Rejected { status }),
        }
    }

    pub async fn handle_form_submission(&mut self, form: &FormSubmission) -> Result<FormOutcome> {
        let path = form
            .action
            .as_deref()
            .ok_or(GalleryError::MissingAttribute("action"))?;

        match self.api.post_form(path, form.encode()).await? {
            PostOutcome::Accepted(comment) => {
                self.view.reset_form();
                self.render_comment(&comment)?;
                self.state
                    .comments
                    .get_or_insert_with(Vec::new)
                    .push(comment.clone());
                Ok(FormOutcome::Appended(comment))
            }
            PostOutcome::Rejected { status } => Ok(FormOutcome::Rejected { status }),
        }
    }

    async fn fetch_photos(&mut self) -> Result<()> {
        let photos = self.api.fetch_photos().await?;
        debug!(count = photos.len(), "photos fetched");
        self.state.photos = Some(photos);
        Ok(())
    }

    fn render_photos(&mut self) -> Result<()> {
        let photos = self.state.photos.as_deref().unwrap_or_default();
        let markup = self.templates.photos(photos)?;
        self.view.render_slides(markup);
        Ok(())
    }

    fn render_photo_information(&mut self, photo_id: PhotoId) -> Result<()> {
        self.state.information_id = Some(photo_id);
        let photo = self.state.photo_by_id(photo_id);
        if photo.is_none() {
            warn!(%photo_id, "no photo with this id; rendering empty information panel");
        }
        let markup = self.templates.photo_information(photo)?;
        self.view.render_information(markup);
        Ok(())
    }

    async fn fetch_comments(&mut self, photo_id: PhotoId) -> Result<()> {
        let comments = self.api.fetch_comments(photo_id).await?;
        debug!(%photo_id, count = comments.len(), "comments fetched");
        self.state.comments = Some(comments);
        Ok(())
    }

    fn render_comments(&mut self) -> Result<()> {
        let comments = self.state.comments.as_deref().unwrap_or_default();
        let markup = self.templates.comments(comments)?;
        self.view.render_comments(markup);
        Ok(())
    }

    fn render_comment(&mut self, comment: &Comment) -> Result<()> {
        let markup = self.templates.comment(comment)?;
        self.view.append_comment(markup);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
