//! Client-side controller for a photo gallery page.
//!
//! [`controller::GalleryController`] fetches photos and comments through a
//! [`transport::GalleryApi`], renders them with [`templates::Templates`] into a
//! [`view::GalleryView`], and turns [`events::UiEvent`]s into like/favorite
//! and comment POSTs.

pub mod controller;
pub mod error;
pub mod events;
pub mod form;
pub mod navigation;
pub mod templates;
pub mod transport;
pub mod view;

pub use controller::{ActionOutcome, FormOutcome, GalleryController, GalleryState};
pub use error::{GalleryError, Result};
pub use events::{dispatch, EventOutcome, UiEvent};
pub use form::{ElementTag, FormElement, FormSubmission};
pub use navigation::{wrap_index, Direction};
pub use templates::{MarkupTemplates, Templates};
pub use transport::{GalleryApi, HttpGalleryApi, PostOutcome};
pub use view::{ActionElement, GalleryView, SlideState};

#[cfg(test)]
pub(crate) mod test_support;
