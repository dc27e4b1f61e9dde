//! UI events and their dispatch onto the controller.

use tracing::debug;

use crate::{
    controller::{ActionOutcome, FormOutcome, GalleryController},
    form::FormSubmission,
    navigation::Direction,
    templates::Templates,
    transport::GalleryApi,
    view::{ActionElement, GalleryView},
    Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Click on a next/prev control.
    Navigate(Direction),
    /// Click inside the information panel.
    ActionClick(ActionElement),
    SubmitForm(FormSubmission),
}

impl UiEvent {
    /// Navigation event for a click on a control with the given class name.
    pub fn control_click(class_name: &str) -> Self {
        UiEvent::Navigate(Direction::from_class_name(class_name))
    }

    fn name(&self) -> &'static str {
        match self {
            UiEvent::Navigate(_) => "navigate",
            UiEvent::ActionClick(_) => "action_click",
            UiEvent::SubmitForm(_) => "submit_form",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Navigated { index: usize },
    Action(ActionOutcome),
    Form(FormOutcome),
}

/// Runs the handler for `event` to completion.
///
/// Events are handled one at a time on an exclusively borrowed controller, so a
/// second navigation cannot interleave with an in-flight comment fetch.
pub async fn dispatch<A, V, T>(
    controller: &mut GalleryController<A, V, T>,
    event: UiEvent,
) -> Result<EventOutcome>
where
    A: GalleryApi,
    V: GalleryView,
    T: Templates,
{
    debug!(event = event.name(), "dispatching ui event");
    match event {
        UiEvent::Navigate(direction) => controller
            .transition_photo(direction)
            .await
            .map(|index| EventOutcome::Navigated { index }),
        UiEvent::ActionClick(element) => controller
            .handle_action_click(&element)
            .await
            .map(EventOutcome::Action),
        UiEvent::SubmitForm(form) => controller
            .handle_form_submission(&form)
            .await
            .map(EventOutcome::Form),
    }
}
