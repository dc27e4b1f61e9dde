//! Terminal commands and their translation into gallery UI events.

use anyhow::{anyhow, bail, Result};
use gallery_core::{
    navigation::{NEXT_CLASS, PREV_CLASS},
    ActionElement, FormElement, FormSubmission, UiEvent,
};
use shared::domain::PhotoId;

use crate::config::Settings;

pub const HELP: &str = "commands: next | prev | like [id] | favorite [id] | comment <name> <text...> | show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Show,
    Help,
    Quit,
}

pub struct CommandContext<'a> {
    pub settings: &'a Settings,
    /// Photo whose information panel is on screen.
    pub information_id: Option<PhotoId>,
}

impl CommandContext<'_> {
    fn target_id(&self, explicit: Option<&str>) -> Result<String> {
        match (explicit, self.information_id) {
            (Some(id), _) => Ok(id.to_string()),
            (None, Some(id)) => Ok(id.to_string()),
            (None, None) => Err(anyhow!("no photo selected; pass an id")),
        }
    }
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str, ctx: &CommandContext<'_>) -> Result<Option<Command>> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };

    let command = match head {
        "next" | "n" => Command::Event(UiEvent::control_click(NEXT_CLASS)),
        "prev" | "p" => Command::Event(UiEvent::control_click(PREV_CLASS)),
        "like" => Command::Event(UiEvent::ActionClick(ActionElement::new(
            "likes",
            ctx.target_id(words.next())?,
            &ctx.settings.like_path,
        ))),
        "favorite" | "fav" => Command::Event(UiEvent::ActionClick(ActionElement::new(
            "favorites",
            ctx.target_id(words.next())?,
            &ctx.settings.favorite_path,
        ))),
        "comment" => {
            let Some(name) = words.next() else {
                bail!("usage: comment <name> <text...>");
            };
            let body = words.collect::<Vec<_>>().join(" ");
            if body.is_empty() {
                bail!("usage: comment <name> <text...>");
            }
            let form = FormSubmission::new(&ctx.settings.comment_path)
                .with_element(FormElement::input("photo_id", ctx.target_id(None)?))
                .with_element(FormElement::input("name", name))
                .with_element(FormElement::textarea("body", body));
            Command::Event(UiEvent::SubmitForm(form))
        }
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => bail!("unknown command `{other}`; {HELP}"),
    };
    Ok(Some(command))
}
