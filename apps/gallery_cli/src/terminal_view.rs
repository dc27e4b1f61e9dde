//! [`GalleryView`] that prints each rendered region to a terminal.

use std::io::Write;

use gallery_core::{ActionElement, GalleryError, GalleryView, SlideState};
use serde_json::Number;
use tracing::{debug, warn};

pub struct TerminalView<W: Write> {
    out: W,
    slide_count: usize,
    active_slide: Option<usize>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            slide_count: 0,
            active_slide: None,
        }
    }

    pub fn active_slide(&self) -> Option<usize> {
        self.active_slide
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, section: &str, markup: &str) {
        let text = plain_text(markup);
        if let Err(error) = writeln!(self.out, "== {section} ==\n{text}") {
            warn!(%error, section, "failed to write to terminal");
        }
    }
}

/// Markup reduced to readable lines: tags dropped, entities decoded, blank lines removed.
fn plain_text(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    let decoded = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#x2f;", "/")
        .replace("&amp;", "&");

    decoded
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

impl<W: Write> GalleryView for TerminalView<W> {
    fn render_slides(&mut self, markup: String) {
        self.slide_count = markup.matches("<figure").count();
        self.active_slide = None;
        debug!(slides = self.slide_count, "slides rendered");
    }

    fn set_slide_state(&mut self, index: usize, state: SlideState) -> gallery_core::Result<()> {
        if index >= self.slide_count {
            return Err(GalleryError::SlideOutOfRange {
                index,
                len: self.slide_count,
            });
        }
        match state {
            SlideState::Active => {
                self.active_slide = Some(index);
                let line = format!(
                    "slide {} of {} ({})",
                    index + 1,
                    self.slide_count,
                    state.class_name()
                );
                self.emit("slides", &line);
            }
            SlideState::Hidden => {
                if self.active_slide == Some(index) {
                    self.active_slide = None;
                }
                debug!(index, class = state.class_name(), "slide state changed");
            }
        }
        Ok(())
    }

    fn render_information(&mut self, markup: String) {
        self.emit("information", &markup);
    }

    fn render_comments(&mut self, markup: String) {
        self.emit("comments", &markup);
    }

    fn append_comment(&mut self, markup: String) {
        self.emit("new comment", &markup);
    }

    fn update_action_total(&mut self, element: &ActionElement, total: &Number) {
        let property = element.property.as_deref().unwrap_or("action");
        let line = format!("{property}: {total}");
        self.emit("information", &line);
    }

    fn reset_form(&mut self) {
        debug!("comment form reset");
    }
}
