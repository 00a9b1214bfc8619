//! Testing utilities: DOM fixtures and re-exported mocks.
//!
//! Useful for exercising the extractor and runner without launching Chrome
//! or touching object storage.

pub use crate::browsers::{MockBrowser, MockBrowserCall};
pub use crate::stores::MemoryStore;

/// One `li.group` element of a fixture page.
#[derive(Debug, Clone, Default)]
pub struct GroupFixture {
    position: Option<String>,
    time: Option<String>,
    riders: Vec<String>,
}

impl GroupFixture {
    /// Group with a position label and no time element.
    pub fn new(position: impl Into<String>) -> Self {
        Self {
            position: Some(position.into()),
            ..Default::default()
        }
    }

    /// Group without the `.bol font` position element.
    pub fn unlabelled() -> Self {
        Self::default()
    }

    pub fn time(mut self, gap: impl Into<String>) -> Self {
        self.time = Some(gap.into());
        self
    }

    pub fn without_time(mut self) -> Self {
        self.time = None;
        self
    }

    pub fn riders<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.riders.extend(names.into_iter().map(Into::into));
        self
    }

    fn render(&self, out: &mut String) {
        out.push_str("<li class=\"group\">");
        if let Some(position) = &self.position {
            out.push_str(&format!("<span class=\"bol\"><font>{}</font></span>", escape(position)));
        }
        if let Some(time) = &self.time {
            out.push_str(&format!("<div class=\"time\">{}<span class=\"flag\"></span></div>", escape(time)));
        }
        out.push_str("<ul>");
        for (i, rider) in self.riders.iter().enumerate() {
            out.push_str(&format!("<li><a href=\"/rider/{}\">{}</a></li>", i, escape(rider)));
        }
        out.push_str("</ul></li>");
    }
}

/// A live standings page shaped like the results site's markup.
#[derive(Debug, Clone, Default)]
pub struct StandingsPage {
    groups: Vec<GroupFixture>,
}

impl StandingsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, group: GroupFixture) -> Self {
        self.groups.push(group);
        self
    }

    /// Render the full HTML document.
    pub fn render(&self) -> String {
        let mut out = String::from(
            "<!DOCTYPE html><html><head><title>Live</title></head><body><div class=\"situCont\"><ul class=\"situ5b\">",
        );
        for group in &self.groups {
            group.render(&mut out);
        }
        out.push_str("</ul></div></body></html>");
        out
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
