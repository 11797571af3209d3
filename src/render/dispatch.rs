//! Renderers: pick a formatting strategy for a value and write it out.

use crate::error::RenderError;
use crate::render::{bespoke, Layout, Renderable};
use std::io::Write;

/// Output sink for command results.
pub trait Renderer {
    /// Render `value`, preceded by `headers` (one line each) where the format allows it.
    fn render(&mut self, value: &dyn Renderable, headers: &[&str]) -> Result<(), RenderError>;

    /// Short human-facing status line ("Logged in", "Deleted bridge ..."). Not part of
    /// machine-readable output.
    fn notice(&mut self, message: &str) -> Result<(), RenderError>;
}

/// Text renderer: section headers, then the value's own layout.
pub struct TableRenderer<W> {
    out: W,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TableRenderer<W> {
    fn render(&mut self, value: &dyn Renderable, headers: &[&str]) -> Result<(), RenderError> {
        for header in headers {
            writeln!(self.out, "{}", header)?;
        }
        let result = match value.layout() {
            Layout::Table(table) => table.render_table(&mut self.out),
            Layout::ExternalInitiatorAuth(auth) => {
                bespoke::external_initiator_auth(auth, &mut self.out)
            }
            Layout::PipelineRun(run) => bespoke::pipeline_run(run, &mut self.out),
            Layout::LogLevels(levels) => bespoke::log_levels(levels, &mut self.out),
            Layout::Unsupported => Err(RenderError::UnsupportedType(value.type_name())),
        };
        self.out.flush()?;
        result
    }

    fn notice(&mut self, message: &str) -> Result<(), RenderError> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }
}

/// JSON renderer: indented document of the value, headers and notices dropped.
pub struct JsonRenderer<W> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, value: &dyn Renderable, _headers: &[&str]) -> Result<(), RenderError> {
        let document = serde_json::to_string_pretty(&value.to_json()?)?;
        writeln!(self.out, "{}", document)?;
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, _message: &str) -> Result<(), RenderError> {
        Ok(())
    }
}
