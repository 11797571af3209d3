//! Rendering core: the presenter capability contract, the one-or-many `Listing`,
//! and the closed set of layouts a renderer dispatches over.

mod bespoke;
mod dispatch;
mod grid;
mod list;

use crate::error::RenderError;
use crate::presenters::{
    ExternalInitiatorAuthentication, LogLevelsPresenter, PipelineRunPresenter,
};
use serde::{Serialize, Serializer};
use std::io::Write;

pub use dispatch::{JsonRenderer, Renderer, TableRenderer};
pub use grid::render_grid;
pub use list::render_list;

/// How a presenter's rows are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Label-aligned cards, one field per line, cards separated by dividers.
    List,
    /// Bordered grid. Adjacent rows agreeing on every `merge` column fold into one block.
    Grid { merge: &'static [usize] },
}

/// Table declaration owned by a single presenter type.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    /// Banner line written before the table (key material carries an emoji prefix).
    pub banner: Option<&'static str>,
    pub headers: &'static [&'static str],
    pub style: Style,
}

/// Renders one entity as display strings, one per header.
pub trait ToRow {
    fn to_row(&self) -> Result<Vec<String>, RenderError>;
}

/// Writes a complete text table for a value.
pub trait RenderTable {
    fn render_table(&self, out: &mut dyn Write) -> Result<(), RenderError>;
}

/// A resource presenter: row formatting plus its own table declaration.
pub trait Presenter: ToRow + Serialize {
    const TABLE: TableSpec;

    /// Rows contributed by this entity. Most entities produce exactly one.
    fn rows(&self) -> Result<Vec<Vec<String>>, RenderError> {
        Ok(vec![self.to_row()?])
    }
}

/// Rendering strategy selected for a value, dispatched once by the table renderer.
pub enum Layout<'a> {
    Table(&'a dyn RenderTable),
    ExternalInitiatorAuth(&'a ExternalInitiatorAuthentication),
    PipelineRun(&'a PipelineRunPresenter),
    LogLevels(&'a LogLevelsPresenter),
    Unsupported,
}

/// Anything a command can hand to a [`Renderer`].
pub trait Renderable {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn to_json(&self) -> Result<serde_json::Value, RenderError>;

    fn layout(&self) -> Layout<'_> {
        Layout::Unsupported
    }
}

/// One generic renderable over a sequence of presenters. Show commands wrap a
/// single entity, list commands a page of them; both share the row path.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    items: Vec<T>,
    single: bool,
}

impl<T> Listing<T> {
    pub fn one(item: T) -> Self {
        Self {
            items: vec![item],
            single: true,
        }
    }

    pub fn many(items: Vec<T>) -> Self {
        Self {
            items,
            single: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Serialize> Serialize for Listing<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match (self.single, self.items.first()) {
            (true, Some(item)) => item.serialize(serializer),
            _ => self.items.serialize(serializer),
        }
    }
}

impl<T: Presenter> RenderTable for Listing<T> {
    fn render_table(&self, out: &mut dyn Write) -> Result<(), RenderError> {
        let spec = T::TABLE;
        if let Some(banner) = spec.banner {
            writeln!(out, "{}", banner)?;
        }
        let mut rows = Vec::with_capacity(self.items.len());
        for item in &self.items {
            rows.extend(item.rows()?);
        }
        match spec.style {
            Style::List => render_list(spec.headers, &rows, out),
            Style::Grid { merge } => render_grid(spec.headers, &rows, merge, out),
        }
    }
}

impl<T: Presenter> Renderable for Listing<T> {
    fn to_json(&self) -> Result<serde_json::Value, RenderError> {
        Ok(serde_json::to_value(self)?)
    }

    fn layout(&self) -> Layout<'_> {
        Layout::Table(self)
    }
}

pub(crate) fn check_row_width(headers: &[&str], row: &[String]) -> Result<(), RenderError> {
    if headers.len() != row.len() {
        return Err(RenderError::RowWidth {
            expected: headers.len(),
            actual: row.len(),
        });
    }
    Ok(())
}
