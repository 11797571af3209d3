//! Job presenters. A job renders one grid row per pipeline task, folded into a
//! single block under the job's identity columns.

use crate::error::RenderError;
use crate::presenters::format::timestamp;
use crate::render::{Presenter, Style, TableSpec, ToRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSpec {
    #[serde(default)]
    pub dot_dag_source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPresenter {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub job_type: String,
    #[serde(default)]
    pub schema_version: u32,
    #[serde(rename = "externalJobID", default)]
    pub external_job_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub pipeline_spec: Option<PipelineSpec>,
}

impl JobPresenter {
    /// Pipeline tasks as `"<dot id> <type>"`, in declaration order.
    pub fn friendly_tasks(&self) -> Vec<String> {
        self.pipeline_spec
            .as_ref()
            .map(|spec| {
                parse_tasks(&spec.dot_dag_source)
                    .into_iter()
                    .map(|(id, kind)| format!("{} {}", id, kind))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn row_with_tasks(&self, tasks: String) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.job_type.clone(),
            timestamp(&self.created_at),
            tasks,
        ]
    }
}

impl ToRow for JobPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(self.row_with_tasks(self.friendly_tasks().join("\n")))
    }
}

impl Presenter for JobPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: None,
        headers: &["ID", "Name", "Type", "Created At", "Tasks"],
        style: Style::Grid {
            merge: &[0, 1, 2, 3],
        },
    };

    fn rows(&self) -> Result<Vec<Vec<String>>, RenderError> {
        let tasks = self.friendly_tasks();
        if tasks.is_empty() {
            return Ok(vec![self.row_with_tasks(String::new())]);
        }
        Ok(tasks
            .into_iter()
            .map(|task| self.row_with_tasks(task))
            .collect())
    }
}

/// Extract `(dot id, type)` pairs from the node statements of a pipeline DOT graph.
///
/// Only statements carrying an attribute list are tasks; edges (`a -> b`) and
/// comments are skipped. A task without a `type` attribute reports an empty type.
pub(crate) fn parse_tasks(source: &str) -> Vec<(String, String)> {
    let stripped = strip_comments(source);

    let mut tasks = Vec::new();
    let mut rest = stripped.as_str();
    while let Some(open) = find_unquoted(rest, '[') {
        let head = &rest[..open];
        let after = &rest[open + 1..];
        let close = find_unquoted(after, ']').unwrap_or(after.len());
        let attrs = &after[..close];

        let statement = head
            .rsplit(|c: char| c == ';' || c == '\n' || c == '{')
            .next()
            .unwrap_or("")
            .trim();
        if !statement.is_empty() && !statement.contains("->") {
            let id = statement.trim_matches('"').to_string();
            tasks.push((id, attribute(attrs, "type").unwrap_or_default()));
        }

        rest = after.get(close + 1..).unwrap_or("");
    }
    tasks
}

/// Tracks whether the scan position is inside a `"..."` string or a `<...>`
/// value. Angle values nest and may hold brackets, commas and quotes.
#[derive(Debug, Default)]
struct Quoting {
    in_string: bool,
    escaped: bool,
    angle_depth: usize,
}

impl Quoting {
    /// Advance over `c`; true when `c` itself is outside every quoted region.
    fn step(&mut self, c: char) -> bool {
        if self.in_string {
            match c {
                _ if self.escaped => self.escaped = false,
                '\\' => self.escaped = true,
                '"' => self.in_string = false,
                _ => {}
            }
            return false;
        }
        if self.angle_depth > 0 {
            match c {
                '<' => self.angle_depth += 1,
                '>' => self.angle_depth -= 1,
                _ => {}
            }
            return false;
        }
        match c {
            '"' => {
                self.in_string = true;
                false
            }
            '<' => {
                self.angle_depth = 1;
                false
            }
            _ => true,
        }
    }
}

/// Drop `// line` and `/* block */` comments that start outside quoted regions.
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut quoting = Quoting::default();
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if quoting.step(c) && c == '/' {
            match chars.peek() {
                Some('/') => {
                    while chars.next_if(|&n| n != '\n').is_some() {}
                    continue;
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    for n in chars.by_ref() {
                        if prev == '*' && n == '/' {
                            break;
                        }
                        prev = n;
                    }
                    out.push(' ');
                    continue;
                }
                _ => {}
            }
        }
        out.push(c);
    }
    out
}

fn attribute(attrs: &str, name: &str) -> Option<String> {
    let mut rest = attrs;
    while let Some(eq) = find_unquoted(rest, '=') {
        let key = rest[..eq]
            .rsplit(|c: char| c.is_whitespace() || c == ',' || c == ';')
            .next()
            .unwrap_or("")
            .trim();
        let value_start = rest[eq + 1..].trim_start();
        let (value, remaining) = if let Some(quoted) = value_start.strip_prefix('"') {
            let end = closing_quote(quoted).unwrap_or(quoted.len());
            (&quoted[..end], quoted.get(end + 1..).unwrap_or(""))
        } else if value_start.starts_with('<') {
            let end = closing_angle(value_start).unwrap_or(value_start.len());
            (
                value_start.get(1..end).unwrap_or(""),
                value_start.get(end + 1..).unwrap_or(""),
            )
        } else {
            let end = value_start
                .find(|c: char| c.is_whitespace() || c == ',' || c == ';')
                .unwrap_or(value_start.len());
            (&value_start[..end], &value_start[end..])
        };
        if key == name {
            return Some(value.to_string());
        }
        rest = remaining;
    }
    None
}

fn find_unquoted(s: &str, target: char) -> Option<usize> {
    let mut quoting = Quoting::default();
    s.char_indices()
        .find(|&(_, c)| quoting.step(c) && c == target)
        .map(|(idx, _)| idx)
}

fn closing_quote(s: &str) -> Option<usize> {
    let mut escaped = false;
    for (idx, c) in s.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(idx),
            _ => {}
        }
    }
    None
}

/// Offset of the `>` matching the `<` that opens `s`.
fn closing_angle(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}
