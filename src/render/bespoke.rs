//! Fixed-column layouts for the few views that do not fit the presenter contract.

use crate::error::RenderError;
use crate::presenters::format::opt_timestamp;
use crate::presenters::{
    ExternalInitiatorAuthentication, LogLevelsPresenter, PipelineRunPresenter,
};
use crate::render::{render_grid, Presenter, ToRow};
use std::io::Write;

pub(crate) fn external_initiator_auth(
    auth: &ExternalInitiatorAuthentication,
    out: &mut dyn Write,
) -> Result<(), RenderError> {
    let headers = [
        "Name",
        "URL",
        "Access Key",
        "Secret",
        "Outgoing Token",
        "Outgoing Secret",
    ];
    let row = vec![
        auth.name.clone(),
        auth.url.clone().unwrap_or_default(),
        auth.access_key.clone(),
        auth.secret.clone(),
        auth.outgoing_token.clone(),
        auth.outgoing_secret.clone(),
    ];
    render_grid(&headers, &[row], &[], out)
}

pub(crate) fn pipeline_run(
    run: &PipelineRunPresenter,
    out: &mut dyn Write,
) -> Result<(), RenderError> {
    render_grid(
        PipelineRunPresenter::TABLE.headers,
        &[run.to_row()?],
        &[],
        out,
    )?;

    if run.task_runs.is_empty() {
        return Ok(());
    }
    let mut rows = Vec::with_capacity(run.task_runs.len());
    for task in &run.task_runs {
        let output = match &task.output {
            Some(value) => serde_json::to_string(value)?,
            None => String::new(),
        };
        rows.push(vec![
            task.dot_id.clone(),
            task.r#type.clone(),
            output,
            task.error.clone().unwrap_or_default(),
            opt_timestamp(task.finished_at.as_ref()),
        ]);
    }
    render_grid(
        &["Task", "Type", "Output", "Error", "Finished At"],
        &rows,
        &[],
        out,
    )
}

pub(crate) fn log_levels(
    levels: &LogLevelsPresenter,
    out: &mut dyn Write,
) -> Result<(), RenderError> {
    if levels.service_name.len() != levels.log_level.len() {
        return Err(RenderError::Field(format!(
            "{} services but {} log levels",
            levels.service_name.len(),
            levels.log_level.len()
        )));
    }
    let mut rows = vec![vec!["Global".to_string(), levels.default_log_level.clone()]];
    rows.extend(
        levels
            .service_name
            .iter()
            .zip(&levels.log_level)
            .map(|(service, level)| vec![service.clone(), level.clone()]),
    );
    render_grid(&["Service", "Log Level"], &rows, &[], out)
}
