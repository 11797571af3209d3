use crate::cli::parse::{JobCommands, RunCommands};
use crate::cli::RunContext;
use crate::client::{parse_response, Method};
use crate::error::ApiError;
use crate::presenters::{JobPresenter, PipelineRunPresenter};
use crate::render::Renderer;
use serde_json::json;

pub(crate) async fn handle(
    ctx: &RunContext,
    command: &JobCommands,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    match command {
        JobCommands::List { page } => {
            let path = ctx.page_path("/v2/jobs", *page);
            super::list::<JobPresenter>(ctx, &path, renderer).await
        }
        JobCommands::Show { id } => {
            super::show::<JobPresenter>(ctx, &format!("/v2/jobs/{}", id), renderer).await
        }
        JobCommands::Create { file } => {
            let toml = std::fs::read_to_string(file).map_err(|e| {
                ApiError::InvalidArgument(format!(
                    "failed to read job spec {}: {}",
                    file.display(),
                    e
                ))
            })?;
            let response = ctx.client().post("/v2/jobs", &json!({ "toml": toml })).await?;
            super::render_one::<JobPresenter>(&response, &[], renderer)
        }
        JobCommands::Delete { id, yes } => {
            if !super::confirm(format!("Delete job {}?", id), *yes)? {
                renderer.notice("Deletion cancelled")?;
                return Ok(());
            }
            let response = ctx.client().delete(&format!("/v2/jobs/{}", id)).await?;
            parse_response(&response)?;
            renderer.notice(&format!("Deleted job {}", id))?;
            Ok(())
        }
        JobCommands::Run { id } => {
            let response = ctx
                .client()
                .request(Method::Post, &format!("/v2/jobs/{}/runs", id), None)
                .await?;
            super::render_resource::<PipelineRunPresenter>(&response, &[], renderer)
        }
        JobCommands::Runs { command } => handle_runs(ctx, command, renderer).await,
    }
}

async fn handle_runs(
    ctx: &RunContext,
    command: &RunCommands,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    match command {
        RunCommands::List { job_id, page } => {
            let base = match job_id {
                Some(job_id) => format!("/v2/jobs/{}/runs", job_id),
                None => "/v2/pipeline/runs".to_string(),
            };
            let path = ctx.page_path(&base, *page);
            super::list::<PipelineRunPresenter>(ctx, &path, renderer).await
        }
        RunCommands::Show { job_id, run_id } => {
            let path = format!("/v2/jobs/{}/runs/{}", job_id, run_id);
            let response = ctx.client().get(&path).await?;
            super::render_resource::<PipelineRunPresenter>(&response, &[], renderer)
        }
        RunCommands::Cancel { run_id, yes } => {
            if !super::confirm(format!("Cancel run {}?", run_id), *yes)? {
                renderer.notice("Cancellation aborted")?;
                return Ok(());
            }
            let path = format!("/v2/pipeline/runs/{}/cancellation", run_id);
            let response = ctx.client().request(Method::Put, &path, None).await?;
            super::render_resource::<PipelineRunPresenter>(&response, &[], renderer)
        }
    }
}
