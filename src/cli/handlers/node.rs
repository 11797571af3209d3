use crate::cli::parse::NodeCommands;
use crate::cli::RunContext;
use crate::error::ApiError;
use crate::presenters::{ConfigPresenter, HealthCheckPresenter};
use crate::render::Renderer;

pub(crate) async fn handle(
    ctx: &RunContext,
    command: &NodeCommands,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    match command {
        NodeCommands::Config => {
            let response = ctx.client().get("/v2/config/v2").await?;
            super::render_resource::<ConfigPresenter>(&response, &[], renderer)
        }
        NodeCommands::Health => super::list::<HealthCheckPresenter>(ctx, "/health", renderer).await,
    }
}
