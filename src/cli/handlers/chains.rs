use crate::cli::parse::{ChainCommands, NodeListCommands};
use crate::cli::RunContext;
use crate::error::ApiError;
use crate::presenters::{ChainPresenter, NodePresenter};
use crate::render::Renderer;

pub(crate) async fn handle_chains(
    ctx: &RunContext,
    command: &ChainCommands,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    match command {
        ChainCommands::List { network, page } => {
            let path = ctx.page_path(&format!("/v2/chains/{}", network.path_segment()), *page);
            super::list::<ChainPresenter>(ctx, &path, renderer).await
        }
    }
}

pub(crate) async fn handle_nodes(
    ctx: &RunContext,
    command: &NodeListCommands,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    match command {
        NodeListCommands::List { network, page } => {
            let path = ctx.page_path(&format!("/v2/nodes/{}", network.path_segment()), *page);
            super::list::<NodePresenter>(ctx, &path, renderer).await
        }
    }
}
