use crate::cli::parse::ForwarderCommands;
use crate::cli::RunContext;
use crate::client::parse_response;
use crate::error::ApiError;
use crate::presenters::ForwarderPresenter;
use crate::render::Renderer;
use serde_json::json;

const FORWARDERS_PATH: &str = "/v2/nodes/evm/forwarders";

pub(crate) async fn handle(
    ctx: &RunContext,
    command: &ForwarderCommands,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    match command {
        ForwarderCommands::List { page } => {
            let path = ctx.page_path(FORWARDERS_PATH, *page);
            super::list::<ForwarderPresenter>(ctx, &path, renderer).await
        }
        ForwarderCommands::Track {
            address,
            evm_chain_id,
        } => {
            let body = json!({ "evmChainId": evm_chain_id, "address": address });
            let response = ctx.client().post(FORWARDERS_PATH, &body).await?;
            super::render_one::<ForwarderPresenter>(&response, &["Forwarder created"], renderer)
        }
        ForwarderCommands::Delete { id, yes } => {
            if !super::confirm(format!("Delete forwarder {}?", id), *yes)? {
                renderer.notice("Deletion cancelled")?;
                return Ok(());
            }
            let response = ctx
                .client()
                .delete(&format!("{}/{}", FORWARDERS_PATH, id))
                .await?;
            parse_response(&response)?;
            renderer.notice(&format!("Deleted forwarder {}", id))?;
            Ok(())
        }
    }
}
