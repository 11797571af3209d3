use crate::cli::parse::BridgeCommands;
use crate::cli::RunContext;
use crate::client::parse_response;
use crate::error::ApiError;
use crate::presenters::{BridgeCreatedPresenter, BridgePresenter};
use crate::render::Renderer;
use serde_json::json;

pub(crate) async fn handle(
    ctx: &RunContext,
    command: &BridgeCommands,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    match command {
        BridgeCommands::List { page } => {
            let path = ctx.page_path("/v2/bridge_types", *page);
            super::list::<BridgePresenter>(ctx, &path, renderer).await
        }
        BridgeCommands::Show { name } => {
            let path = format!("/v2/bridge_types/{}", name);
            super::show::<BridgePresenter>(ctx, &path, renderer).await
        }
        BridgeCommands::Create {
            name,
            url,
            confirmations,
            minimum_contract_payment,
        } => {
            let body = json!({
                "name": name,
                "url": url,
                "confirmations": confirmations,
                "minimumContractPayment": minimum_contract_payment,
            });
            let response = ctx.client().post("/v2/bridge_types", &body).await?;
            super::render_one::<BridgeCreatedPresenter>(&response, &[], renderer)
        }
        BridgeCommands::Destroy { name, yes } => {
            if !super::confirm(format!("Delete bridge {}?", name), *yes)? {
                renderer.notice("Deletion cancelled")?;
                return Ok(());
            }
            let response = ctx
                .client()
                .delete(&format!("/v2/bridge_types/{}", name))
                .await?;
            parse_response(&response)?;
            renderer.notice(&format!("Deleted bridge {}", name))?;
            Ok(())
        }
    }
}
