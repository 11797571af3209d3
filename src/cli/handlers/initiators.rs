use crate::cli::parse::InitiatorCommands;
use crate::cli::RunContext;
use crate::client::parse_response;
use crate::error::ApiError;
use crate::presenters::{ExternalInitiatorAuthentication, ExternalInitiatorPresenter};
use crate::render::Renderer;
use serde_json::json;

pub(crate) async fn handle(
    ctx: &RunContext,
    command: &InitiatorCommands,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    match command {
        InitiatorCommands::List { page } => {
            let path = ctx.page_path("/v2/external_initiators", *page);
            super::list::<ExternalInitiatorPresenter>(ctx, &path, renderer).await
        }
        InitiatorCommands::Create { name, url } => {
            let body = json!({ "name": name, "url": url });
            let response = ctx.client().post("/v2/external_initiators", &body).await?;
            super::render_resource::<ExternalInitiatorAuthentication>(&response, &[], renderer)
        }
        InitiatorCommands::Destroy { name, yes } => {
            if !super::confirm(format!("Delete external initiator {}?", name), *yes)? {
                renderer.notice("Deletion cancelled")?;
                return Ok(());
            }
            let response = ctx
                .client()
                .delete(&format!("/v2/external_initiators/{}", name))
                .await?;
            parse_response(&response)?;
            renderer.notice(&format!("Deleted external initiator {}", name))?;
            Ok(())
        }
    }
}
