use crate::cli::parse::{AdminCommands, LogCommands};
use crate::cli::RunContext;
use crate::client::{parse_response, SessionRequest};
use crate::error::ApiError;
use crate::presenters::LogLevelsPresenter;
use crate::render::Renderer;
use dialoguer::{Input, Password};
use serde_json::json;
use std::path::Path;
use tracing::info;

pub(crate) async fn handle(
    ctx: &RunContext,
    command: &AdminCommands,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    match command {
        AdminCommands::Login { file } => login(ctx, file.as_deref(), renderer).await,
        AdminCommands::Logout => logout(ctx, renderer).await,
        AdminCommands::Chpass {
            old_password_file,
            new_password_file,
        } => {
            change_password(
                ctx,
                old_password_file.as_deref(),
                new_password_file.as_deref(),
                renderer,
            )
            .await
        }
        AdminCommands::Logs { command } => match command {
            LogCommands::Get => {
                let response = ctx.client().get("/v2/log").await?;
                super::render_resource::<LogLevelsPresenter>(&response, &[], renderer)
            }
            LogCommands::SetLevel { level } => {
                let response = ctx
                    .client()
                    .patch("/v2/log", &json!({ "level": level }))
                    .await?;
                super::render_resource::<LogLevelsPresenter>(&response, &[], renderer)
            }
        },
    }
}

async fn login(
    ctx: &RunContext,
    file: Option<&Path>,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    let session = match file.or(ctx.credentials_file()) {
        Some(path) => SessionRequest::from_file(path)?,
        None => prompt_credentials()?,
    };
    ctx.authenticator().authenticate(&session).await?;
    info!(email = %session.email, "logged in");
    renderer.notice("Successfully logged in")?;
    Ok(())
}

fn prompt_credentials() -> Result<SessionRequest, ApiError> {
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;
    Ok(SessionRequest { email, password })
}

async fn logout(ctx: &RunContext, renderer: &mut dyn Renderer) -> Result<(), ApiError> {
    let response = ctx.client().delete("/sessions").await;
    ctx.authenticator().logout()?;
    parse_response(&response?)?;
    renderer.notice("Logged out")?;
    Ok(())
}

async fn change_password(
    ctx: &RunContext,
    old_password_file: Option<&Path>,
    new_password_file: Option<&Path>,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    let old_password = match old_password_file {
        Some(path) => super::read_password_file(path)?,
        None => Password::new().with_prompt("Old password").interact()?,
    };
    let new_password = match new_password_file {
        Some(path) => super::read_password_file(path)?,
        None => Password::new()
            .with_prompt("New password")
            .with_confirmation("Confirm new password", "Passwords do not match")
            .interact()?,
    };

    let body = json!({ "oldPassword": old_password, "newPassword": new_password });
    let response = ctx.client().patch("/v2/user/password", &body).await?;
    if response.status == 409 {
        return Err(ApiError::InvalidArgument(
            "old password did not match".to_string(),
        ));
    }
    parse_response(&response)?;
    info!("password changed");
    renderer.notice("Password updated.")?;
    Ok(())
}
