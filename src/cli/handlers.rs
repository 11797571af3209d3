//! Command handlers: one request/response cycle per command, then a render.

pub(crate) mod admin;
pub(crate) mod bridges;
pub(crate) mod chains;
pub(crate) mod forwarders;
pub(crate) mod initiators;
pub(crate) mod jobs;
pub(crate) mod keys;
pub(crate) mod node;
pub(crate) mod txs;

use crate::cli::RunContext;
use crate::client::{decode_many, decode_one, parse_response, ApiResponse};
use crate::error::ApiError;
use crate::render::{Listing, Presenter, Renderable, Renderer};
use serde::de::DeserializeOwned;
use std::path::Path;

/// GET a page of resources and render them as one listing.
pub(crate) async fn list<T>(
    ctx: &RunContext,
    path: &str,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError>
where
    T: Presenter + DeserializeOwned,
{
    let response = ctx.client().get(path).await?;
    render_many::<T>(&response, &[], renderer)
}

/// GET a single resource and render it.
pub(crate) async fn show<T>(
    ctx: &RunContext,
    path: &str,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError>
where
    T: Presenter + DeserializeOwned,
{
    let response = ctx.client().get(path).await?;
    render_one::<T>(&response, &[], renderer)
}

pub(crate) fn render_many<T>(
    response: &ApiResponse,
    headers: &[&str],
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError>
where
    T: Presenter + DeserializeOwned,
{
    let items: Vec<T> = decode_many(parse_response(response)?)?;
    renderer.render(&Listing::many(items), headers)?;
    Ok(())
}

pub(crate) fn render_one<T>(
    response: &ApiResponse,
    headers: &[&str],
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError>
where
    T: Presenter + DeserializeOwned,
{
    let item: T = decode_one(parse_response(response)?)?;
    renderer.render(&Listing::one(item), headers)?;
    Ok(())
}

/// Render a resource that carries its own layout rather than a table declaration.
pub(crate) fn render_resource<T>(
    response: &ApiResponse,
    headers: &[&str],
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError>
where
    T: Renderable + DeserializeOwned,
{
    let item: T = decode_one(parse_response(response)?)?;
    renderer.render(&item, headers)?;
    Ok(())
}

/// Append percent-encoded query parameters to `path`.
pub(crate) fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        query.append_pair(name, value);
    }
    format!("{}?{}", path, query.finish())
}

/// First non-empty line of a password file, trimmed.
pub(crate) fn read_password_file(path: &Path) -> Result<String, ApiError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ApiError::InvalidArgument(format!(
            "failed to read password file {}: {}",
            path.display(),
            e
        ))
    })?;
    contents
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            ApiError::InvalidArgument(format!("password file {} is empty", path.display()))
        })
}

/// Ask before a destructive call unless `--yes` was given.
pub(crate) fn confirm(prompt: String, yes: bool) -> Result<bool, ApiError> {
    if yes {
        return Ok(true);
    }
    Ok(dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
