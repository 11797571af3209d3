use crate::cli::parse::{KeyCommands, KeyKind};
use crate::cli::RunContext;
use crate::client::{parse_response, Method};
use crate::error::ApiError;
use crate::presenters::{
    CosmosKeyPresenter, CsaKeyPresenter, EthKeyPresenter, Ocr2KeyBundlePresenter,
    OcrKeyBundlePresenter, P2PKeyPresenter, SolanaKeyPresenter, VrfKeyPresenter,
};
use crate::render::Renderer;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Pick the presenter type for a key kind and call `super::$render::<Presenter>($args)`.
macro_rules! for_key_kind {
    ($kind:expr, $render:ident, $($arg:expr),*) => {
        match $kind {
            KeyKind::Eth => super::$render::<EthKeyPresenter>($($arg),*),
            KeyKind::Csa => super::$render::<CsaKeyPresenter>($($arg),*),
            KeyKind::Ocr => super::$render::<OcrKeyBundlePresenter>($($arg),*),
            KeyKind::Ocr2 => super::$render::<Ocr2KeyBundlePresenter>($($arg),*),
            KeyKind::P2p => super::$render::<P2PKeyPresenter>($($arg),*),
            KeyKind::Vrf => super::$render::<VrfKeyPresenter>($($arg),*),
            KeyKind::Solana => super::$render::<SolanaKeyPresenter>($($arg),*),
            KeyKind::Cosmos => super::$render::<CosmosKeyPresenter>($($arg),*),
        }
    };
}

pub(crate) async fn handle(
    ctx: &RunContext,
    command: &KeyCommands,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    match command {
        KeyCommands::List { kind } => {
            let response = ctx.client().get(&keys_path(*kind)).await?;
            for_key_kind!(kind, render_many, &response, &[], renderer)
        }
        KeyCommands::Create {
            kind,
            evm_chain_id,
            chain_type,
        } => {
            let path = create_path(*kind, evm_chain_id.as_deref(), chain_type.as_deref())?;
            let response = ctx.client().request(Method::Post, &path, None).await?;
            let header = format!("🔑 Created {} key", kind.label());
            for_key_kind!(kind, render_one, &response, &[header.as_str()], renderer)
        }
        KeyCommands::Delete { kind, id, yes } => {
            let prompt = format!("Delete {} key {}?", kind.label(), id);
            if !super::confirm(prompt, *yes)? {
                renderer.notice("Deletion cancelled")?;
                return Ok(());
            }
            let path = format!("{}/{}", keys_path(*kind), id);
            let response = ctx.client().delete(&path).await?;
            let header = format!("🔑 Deleted {} key", kind.label());
            for_key_kind!(kind, render_one, &response, &[header.as_str()], renderer)
        }
        KeyCommands::Import {
            kind,
            file,
            old_password_file,
            evm_chain_id,
        } => {
            let key = read_key_file(file)?;
            let password = super::read_password_file(old_password_file)?;
            let mut query = vec![("oldpassword", password.as_str())];
            if let (KeyKind::Eth, Some(chain_id)) = (kind, evm_chain_id.as_deref()) {
                query.push(("evmChainID", chain_id));
            }
            let path = super::with_query(&format!("{}/import", keys_path(*kind)), &query);
            let response = ctx.client().post(&path, &key).await?;
            let header = format!("🔑 Imported {} key", kind.label());
            for_key_kind!(kind, render_one, &response, &[header.as_str()], renderer)
        }
        KeyCommands::Export {
            kind,
            id,
            new_password_file,
            output,
        } => {
            let password = super::read_password_file(new_password_file)?;
            let path = super::with_query(
                &format!("{}/export/{}", keys_path(*kind), id),
                &[("newpassword", password.as_str())],
            );
            let response = ctx.client().request(Method::Post, &path, None).await?;
            let body = parse_response(&response)?;
            write_key_file(output, body)?;
            info!(kind = kind.label(), %id, output = %output.display(), "key exported");
            renderer.notice(&format!(
                "🔑 Exported {} key {} to {}",
                kind.label(),
                id,
                output.display()
            ))?;
            Ok(())
        }
    }
}

fn read_key_file(path: &Path) -> Result<Value, ApiError> {
    let contents = std::fs::read(path).map_err(|e| {
        ApiError::InvalidArgument(format!("failed to read key file {}: {}", path.display(), e))
    })?;
    serde_json::from_slice(&contents).map_err(|e| {
        ApiError::InvalidArgument(format!(
            "key file {} is not valid JSON: {}",
            path.display(),
            e
        ))
    })
}

/// Write an exported key readable by the owner only. An existing file is replaced.
fn write_key_file(path: &Path, contents: &[u8]) -> Result<(), ApiError> {
    let mut options = std::fs::OpenOptions::new();
    options.create(true).write(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    std::io::Write::write_all(&mut file, contents)?;
    Ok(())
}

fn keys_path(kind: KeyKind) -> String {
    format!("/v2/keys/{}", kind.path_segment())
}

fn create_path(
    kind: KeyKind,
    evm_chain_id: Option<&str>,
    chain_type: Option<&str>,
) -> Result<String, ApiError> {
    let base = keys_path(kind);
    match kind {
        KeyKind::Eth => Ok(match evm_chain_id {
            Some(chain_id) => super::with_query(&base, &[("evmChainID", chain_id)]),
            None => base,
        }),
        KeyKind::Ocr2 => {
            let chain_type = chain_type.ok_or_else(|| {
                ApiError::InvalidArgument(
                    "--chain-type is required for OCR2 key bundles".to_string(),
                )
            })?;
            Ok(format!("{}/{}", base, chain_type))
        }
        _ => Ok(base),
    }
}
