use crate::cli::parse::{AttemptCommands, EvmTxCommands, TransferCommands, TxCommands};
use crate::cli::RunContext;
use crate::error::ApiError;
use crate::presenters::{EthTxPresenter, MsgPresenter};
use crate::render::Renderer;
use serde_json::json;

pub(crate) async fn handle(
    ctx: &RunContext,
    command: &TxCommands,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    match command {
        TxCommands::Evm { command } => handle_evm(ctx, command, renderer).await,
        TxCommands::Solana { command } => {
            transfer(ctx, "solana", "solanaChainID", command, renderer).await
        }
        TxCommands::Cosmos { command } => {
            transfer(ctx, "cosmos", "cosmosChainID", command, renderer).await
        }
    }
}

async fn handle_evm(
    ctx: &RunContext,
    command: &EvmTxCommands,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    match command {
        EvmTxCommands::List { page } => {
            let path = ctx.page_path("/v2/transactions/evm", *page);
            super::list::<EthTxPresenter>(ctx, &path, renderer).await
        }
        EvmTxCommands::Show { hash } => {
            let path = format!("/v2/transactions/evm/{}", hash);
            super::show::<EthTxPresenter>(ctx, &path, renderer).await
        }
        EvmTxCommands::Create {
            amount,
            from,
            to,
            evm_chain_id,
            force,
        } => {
            let body = json!({
                "address": to,
                "from": from,
                "amount": amount,
                "evmChainID": evm_chain_id,
                "allowHigherAmounts": force,
            });
            let response = ctx.client().post("/v2/transfers/evm", &body).await?;
            super::render_one::<EthTxPresenter>(&response, &[], renderer)
        }
    }
}

async fn transfer(
    ctx: &RunContext,
    network: &str,
    chain_id_field: &str,
    command: &TransferCommands,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    let TransferCommands::Create {
        amount,
        from,
        to,
        chain_id,
        force,
    } = command;
    let mut body = json!({
        "from": from,
        "to": to,
        "amount": amount,
        "allowHigherAmounts": force,
    });
    body[chain_id_field] = json!(chain_id);
    let response = ctx
        .client()
        .post(&format!("/v2/transfers/{}", network), &body)
        .await?;
    super::render_one::<MsgPresenter>(&response, &[], renderer)
}

pub(crate) async fn handle_attempts(
    ctx: &RunContext,
    command: &AttemptCommands,
    renderer: &mut dyn Renderer,
) -> Result<(), ApiError> {
    match command {
        AttemptCommands::List { page } => {
            let path = ctx.page_path("/v2/tx_attempts/evm", *page);
            super::list::<EthTxPresenter>(ctx, &path, renderer).await
        }
    }
}
