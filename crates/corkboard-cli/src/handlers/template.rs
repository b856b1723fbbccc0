use crate::cli::TemplateAction;
use crate::context::CliContext;
use crate::output;
use corkboard_core::AppConfig;
use corkboard_template::TemplateClient;
use tokio_util::sync::CancellationToken;

pub async fn handle(ctx: &mut CliContext, action: TemplateAction) -> anyhow::Result<()> {
    match action {
        TemplateAction::Generate {
            instruction,
            endpoint,
        } => {
            let client = match endpoint {
                Some(endpoint) => Some(TemplateClient::new(endpoint)),
                None => TemplateClient::from_config(&AppConfig::load()),
            };
            let Some(client) = client else {
                output::output_error("template endpoint not configured");
            };

            // Ctrl-C abandons the poll loop instead of killing us mid-save.
            let cancel = CancellationToken::new();
            let signal_cancel = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    signal_cancel.cancel();
                }
            });

            match client.generate(&instruction, &cancel).await {
                Ok(board) => {
                    ctx.board = board;
                    ctx.save().await?;
                    output::output_success(&ctx.board);
                }
                Err(e) => output::output_error(&e.to_string()),
            }
        }
    }
    Ok(())
}
