use crate::cli::WorkspaceAction;
use crate::context::CliContext;
use crate::output;
use corkboard_persistence::WorkspaceStore;

pub async fn handle(ctx: &mut CliContext, action: WorkspaceAction) -> anyhow::Result<()> {
    match action {
        WorkspaceAction::Save { name } => {
            ctx.gateway().save(&name, &ctx.board).await?;
            ctx.index().add(&name).await?;
            output::output_success(serde_json::json!({ "saved": name }));
        }
        WorkspaceAction::Load { name } => match ctx.gateway().load(&name).await? {
            Some(board) => {
                ctx.board = board;
                ctx.save().await?;
                output::output_success(&ctx.board);
            }
            None => output::output_error(&format!("Workspace not found: {name}")),
        },
        WorkspaceAction::List => {
            let names = ctx.gateway().list().await?;
            output::output_list(names);
        }
        WorkspaceAction::Delete { name } => {
            ctx.gateway().delete(&name).await?;
            ctx.index().remove(&name).await?;
            output::output_success(serde_json::json!({ "deleted": name }));
        }
    }
    Ok(())
}
