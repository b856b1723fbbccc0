use crate::cli::ColumnAction;
use crate::context::CliContext;
use crate::output;
use corkboard_domain::Hsva;

pub async fn handle(ctx: &mut CliContext, action: ColumnAction) -> anyhow::Result<()> {
    match action {
        ColumnAction::Add { title } => {
            let id = ctx.board.add_column(title);
            ctx.save().await?;
            output::output_success(ctx.board.column(&id));
        }
        ColumnAction::Remove { id } => {
            ctx.board.remove_column(&id);
            ctx.save().await?;
            output::output_success(serde_json::json!({ "removed": id }));
        }
        ColumnAction::Rename { id, title } => {
            ctx.board.rename_column(&id, title);
            ctx.save().await?;
            output::output_success(ctx.board.column(&id));
        }
        ColumnAction::Recolor { id, bg, h, s, v, a } => {
            let hsva = match (h, s, v, a) {
                (Some(h), Some(s), Some(v), Some(a)) => Some(Hsva { h, s, v, a }),
                _ => None,
            };
            ctx.board.recolor_column(&id, bg, hsva);
            ctx.save().await?;
            output::output_success(ctx.board.column(&id));
        }
    }
    Ok(())
}
