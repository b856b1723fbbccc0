use crate::cli::TaskAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &mut CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Add { column } => match ctx.board.add_task(&column) {
            Some(id) => {
                ctx.save().await?;
                let task = ctx.board.column(&column).and_then(|c| c.task(&id));
                output::output_success(task);
            }
            None => output::output_error(&format!("Column not found: {column}")),
        },
        TaskAction::Delete { column, ids } => {
            ctx.board.delete_tasks(&column, &ids);
            ctx.save().await?;
            output::output_success(serde_json::json!({ "column": column, "deleted": ids }));
        }
        TaskAction::Rename { column, id, title } => {
            ctx.board.rename_task(&column, &id, title);
            ctx.board.set_task_editing(&column, &id, false);
            ctx.save().await?;
            let task = ctx.board.column(&column).and_then(|c| c.task(&id));
            output::output_success(task);
        }
        TaskAction::Recolor { column, id, bg } => {
            ctx.board.recolor_task(&column, &id, bg);
            ctx.save().await?;
            let task = ctx.board.column(&column).and_then(|c| c.task(&id));
            output::output_success(task);
        }
    }
    Ok(())
}
