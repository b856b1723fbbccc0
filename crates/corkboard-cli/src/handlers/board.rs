use crate::cli::{BoardAction, ImportArgs};
use crate::context::CliContext;
use crate::output;
use corkboard_domain::{default_board, Board};

pub async fn handle(ctx: &mut CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::Show => {
            output::output_success(&ctx.board);
        }
        BoardAction::Init => {
            ctx.board = default_board();
            ctx.save().await?;
            output::output_success(&ctx.board);
        }
    }
    Ok(())
}

pub async fn handle_import(ctx: &mut CliContext, args: ImportArgs) -> anyhow::Result<()> {
    // Parse failures report a field-level message; the working board stays
    // as it was.
    match Board::from_json_str(&args.json) {
        Ok(board) => {
            ctx.board = board;
            ctx.save().await?;
            output::output_success(&ctx.board);
            Ok(())
        }
        Err(e) => output::output_error(&e.to_string()),
    }
}
