use crate::cli::MoveArgs;
use crate::context::CliContext;
use crate::output;
use corkboard_domain::{DropPointer, DropRect, Reconciler};

pub async fn handle(ctx: &mut CliContext, args: MoveArgs) -> anyhow::Result<()> {
    let pointer = match (args.pointer_y, args.rect_top, args.rect_height) {
        (Some(y), Some(top), Some(height)) => Some(DropPointer {
            y,
            over_rect: DropRect { top, height },
        }),
        _ => None,
    };

    let mut reconciler = Reconciler::new();
    reconciler.begin_drag(&ctx.board, &args.active);
    ctx.board = reconciler.end_drag(&ctx.board, &args.active, args.onto.as_deref(), pointer);
    ctx.save().await?;
    output::output_success(&ctx.board);
    Ok(())
}
