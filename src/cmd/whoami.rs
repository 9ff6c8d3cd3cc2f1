use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::services::TicketSource as _;

/// Verifies the stored credentials by asking Zammad who they belong to.
pub async fn run(ctx: &AppContext) -> AppResult<()> {
    if !ctx.settings.is_configured() {
        return Err(AppError::NotConfigured);
    }

    let source = (ctx.tickets)(&ctx.settings.credentials())?;
    let user = source.fetch_current_user().await?;
    println!("{user}");
    Ok(())
}
