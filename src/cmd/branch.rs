use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::branch::run_branch_workflow;
use crate::workflow::machine::Outcome;

pub async fn run(ctx: &mut AppContext) -> AppResult<Outcome> {
    run_branch_workflow(ctx).await
}
