//! Action handlers: UpdateAction dispatch and background fetch tasks

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use launchpad_chain::LaunchpadData;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::page::{AllowanceOutcome, FetchRequest};

/// Execute an action by spawning background tasks
///
/// Every fetch runs in its own task so the sources resolve independently and
/// in any order. Results come back as messages on `msg_tx`.
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, source: Arc<S>)
where
    S: LaunchpadData + Send + Sync + 'static,
{
    match action {
        UpdateAction::Fetch(requests) => {
            for request in requests {
                let tx = msg_tx.clone();
                let source = source.clone();
                tokio::spawn(async move {
                    let kind = request.source();
                    let msg = fetch(source.as_ref(), request).await;
                    if tx.send(msg).await.is_err() {
                        debug!("Message channel closed before {} response", kind);
                    }
                });
            }
        }
    }
}

/// Run a single request against `source` and wrap the result as a message
pub async fn fetch<S: LaunchpadData>(source: &S, request: FetchRequest) -> Message {
    match request {
        FetchRequest::Allowance {
            tag,
            account_id,
            listing_id,
        } => {
            let result = source.investor_allowance(&account_id, &listing_id).await;
            Message::AllowanceFetched {
                tag,
                outcome: AllowanceOutcome::from_result(result),
            }
        }

        FetchRequest::Project {
            tag,
            account_id,
            project_id,
        } => {
            let result = source.project(account_id.as_ref(), &project_id).await;
            Message::ProjectFetched {
                tag,
                result: result.map_err(|e| e.to_string()),
            }
        }

        FetchRequest::InvestorAllocation {
            tag,
            account_id,
            listing_id,
        } => {
            let result = source.investor_allocation(&account_id, &listing_id).await;
            Message::AllocationFetched {
                tag,
                result: result.map_err(|e| e.to_string()),
            }
        }

        FetchRequest::VestedAllocations {
            tag,
            account_id,
            listing_id,
        } => {
            let result = source.vested_allocations(&account_id, &listing_id).await;
            Message::VestedAllocationsFetched {
                tag,
                result: result.map_err(|e| e.to_string()),
            }
        }

        FetchRequest::PriceTokenBalance {
            tag,
            token,
            account_id,
        } => {
            let result = source.token_balance(&token, &account_id).await;
            Message::PriceTokenBalanceFetched {
                tag,
                result: result.map_err(|e| e.to_string()),
            }
        }
    }
}
