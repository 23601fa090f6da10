use contracts::domain::tickets::drafts::{ResponseDraft, TicketDraft, ATTACHMENTS_FIELD, SUPPORTING_DOCS_FIELD};
use contracts::domain::tickets::{StatusUpdate, Ticket, TicketEnvelope, TicketPage, TicketResponse, TicketStatus};
use contracts::shared::list_payload::ListPayload;
use contracts::shared::paging::PageQuery;
use web_sys::File;

use crate::shared::api_utils::{multipart, ApiClient, ApiError};

pub async fn fetch_page(client: &ApiClient, query: PageQuery) -> Result<TicketPage, ApiError> {
    client.get_with_query("/tickets", &query).await
}

pub async fn fetch_ticket(client: &ApiClient, id: &str) -> Result<Ticket, ApiError> {
    let envelope: TicketEnvelope = client.get(&format!("/tickets/{}", urlencoding::encode(id))).await?;
    envelope.into_ticket().ok_or(ApiError::Status {
        status: 404,
        message: "Ticket not found".to_string(),
    })
}

/// Moves the ticket to the status its close action leads to and returns it.
/// Already completed tickets are left alone.
pub async fn close_ticket(client: &ApiClient, id: &str, current: TicketStatus) -> Result<TicketStatus, ApiError> {
    let Some(next) = current.close() else {
        return Ok(current);
    };
    client
        .put_json(&format!("/tickets/{}/status", urlencoding::encode(id)), &StatusUpdate { status: next })
        .await?;
    log::info!("ticket {} moved to {}", id, next.as_str());
    Ok(next)
}

pub async fn fetch_responses(client: &ApiClient, id: &str) -> Result<Vec<TicketResponse>, ApiError> {
    let payload: ListPayload<TicketResponse> = client
        .get(&format!("/tickets/{}/responses", urlencoding::encode(id)))
        .await?;
    Ok(payload.into_vec())
}

pub async fn submit_response(
    client: &ApiClient,
    id: &str,
    draft: &ResponseDraft,
    attachments: &[File],
) -> Result<(), ApiError> {
    draft.validate()?;
    let form = multipart(&draft.form_fields(), ATTACHMENTS_FIELD, attachments)?;
    client
        .post_form(&format!("/tickets/{}/responses", urlencoding::encode(id)), form)
        .await
}

pub async fn create_ticket<D: TicketDraft>(client: &ApiClient, draft: &D, docs: &[File]) -> Result<(), ApiError> {
    draft.validate()?;
    let form = multipart(&draft.form_fields(), SUPPORTING_DOCS_FIELD, docs)?;
    client.post_form(&format!("/tickets/{}", D::TICKET_TYPE.as_str()), form).await?;
    log::info!("created {} ticket", D::TICKET_TYPE.as_str());
    Ok(())
}
