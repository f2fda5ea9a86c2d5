use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::Role,
    dto::{input, output},
    error::Error,
    service::tickets_service::TicketsService,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use bson::oid::ObjectId;
use jwt_auth::{require_all_roles, User};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/floating-ticket/generate", post(generate_ticket))
        .route("/floating-ticket/history", get(get_tickets))
        .route(
            "/floating-ticket/history/:id",
            get(get_ticket).put(put_ticket).delete(delete_ticket),
        )
        .route("/floating-ticket/regenerate/:id", post(regenerate_ticket))
        .route_layer(application_middleware.auth.clone())
}

fn require_manage_role(user: &User) -> Result<(), Error> {
    require_all_roles(user, &[Role::ManageFloatingTickets.as_ref()])?;

    Ok(())
}

/// Malformed id can not resolve to any ticket
fn parse_ticket_id(id: &str) -> Result<ObjectId, Error> {
    ObjectId::parse_str(id).map_err(|_| Error::TicketNotExist)
}

async fn generate_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Json(ticket): Json<input::TicketGenerate>,
) -> Result<(StatusCode, Json<output::FloatingTicket>), Error> {
    require_manage_role(&user)?;

    let ticket = tickets_service.generate_ticket(user.id, ticket).await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

async fn get_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Query(filters): Query<input::TicketFilters>,
) -> Result<Json<output::TicketsPage>, Error> {
    require_manage_role(&user)?;

    let page = tickets_service.find_tickets(filters).await?;

    Ok(Json(page))
}

async fn get_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<Json<output::FloatingTicket>, Error> {
    require_manage_role(&user)?;
    let id = parse_ticket_id(&id)?;

    let ticket = tickets_service.find_ticket(id).await?;

    Ok(Json(ticket))
}

async fn put_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(update): Json<input::TicketUpdate>,
) -> Result<Json<output::FloatingTicket>, Error> {
    require_manage_role(&user)?;
    let id = parse_ticket_id(&id)?;

    let ticket = tickets_service.update_ticket(id, update).await?;

    Ok(Json(ticket))
}

async fn delete_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    require_manage_role(&user)?;
    let id = parse_ticket_id(&id)?;

    tickets_service.delete_ticket(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn regenerate_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<Json<output::FloatingTicket>, Error> {
    require_manage_role(&user)?;
    let id = parse_ticket_id(&id)?;

    let ticket = tickets_service.regenerate_ticket(id).await?;

    Ok(Json(ticket))
}
