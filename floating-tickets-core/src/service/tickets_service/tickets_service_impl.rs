use super::{tickets_validation, TicketsService, TicketsServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, FloatingTicket, TicketsRepository},
    service::document_generator_service::DocumentGeneratorService,
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    repository: Arc<dyn TicketsRepository>,
    document_generator: Arc<dyn DocumentGeneratorService>,
}

impl TicketsServiceImpl {
    pub fn new(
        config: TicketsServiceConfig,
        repository: Arc<dyn TicketsRepository>,
        document_generator: Arc<dyn DocumentGeneratorService>,
    ) -> Self {
        Self {
            config,
            repository,
            document_generator,
        }
    }

    fn map_not_exist(err: repository::Error) -> Error {
        match err {
            repository::Error::NoDocumentUpdated | repository::Error::NoDocumentDeleted => {
                Error::TicketNotExist
            }
            err => Error::Database(err),
        }
    }

    async fn store_document(&self, ticket: &FloatingTicket) -> Result<FloatingTicket, Error> {
        let pdf_path = self.document_generator.generate(ticket).await?;
        tracing::info!(pdf_path, "generated document");

        self.repository
            .update_pdf_path(ticket.id, pdf_path, OffsetDateTime::now_utc())
            .await
            .map_err(Self::map_not_exist)
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn generate_ticket(
        &self,
        created_by: Uuid,
        ticket: input::TicketGenerate,
    ) -> Result<output::FloatingTicket, Error> {
        tracing::info!("generating ticket");
        tracing::trace!(?ticket);

        let input::TicketGenerate {
            passengers,
            flight_info,
            airline,
            source_type,
        } = ticket;
        let passengers = tickets_validation::validate_passengers(passengers)?;
        let flight_info = tickets_validation::validate_flight_info(flight_info)?;
        let airline = tickets_validation::validate_airline(airline)?;

        let inserted_ticket = self
            .repository
            .insert(
                passengers,
                flight_info,
                airline,
                source_type.unwrap_or_default(),
                created_by,
                OffsetDateTime::now_utc(),
            )
            .await?;

        let id = inserted_ticket.id.to_hex();
        tracing::info!(id, "created ticket");

        let ticket = match self.store_document(&inserted_ticket).await {
            Ok(ticket) => ticket,
            Err(Error::DocumentGenerator(err)) => {
                tracing::warn!(id, %err, "ticket stored without document");
                inserted_ticket
            }
            Err(err) => return Err(err),
        };

        Ok(ticket.into())
    }

    async fn find_tickets(
        &self,
        filters: input::TicketFilters,
    ) -> Result<output::TicketsPage, Error> {
        tracing::info!("finding tickets");
        tracing::trace!(?filters);

        let query = tickets_validation::validate_filters(&self.config, filters)?;
        let (page, limit) = (query.page, query.limit);

        let (tickets, total) = self.repository.find_many(query).await?;
        tracing::info!(count = tickets.len(), total, "found tickets");

        let tickets = tickets
            .into_iter()
            .map(output::FloatingTicket::from)
            .collect();

        Ok(output::TicketsPage {
            tickets,
            page,
            limit,
            total,
        })
    }

    async fn find_ticket(&self, id: ObjectId) -> Result<output::FloatingTicket, Error> {
        tracing::info!("finding ticket");

        let ticket = self
            .repository
            .find(id)
            .await?
            .ok_or(Error::TicketNotExist)?;

        tracing::info!("found ticket");

        Ok(ticket.into())
    }

    async fn update_ticket(
        &self,
        id: ObjectId,
        update: input::TicketUpdate,
    ) -> Result<output::FloatingTicket, Error> {
        tracing::info!("updating ticket");
        tracing::trace!(?update);

        let input::TicketUpdate {
            passengers,
            flight_info,
            source_type,
        } = update;
        let passengers = tickets_validation::validate_passengers(passengers)?;
        let flight_info = tickets_validation::validate_flight_info(flight_info)?;

        let ticket = self
            .repository
            .update_content(
                id,
                passengers,
                flight_info,
                source_type,
                OffsetDateTime::now_utc(),
            )
            .await
            .map_err(Self::map_not_exist)?;

        tracing::info!("updated ticket");

        Ok(ticket.into())
    }

    async fn regenerate_ticket(&self, id: ObjectId) -> Result<output::FloatingTicket, Error> {
        tracing::info!("regenerating ticket");

        let ticket = self
            .repository
            .find(id)
            .await?
            .ok_or(Error::TicketNotExist)?;
        let ticket = self.store_document(&ticket).await?;

        tracing::info!("regenerated ticket");

        Ok(ticket.into())
    }

    async fn delete_ticket(&self, id: ObjectId) -> Result<(), Error> {
        tracing::info!("deleting ticket");

        let deleted_ticket = self
            .repository
            .delete(id)
            .await
            .map_err(Self::map_not_exist)?;

        tracing::info!("deleted ticket");

        if let Some(pdf_path) = deleted_ticket.pdf_path {
            match self.document_generator.remove(&pdf_path).await {
                Ok(()) => tracing::info!(pdf_path, "removed document"),
                Err(err) => tracing::warn!(pdf_path, %err, "failed to remove document"),
            }
        }

        Ok(())
    }
}
