use super::{
    entity::{TicketContentUpdateEntity, TicketFindEntity, TicketInsertEntity},
    AirlineSnapshot, FlightInfo, FloatingTicket, Passenger, SourceType, TicketQuery, TicketSort,
    TicketsRepository,
};
use crate::repository::Error;
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{
    error::ErrorKind,
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

const FLOATING_TICKETS: &str = "floatingtickets";
const INDEX_NAME_CREATED_AT: &str = "index_created_at";
const INDEX_NAME_FLIGHT_DATE: &str = "index_flight_info_date";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == FLOATING_TICKETS) {
            tracing::debug!(collection = FLOATING_TICKETS, "creating collection");
            database.create_collection(FLOATING_TICKETS).await?;
        }

        let collection = database.collection::<Document>(FLOATING_TICKETS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.iter().any(|name| name == INDEX_NAME_CREATED_AT) {
            Self::create_index(&collection, INDEX_NAME_CREATED_AT, doc! { "createdAt": -1 })
                .await?;
        }
        if !index_names.iter().any(|name| name == INDEX_NAME_FLIGHT_DATE) {
            Self::create_index(
                &collection,
                INDEX_NAME_FLIGHT_DATE,
                doc! { "flightInfo.date": 1, "flightInfo.origin": 1 },
            )
            .await?;
        }

        Ok(Self { database })
    }

    async fn create_index(
        collection: &Collection<Document>,
        name: &'static str,
        keys: Document,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().name(name.to_string()).build())
            .build();

        collection.create_index(index).await?;
        tracing::debug!(collection = FLOATING_TICKETS, index = name, "created index");

        Ok(())
    }

    fn collection(&self) -> Collection<TicketFindEntity> {
        self.database.collection(FLOATING_TICKETS)
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(
        &self,
        passengers: Vec<Passenger>,
        flight_info: FlightInfo,
        airline: AirlineSnapshot,
        source_type: SourceType,
        created_by: Uuid,
        created_at: OffsetDateTime,
    ) -> Result<FloatingTicket, Error> {
        let insert_entity = TicketInsertEntity {
            passengers: &passengers,
            flight_info: &flight_info,
            airline: &airline,
            source_type,
            pdf_path: None,
            created_by: created_by.into(),
            created_at: created_at.into(),
            updated_at: created_at.into(),
        };

        let insert_result = self
            .database
            .collection::<TicketInsertEntity>(FLOATING_TICKETS)
            .insert_one(insert_entity)
            .await?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ));
        };

        Ok(FloatingTicket {
            id,
            passengers,
            flight_info,
            airline,
            source_type,
            pdf_path: None,
            created_by,
            created_at,
            updated_at: created_at,
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<FloatingTicket>, Error> {
        let ticket = self
            .collection()
            .find_one(doc! { "_id": id })
            .await?
            .map(FloatingTicket::from);

        Ok(ticket)
    }

    async fn find_many(&self, query: TicketQuery) -> Result<(Vec<FloatingTicket>, u64), Error> {
        let filter = filter_document(&query);
        let skip = u64::from(query.page.saturating_sub(1)) * u64::from(query.limit);

        let total = self.collection().count_documents(filter.clone()).await?;

        let tickets = self
            .collection()
            .find(filter)
            .sort(sort_document(query.sort))
            .skip(skip)
            .limit(i64::from(query.limit))
            .await?
            .map_ok(FloatingTicket::from)
            .try_collect()
            .await?;

        Ok((tickets, total))
    }

    async fn update_content(
        &self,
        id: ObjectId,
        passengers: Vec<Passenger>,
        flight_info: FlightInfo,
        source_type: Option<SourceType>,
        updated_at: OffsetDateTime,
    ) -> Result<FloatingTicket, Error> {
        let update_entity = TicketContentUpdateEntity {
            passengers: &passengers,
            flight_info: &flight_info,
            source_type,
            updated_at: updated_at.into(),
        };
        let set = bson::to_document(&update_entity)?;

        self.collection()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?
            .map(FloatingTicket::from)
            .ok_or(Error::NoDocumentUpdated)
    }

    async fn update_pdf_path(
        &self,
        id: ObjectId,
        pdf_path: String,
        updated_at: OffsetDateTime,
    ) -> Result<FloatingTicket, Error> {
        self.collection()
            .find_one_and_update(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "pdfPath": pdf_path,
                        "updatedAt": DateTime::from(updated_at),
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await?
            .map(FloatingTicket::from)
            .ok_or(Error::NoDocumentUpdated)
    }

    async fn delete(&self, id: ObjectId) -> Result<FloatingTicket, Error> {
        self.collection()
            .find_one_and_delete(doc! { "_id": id })
            .await?
            .map(FloatingTicket::from)
            .ok_or(Error::NoDocumentDeleted)
    }
}

///
/// Builds filter where every provided query field becomes
/// one condition of `$and`. Empty query matches every ticket.
///
fn filter_document(query: &TicketQuery) -> Document {
    let mut conditions = Vec::new();

    let exact_matches = [
        ("flightInfo.origin", &query.origin),
        ("flightInfo.destination", &query.destination),
        ("flightInfo.date", &query.date),
        ("flightInfo.flightNumber", &query.flight_number),
        ("passengers.documentNumber", &query.document_number),
    ];
    for (field, value) in exact_matches {
        if let Some(value) = value {
            let mut condition = Document::new();
            condition.insert(field, value);
            conditions.push(condition);
        }
    }

    let mut date_range = Document::new();
    if let Some(date_from) = &query.date_from {
        date_range.insert("$gte", date_from);
    }
    if let Some(date_to) = &query.date_to {
        date_range.insert("$lte", date_to);
    }
    if !date_range.is_empty() {
        conditions.push(doc! { "flightInfo.date": date_range });
    }

    if let Some(airline) = &query.airline {
        let pattern = contains_ignore_case(airline);
        conditions.push(doc! {
            "$or": [
                { "flightInfo.airline": pattern.clone() },
                { "airline.name": pattern.clone() },
                { "airline.englishName": pattern },
            ]
        });
    }

    if let Some(passenger_name) = &query.passenger_name {
        // every word has to match first or last name of the same passenger
        let words = passenger_name
            .split_whitespace()
            .map(|word| {
                let pattern = contains_ignore_case(word);
                doc! {
                    "$or": [
                        { "englishFirstName": pattern.clone() },
                        { "englishLastName": pattern },
                    ]
                }
            })
            .collect::<Vec<_>>();
        if !words.is_empty() {
            conditions.push(doc! {
                "passengers": { "$elemMatch": { "$and": words } }
            });
        }
    }

    match conditions.is_empty() {
        true => Document::new(),
        false => doc! { "$and": conditions },
    }
}

fn contains_ignore_case(value: &str) -> Document {
    doc! {
        "$regex": regex::escape(value),
        "$options": "i",
    }
}

fn sort_document(sort: TicketSort) -> Document {
    match sort {
        TicketSort::CreatedAtAsc => doc! { "createdAt": 1, "_id": 1 },
        TicketSort::CreatedAtDesc => doc! { "createdAt": -1, "_id": -1 },
        TicketSort::FlightDateAsc => doc! { "flightInfo.date": 1, "_id": 1 },
        TicketSort::FlightDateDesc => doc! { "flightInfo.date": -1, "_id": -1 },
    }
}
