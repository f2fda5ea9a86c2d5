use super::{
    FloatingTicket, TicketFilters, TicketGenerate, TicketUpdate, TicketsClient,
    TicketsClientConfig, TicketsPage,
};
use crate::{credential::CredentialProvider, error::Error};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;

const TICKETS_PATH: [&str; 2] = ["floating-ticket", "history"];
const GENERATE_PATH: [&str; 2] = ["floating-ticket", "generate"];
const REGENERATE_PATH: [&str; 2] = ["floating-ticket", "regenerate"];

pub struct HttpTicketsClient {
    base_url: Url,
    client: Client,
    credential_provider: Arc<dyn CredentialProvider>,
}

impl HttpTicketsClient {
    pub fn new(
        config: TicketsClientConfig,
        credential_provider: Arc<dyn CredentialProvider>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: config.base_url,
            client,
            credential_provider,
        })
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, Error> {
        let Some(credential) = self.credential_provider.credential() else {
            tracing::warn!(?segments, "request not sent, no credential");
            return Err(Error::MissingCredential);
        };

        let request = self
            .client
            .request(method, self.url(segments)?)
            .bearer_auth(credential);

        Ok(request)
    }

    ///
    /// Every segment is percent-encoded so it can not leave its position in the path.
    ///
    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl)?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    ///
    /// Dot segments are dropped by url building, such id would address
    /// the parent resource instead of a ticket.
    ///
    fn ticket_segments<'a>(prefix: [&'a str; 2], id: &'a str) -> Result<[&'a str; 3], Error> {
        if matches!(id, "" | "." | "..") {
            tracing::warn!(id, "request not sent, id can not address a ticket");
            return Err(Error::NotFound);
        }

        Ok([prefix[0], prefix[1], id])
    }

    async fn send(request: RequestBuilder) -> Result<Response, Error> {
        let response = request.send().await.map_err(Error::Connectivity)?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::NOT_FOUND => Err(Error::NotFound),
            StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
            StatusCode::FORBIDDEN => Err(Error::Forbidden),
            StatusCode::UNPROCESSABLE_ENTITY | StatusCode::BAD_REQUEST => Err(Error::Validation),
            StatusCode::BAD_GATEWAY => Err(Error::Upstream),
            status => Err(Error::Rejected(status)),
        }
    }

    async fn json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, Error> {
        Self::send(request)
            .await?
            .json::<T>()
            .await
            .map_err(Error::Decode)
    }
}

#[async_trait]
impl TicketsClient for HttpTicketsClient {
    #[tracing::instrument(name = "Generate ticket", skip_all)]
    async fn generate_ticket(&self, ticket: &TicketGenerate) -> Result<FloatingTicket, Error> {
        let request = self
            .request(Method::POST, &GENERATE_PATH)?
            .json(ticket);

        Self::json(request).await
    }

    #[tracing::instrument(name = "Find tickets", skip_all)]
    async fn find_tickets(&self, filters: &TicketFilters) -> Result<TicketsPage, Error> {
        let request = self
            .request(Method::GET, &TICKETS_PATH)?
            .query(filters);

        Self::json(request).await
    }

    #[tracing::instrument(name = "Find ticket", skip(self))]
    async fn find_ticket(&self, id: &str) -> Result<FloatingTicket, Error> {
        let segments = Self::ticket_segments(TICKETS_PATH, id)?;
        let request = self.request(Method::GET, &segments)?;

        Self::json(request).await
    }

    #[tracing::instrument(name = "Update ticket", skip(self, update))]
    async fn update_ticket(
        &self,
        id: &str,
        update: &TicketUpdate,
    ) -> Result<FloatingTicket, Error> {
        let request = self
            .request(Method::PUT, &Self::ticket_segments(TICKETS_PATH, id)?)?
            .json(update);

        Self::json(request).await
    }

    #[tracing::instrument(name = "Regenerate ticket", skip(self))]
    async fn regenerate_ticket(&self, id: &str) -> Result<FloatingTicket, Error> {
        let segments = Self::ticket_segments(REGENERATE_PATH, id)?;
        let request = self.request(Method::POST, &segments)?;

        Self::json(request).await
    }

    #[tracing::instrument(name = "Delete ticket", skip(self))]
    async fn delete_ticket(&self, id: &str) -> Result<(), Error> {
        let segments = Self::ticket_segments(TICKETS_PATH, id)?;
        let request = self.request(Method::DELETE, &segments)?;
        Self::send(request).await?;

        Ok(())
    }
}
