use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use jwt_auth::util::{parse_jwt_algorithms, parse_jwt_key};
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,
    pub max_page_size: u32,

    /// Algorithms must belong to the same family
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,

    pub document_generator_url: String,
    pub document_generator_timeout: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("FLOATING_TICKETS_CORE_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("FLOATING_TICKETS_CORE_LOG_FILENAME")?;
        let bind_address = Self::env_var("FLOATING_TICKETS_CORE_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("FLOATING_TICKETS_CORE_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("FLOATING_TICKETS_CORE_DB_NAME")?;
        let max_http_content_len =
            Self::env_var("FLOATING_TICKETS_CORE_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let max_page_size: u32 = Self::env_var("FLOATING_TICKETS_CORE_MAX_PAGE_SIZE")?.parse()?;
        if max_page_size == 0 {
            return Err(anyhow!(
                "FLOATING_TICKETS_CORE_MAX_PAGE_SIZE must be greater than 0"
            ));
        }
        let jwt_algorithms =
            parse_jwt_algorithms(&Self::env_var("FLOATING_TICKETS_CORE_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "FLOATING_TICKETS_CORE_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(
            jwt_algorithm,
            &Self::env_var("FLOATING_TICKETS_CORE_JWT_KEY")?,
        )?;
        let document_generator_url = Self::env_var("FLOATING_TICKETS_CORE_DOCUMENT_GENERATOR_URL")?;
        let document_generator_timeout =
            Self::env_var("FLOATING_TICKETS_CORE_DOCUMENT_GENERATOR_TIMEOUT")?.parse()?;
        let document_generator_timeout = Duration::from_secs(document_generator_timeout);

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            max_page_size,
            jwt_algorithms,
            jwt_key,
            document_generator_url,
            document_generator_timeout,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
