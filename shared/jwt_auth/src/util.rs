use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use std::str::FromStr;

///
/// Parses comma separated list of algorithms, e.g. `HS256,HS384`.
///
pub fn parse_jwt_algorithms(jwt_algorithms: &str) -> anyhow::Result<Vec<Algorithm>> {
    let algorithms = jwt_algorithms
        .split(',')
        .map(str::trim)
        .filter(|algorithm| !algorithm.is_empty())
        .map(|algorithm| {
            Algorithm::from_str(algorithm)
                .map_err(|err| anyhow!("invalid algorithm '{algorithm}': {err}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if algorithms.is_empty() {
        return Err(anyhow!("at least one jwt algorithm is required"));
    }

    Ok(algorithms)
}

pub fn parse_jwt_key(jwt_algorithm: &Algorithm, jwt_key: &str) -> anyhow::Result<DecodingKey> {
    let jwt_key_bytes = jwt_key.as_bytes();

    let key = match jwt_algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
            DecodingKey::from_secret(jwt_key_bytes)
        }
        Algorithm::ES256 | Algorithm::ES384 => DecodingKey::from_ec_pem(jwt_key_bytes)
            .map_err(|err| anyhow!("invalid ec pem key: {err}"))?,
        Algorithm::RS256
        | Algorithm::RS384
        | Algorithm::RS512
        | Algorithm::PS256
        | Algorithm::PS384
        | Algorithm::PS512 => DecodingKey::from_rsa_pem(jwt_key_bytes)
            .map_err(|err| anyhow!("invalid rsa pem key: {err}"))?,
        Algorithm::EdDSA => DecodingKey::from_ed_pem(jwt_key_bytes)
            .map_err(|err| anyhow!("invalid ed pem key: {err}"))?,
    };

    Ok(key)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_jwt_algorithms_many() {
        let algorithms = parse_jwt_algorithms("HS256, HS384,HS512").unwrap();

        assert_eq!(
            algorithms,
            vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512]
        );
    }

    #[test]
    fn parse_jwt_algorithms_unknown() {
        assert!(parse_jwt_algorithms("HS256,XX999").is_err());
    }

    #[test]
    fn parse_jwt_algorithms_empty() {
        assert!(parse_jwt_algorithms(" , ").is_err());
    }

    #[test]
    fn parse_jwt_key_secret() {
        assert!(parse_jwt_key(&Algorithm::HS256, "some secret").is_ok());
    }

    #[test]
    fn parse_jwt_key_rsa_not_pem() {
        assert!(parse_jwt_key(&Algorithm::RS256, "not a pem").is_err());
    }
}
