use lazy_static::lazy_static;
use log::{debug, info};
use rand::Rng;
use reqwest::{
    StatusCode,
    blocking::Client,
    header::AUTHORIZATION,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    config::Credentials,
    error::PipelineError,
};

use super::{
    Publisher,
    oauth,
};

lazy_static! {
    static ref CREATE_STATUS_URL: Url = Url::parse("https://api.twitter.com/2/tweets")
        .expect("unable to parse create status url");
}

#[derive(Serialize, Debug)]
struct CreateStatus<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug)]
struct CreateStatusResp {
    data: Option<CreatedStatus>,
}

#[derive(Deserialize, Debug)]
struct CreatedStatus {
    id: String,
}

/// Posts the message as a status update, signed with the operator's credentials.
pub struct Twitter<R> {
    client: Client,
    credentials: Credentials,
    endpoint: Url,
    rng: R,
}

impl<R: Rng> Twitter<R> {
    pub fn new(client: Client, credentials: Credentials, rng: R) -> Self {
        Twitter {
            client,
            credentials,
            endpoint: CREATE_STATUS_URL.clone(),
            rng,
        }
    }

    #[inline]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }
}

fn check_status(status: StatusCode, body: String) -> Result<String, PipelineError> {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(PipelineError::Authentication(format!("{}: {}", status, body)))
        },
        s if !s.is_success() => Err(PipelineError::Publish { status, body }),
        _ => Ok(body),
    }
}

impl<R: Rng> Publisher for Twitter<R> {
    fn publish(&mut self, message: &str) -> Result<(), PipelineError> {
        let nonce = oauth::nonce(&mut self.rng);
        let timestamp = chrono::Utc::now().timestamp();

        let auth = oauth::authorization("POST", self.endpoint.as_str(), &[], &self.credentials, &nonce, timestamp);

        debug!("posting status as consumer {}", self.credentials.consumer_key);

        let resp = self.client.post(self.endpoint.clone())
            .header(AUTHORIZATION, auth)
            .json(&CreateStatus { text: message })
            .send()?;

        let status = resp.status();
        let body = check_status(status, resp.text()?)?;

        match serde_json::from_str::<CreateStatusResp>(&body) {
            Ok(CreateStatusResp { data: Some(created) }) => info!("posted status {}", created.id),
            _ => info!("posted status ({})", status),
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rand::{
        SeedableRng,
        rngs::StdRng,
    };

    use crate::{
        fetch::client,
        testing::{refused_url, response, serve_once},
    };

    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            consumer_key: "xvz1evFS4wEEPTGEFPHBog".to_owned(),
            consumer_secret: "consumer-secret".to_owned(),
            access_token: "370773112-token".to_owned(),
            access_token_secret: "token-secret".to_owned(),
        }
    }

    fn twitter(endpoint: Url) -> Twitter<StdRng> {
        Twitter::new(client("still-here/test").unwrap(), credentials(), StdRng::seed_from_u64(0))
            .with_endpoint(endpoint)
    }

    #[test]
    fn test_default_endpoint() {
        let twitter = Twitter::new(client("still-here/test").unwrap(), credentials(), StdRng::seed_from_u64(0));
        assert_eq!(twitter.endpoint.as_str(), "https://api.twitter.com/2/tweets");
    }

    #[test]
    fn test_publish_sends_signed_json() {
        let (base, server) = serve_once(response("201 Created", r#"{"data":{"id":"1","text":"x"}}"#));
        let endpoint = base.join("2/tweets").unwrap();

        twitter(endpoint).publish("Only 180 years since the world ended in 1844, William Miller & co.").unwrap();

        let request = server.join().unwrap();
        let lower = request.to_ascii_lowercase();

        assert!(request.starts_with("POST /2/tweets HTTP/1.1\r\n"));
        assert!(lower.contains("content-type: application/json"));
        assert!(request.contains("OAuth oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\", oauth_nonce=\""));
        assert!(request.contains("oauth_signature_method=\"HMAC-SHA1\""));
        assert!(request.contains("oauth_token=\"370773112-token\""));
        assert!(request.contains("oauth_signature=\""));
        assert!(request.ends_with(r#"{"text":"Only 180 years since the world ended in 1844, William Miller & co."}"#));
    }

    #[test]
    fn test_publish_rejected_credentials() {
        let (base, server) = serve_once(response("401 Unauthorized", r#"{"title":"Unauthorized"}"#));

        match twitter(base.join("2/tweets").unwrap()).publish("hello") {
            Err(e @ PipelineError::Authentication(_)) => assert!(!e.is_clean_exit()),
            other => panic!("unexpected result: {:?}", other),
        }

        server.join().unwrap();
    }

    #[test]
    fn test_publish_unreachable() {
        match twitter(refused_url()).publish("hello") {
            Err(PipelineError::Network(_)) => {},
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_auth_failures() {
        for status in &[StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            match check_status(*status, "{\"title\":\"Unauthorized\"}".to_owned()) {
                Err(PipelineError::Authentication(msg)) => assert!(msg.contains("Unauthorized")),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn test_other_failures() {
        match check_status(StatusCode::TOO_MANY_REQUESTS, "slow down".to_owned()) {
            Err(PipelineError::Publish { status, body }) => {
                assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
                assert_eq!(body, "slow down");
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_created() {
        let body = check_status(StatusCode::CREATED, r#"{"data":{"id":"1445880548472328192","text":"hi"}}"#.to_owned()).unwrap();
        let resp = serde_json::from_str::<CreateStatusResp>(&body).unwrap();

        assert_eq!(resp.data.unwrap().id, "1445880548472328192");
    }
}
