//! OAuth 1.0a request signing (HMAC-SHA1), as used by the posting API.

use base64::Engine;
use itertools::Itertools;
use rand::{
    Rng,
    distributions::Alphanumeric,
};
use ring::hmac;

use crate::config::Credentials;

const NONCE_LEN: usize = 32;
const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const VERSION: &str = "1.0";

/// RFC 3986 encoding: everything but unreserved characters is escaped.
#[inline]
pub fn encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

pub fn nonce<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..NONCE_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

pub fn signature_base(method: &str, url: &str, params: &[(&str, &str)]) -> String {
    let param_string = params.iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .sorted()
        .map(|(k, v)| format!("{}={}", k, v))
        .join("&");

    format!("{}&{}&{}", method.to_uppercase(), encode(url), encode(&param_string))
}

pub fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!("{}&{}", encode(consumer_secret), encode(token_secret));
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key.as_bytes());

    let tag = hmac::sign(&key, base.as_bytes());
    base64::engine::general_purpose::STANDARD.encode(tag.as_ref())
}

/// Builds the `Authorization` header value for one request.
///
/// `params` are the query or form parameters of the request; a JSON body is not signed.
pub fn authorization(
    method: &str,
    url: &str,
    params: &[(&str, &str)],
    credentials: &Credentials,
    nonce: &str,
    timestamp: i64,
) -> String {
    let timestamp = timestamp.to_string();

    let mut oauth_params = vec![
        ("oauth_consumer_key", credentials.consumer_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", SIGNATURE_METHOD),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_token", credentials.access_token.as_str()),
        ("oauth_version", VERSION),
    ];

    let all_params = oauth_params.iter()
        .chain(params.iter())
        .cloned()
        .collect::<Vec<_>>();

    let base = signature_base(method, url, &all_params);
    let signature = sign(&base, &credentials.consumer_secret, &credentials.access_token_secret);

    oauth_params.push(("oauth_signature", signature.as_str()));

    let fields = oauth_params.iter()
        .sorted()
        .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
        .join(", ");

    format!("OAuth {}", fields)
}
