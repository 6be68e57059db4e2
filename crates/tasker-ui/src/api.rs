use gloo::net::http::{Request, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use tasker_shared::ApiMessage;

use crate::storage;

const API_BASE: &str = "/api";

fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match storage::load_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

fn transport_error(path: &str, error: gloo::net::Error) -> String {
    tracing::error!(path, error = %error, "request did not reach the backend");
    "Could not reach the server".to_string()
}

async fn rejection_message(path: &str, response: Response) -> String {
    let fallback = format!("Request failed ({})", response.status());
    let message = match response.json::<ApiMessage>().await {
        Ok(envelope) => envelope.text().map(str::to_string).unwrap_or(fallback),
        Err(_) => fallback,
    };
    tracing::warn!(path, message = %message, "request rejected");
    message
}

async fn expect_ok(path: &str, response: Response) -> Result<Response, String> {
    if response.ok() {
        Ok(response)
    } else {
        Err(rejection_message(path, response).await)
    }
}

async fn decode_json<R: DeserializeOwned>(path: &str, response: Response) -> Result<R, String> {
    let response = expect_ok(path, response).await?;
    response.json::<R>().await.map_err(|error| {
        tracing::error!(path, error = %error, "failed decoding response body");
        "Unexpected response from the server".to_string()
    })
}

pub async fn get_json<R: DeserializeOwned>(path: &str) -> Result<R, String> {
    let response = authorize(Request::get(&endpoint(path)))
        .send()
        .await
        .map_err(|error| transport_error(path, error))?;
    decode_json(path, response).await
}

pub async fn post_json<R, B>(path: &str, body: &B) -> Result<R, String>
where
    R: DeserializeOwned,
    B: Serialize,
{
    let request = authorize(Request::post(&endpoint(path)))
        .json(body)
        .map_err(|error| transport_error(path, error))?;
    let response = request
        .send()
        .await
        .map_err(|error| transport_error(path, error))?;
    decode_json(path, response).await
}

pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let request = authorize(Request::post(&endpoint(path)))
        .json(body)
        .map_err(|error| transport_error(path, error))?;
    let response = request
        .send()
        .await
        .map_err(|error| transport_error(path, error))?;
    expect_ok(path, response).await.map(|_| ())
}

pub async fn post_empty(path: &str) -> Result<(), String> {
    let response = authorize(Request::post(&endpoint(path)))
        .send()
        .await
        .map_err(|error| transport_error(path, error))?;
    expect_ok(path, response).await.map(|_| ())
}

pub async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let request = authorize(Request::put(&endpoint(path)))
        .json(body)
        .map_err(|error| transport_error(path, error))?;
    let response = request
        .send()
        .await
        .map_err(|error| transport_error(path, error))?;
    expect_ok(path, response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = authorize(Request::delete(&endpoint(path)))
        .send()
        .await
        .map_err(|error| transport_error(path, error))?;
    expect_ok(path, response).await.map(|_| ())
}
