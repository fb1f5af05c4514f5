use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use web_sys::{File, FormData};

use crate::error::ClientError;
use crate::models::{Balance, ListingPage, ListingQuery};

#[derive(Deserialize)]
struct Envelope<T> {
    status: String,
    message: Option<String>,
    data: Option<T>,
}

// `{status, message, data}` from the backend, or the bare payload
#[derive(Deserialize)]
#[serde(untagged)]
enum Body<T> {
    Wrapped(Envelope<T>),
    Bare(T),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Everything one refresh cycle needs, replaced as a unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub balance: i64,
    pub listing: ListingPage,
}

#[derive(Clone, PartialEq)]
pub struct StatementApi {
    base_url: String,
}

impl StatementApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn balance_url(&self) -> String {
        format!("{}/balance", self.base_url)
    }

    pub fn issues_url(&self, query: &ListingQuery) -> String {
        format!("{}/issues?{}", self.base_url, query.to_query_string())
    }

    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url)
    }

    pub async fn balance(&self) -> Result<i64, ClientError> {
        let resp = Request::get(&self.balance_url()).send().await?;
        let body: Balance = read_json(resp).await?;
        Ok(body.balance)
    }

    pub async fn issues(&self, query: &ListingQuery) -> Result<ListingPage, ClientError> {
        let resp = Request::get(&self.issues_url(query)).send().await?;
        read_json(resp).await
    }

    /// Fires both requests together and only succeeds when both do.
    pub async fn snapshot(&self, query: &ListingQuery) -> Result<Snapshot, ClientError> {
        let (balance, listing) = futures::join!(self.balance(), self.issues(query));
        combine(balance, listing)
    }

    pub async fn upload(&self, file: &File) -> Result<(), ClientError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(js_error)?;

        let resp = Request::post(&self.upload_url()).body(form)?.send().await?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(status_error(resp.status(), &text));
        }
        Ok(())
    }
}

/// Either half failing fails the whole refresh.
pub fn combine(
    balance: Result<i64, ClientError>,
    listing: Result<ListingPage, ClientError>,
) -> Result<Snapshot, ClientError> {
    Ok(Snapshot {
        balance: balance?,
        listing: listing?,
    })
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    let text = resp.text().await?;
    if !(200..300).contains(&status) {
        return Err(status_error(status, &text));
    }
    decode_body(&text)
}

pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ClientError> {
    match serde_json::from_str::<Body<T>>(text) {
        Ok(Body::Wrapped(envelope)) => {
            if envelope.status != "success" {
                return Err(ClientError::Rejected(
                    envelope.message.unwrap_or(envelope.status),
                ));
            }
            envelope
                .data
                .ok_or_else(|| ClientError::Decode("envelope without data".into()))
        }
        Ok(Body::Bare(body)) => Ok(body),
        // Re-parse as the bare shape so the error names the offending field.
        Err(_) => Ok(serde_json::from_str::<T>(text)?),
    }
}

pub fn status_error(status: u16, text: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(text)
        .ok()
        .and_then(|body| body.message);
    ClientError::Status { status, message }
}

fn js_error(value: wasm_bindgen::JsValue) -> ClientError {
    ClientError::Network(format!("{value:?}"))
}
