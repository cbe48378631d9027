use std::pin::Pin;
use std::time::Duration;

use reqwest::{Method, Url};
use serde::Deserialize;

use crate::activities::ActivityCollection;
use crate::ports::{self, ApiError};

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimeProvider;

impl ports::TimeProvider for TokioTimeProvider {
    type Sleep<'a>
        = tokio::time::Sleep
    where
        Self: 'a;

    fn sleep<'a>(&'a self, duration: Duration) -> Self::Sleep<'a> {
        tokio::time::sleep(duration)
    }
}

/// Client for the sign-up service's JSON API. One shared reqwest client,
/// URLs built segment-wise so activity names and emails are percent-encoded.
#[derive(Debug, Clone)]
pub struct HttpActivityApi {
    base: Url,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct MutationAccepted {
    message: String,
}

#[derive(Deserialize)]
struct MutationRejected {
    #[serde(default)]
    detail: Option<String>,
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

impl HttpActivityApi {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    fn collection_url(&self) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Transport("base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("activities");
        Ok(url)
    }

    fn mutation_url(&self, activity: &str, leaf: &str, email: &str) -> Result<Url, ApiError> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Transport("base URL cannot be a base".to_string()))?
            .push(activity)
            .push(leaf);
        url.query_pairs_mut().append_pair("email", email);
        Ok(url)
    }

    async fn mutate(&self, method: Method, url: Url) -> Result<String, ApiError> {
        let response = self
            .http
            .request(method, url)
            .send()
            .await
            .map_err(transport)?;
        let status = response.status();
        if status.is_success() {
            let body: MutationAccepted = response.json().await.map_err(transport)?;
            Ok(body.message)
        } else {
            // An undecodable failure body counts as a transport failure, same
            // as a dropped connection.
            let body: MutationRejected = response.json().await.map_err(transport)?;
            Err(ApiError::Rejected {
                status: status.as_u16(),
                detail: body.detail,
            })
        }
    }
}

impl ports::ActivityApi for HttpActivityApi {
    type FetchFut<'a>
        = Pin<Box<dyn Future<Output = Result<ActivityCollection, ApiError>> + Send + 'a>>
    where
        Self: 'a;
    type MutateFut<'a>
        = Pin<Box<dyn Future<Output = Result<String, ApiError>> + Send + 'a>>
    where
        Self: 'a;

    fn fetch_activities(&self) -> Self::FetchFut<'_> {
        Box::pin(async move {
            let url = self.collection_url()?;
            let response = self.http.get(url).send().await.map_err(transport)?;
            let response = response.error_for_status().map_err(transport)?;
            response
                .json::<ActivityCollection>()
                .await
                .map_err(transport)
        })
    }

    fn sign_up<'a>(&'a self, activity: &'a str, email: &'a str) -> Self::MutateFut<'a> {
        Box::pin(async move {
            let url = self.mutation_url(activity, "signup", email)?;
            self.mutate(Method::POST, url).await
        })
    }

    fn remove_participant<'a>(&'a self, activity: &'a str, email: &'a str) -> Self::MutateFut<'a> {
        Box::pin(async move {
            let url = self.mutation_url(activity, "participants", email)?;
            self.mutate(Method::DELETE, url).await
        })
    }
}
