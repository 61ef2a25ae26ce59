use crate::cli::Args;
use crate::imagery::ImageryProvider;
use crate::map::models::LatLng;
use serde::Deserialize;
use std::future::Future;
use url::Url;

#[derive(Clone)]
pub struct StreetViewImagery {
    http_client: reqwest::Client,
    image_url: Url,
    metadata_url: Url,
    api_key: String,
}

#[derive(Deserialize)]
struct StreetViewMetadata {
    status: String,
}

impl StreetViewImagery {
    pub fn new(args: &Args) -> Self {
        let metadata_url = Url::parse(&format!("{}/metadata", args.street_view_url))
            .expect("Failed to construct the Street View metadata URL.");
        StreetViewImagery {
            http_client: reqwest::Client::new(),
            image_url: args.street_view_url.clone(),
            metadata_url,
            api_key: args.street_view_api_key.clone(),
        }
    }

    fn location_param(location: LatLng) -> String {
        format!("{},{}", location.lat, location.lng)
    }
}

impl ImageryProvider for StreetViewImagery {
    fn has_imagery(&self, location: LatLng) -> impl Future<Output = bool> + Send {
        async move {
            let mut url = self.metadata_url.clone();
            url.query_pairs_mut()
                .append_pair("location", &Self::location_param(location))
                .append_pair("key", &self.api_key);
            let response = match self.http_client.get(url).send().await {
                Ok(response) => response,
                Err(err) => {
                    tracing::warn!("Street View metadata request failed: {err}");
                    return false;
                }
            };
            match response.json::<StreetViewMetadata>().await {
                Ok(metadata) => metadata.status == "OK",
                Err(err) => {
                    tracing::warn!("Failed to parse the Street View metadata response: {err}");
                    false
                }
            }
        }
    }

    fn imagery_url(&self, location: LatLng) -> String {
        let mut url = self.image_url.clone();
        url.query_pairs_mut()
            .append_pair("size", "400x300")
            .append_pair("location", &Self::location_param(location))
            .append_pair("key", &self.api_key);
        url.to_string()
    }
}
