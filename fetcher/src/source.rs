use crate::parking::{GarageRecord, ParkingData};
use reqwest::{Client as HTTPClient, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to data source failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected HTTP status from data source: {0}")]
    Status(StatusCode),
    #[error("invalid JSON from data source: {0}")]
    Decode(#[from] serde_json::Error),
}

pub async fn fetch_garages(
    http_client: &HTTPClient,
    data_url: &str,
) -> Result<Vec<GarageRecord>, SourceError> {
    let response = http_client.get(data_url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(SourceError::Status(status));
    }

    let body = response.text().await?;
    let data: ParkingData = serde_json::from_str(&body)?;
    Ok(data.parking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_garages_decodes_parking_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/parkings.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"parking":[{"title":"Bouillon","actuel":100,"total":100},{"title":"Gëlle Fra","actuel":"5","total":300}]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let garages = fetch_garages(&HTTPClient::new(), &format!("{}/parkings.json", server.uri()))
            .await
            .unwrap();

        assert_eq!(garages.len(), 2);
        assert_eq!(garages[0].title, "Bouillon");
        assert_eq!(garages[1].occupied, 5);
    }

    #[tokio::test]
    async fn non_ok_status_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = fetch_garages(&HTTPClient::new(), &server.uri())
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Status(StatusCode::SERVICE_UNAVAILABLE)));
    }

    #[tokio::test]
    async fn other_success_codes_are_rejected_too() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = fetch_garages(&HTTPClient::new(), &server.uri())
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Status(StatusCode::NO_CONTENT)));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = fetch_garages(&HTTPClient::new(), &server.uri())
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_source_is_a_network_error() {
        let err = fetch_garages(&HTTPClient::new(), "http://127.0.0.1:9/parkings.json")
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Network(_)));
    }
}
