use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    lookups::{get_country_wins, get_winners, get_year_info},
    page::{get_figure, get_health, get_options, get_page},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_page))
        .route("/api/figure", get(get_figure))
        .route("/api/options", get(get_options))
        .route("/api/winners", get(get_winners))
        .route("/api/country-wins", get(get_country_wins))
        .route("/api/year-info", get(get_year_info))
        .route("/api/health", get(get_health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::config::settings::AppConfig;
    use crate::domain::Dataset;

    fn router() -> Router {
        let state = AppState::new(Dataset::load().unwrap(), AppConfig::new()).unwrap();
        create_router(Arc::new(state))
    }

    async fn get_response(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(uri: &str) -> Value {
        let (status, body) = get_response(uri).await;
        assert_eq!(status, StatusCode::OK, "unexpected status for {}", uri);
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_page_is_served() {
        let (status, body) = get_response("/").await;
        let html = String::from_utf8(body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("FIFA World Cup Dashboard"));
        assert!(html.contains("show-winners-btn"));
    }

    #[tokio::test]
    async fn test_winners_follow_click_count() {
        let hidden = get_json("/api/winners").await;
        assert_eq!(hidden, json!({"nClicks": 0, "winners": []}));

        let shown = get_json("/api/winners?n_clicks=1").await;
        assert_eq!(
            shown["winners"],
            json!(["Argentina", "Brazil", "England", "France", "Germany", "Italy", "Spain", "Uruguay"])
        );
    }

    #[tokio::test]
    async fn test_country_wins_endpoint() {
        let body = get_json("/api/country-wins?country=Brazil").await;
        assert_eq!(body["text"], json!("Brazil has won the World Cup 5 time(s)."));

        let empty = get_json("/api/country-wins").await;
        assert_eq!(empty["text"], json!(""));
    }

    #[tokio::test]
    async fn test_year_info_endpoint() {
        let body = get_json("/api/year-info?year=2022").await;
        assert_eq!(
            body["text"],
            json!("In 2022, the winner was Argentina, and the runner-up was France.")
        );

        let missing = get_json("/api/year-info?year=1942").await;
        assert_eq!(missing["text"], json!("No data found for that year."));
    }

    #[tokio::test]
    async fn test_malformed_year_is_rejected() {
        let (status, _) = get_response("/api/year-info?year=nineteen").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_options_and_health() {
        let options = get_json("/api/options").await;
        assert_eq!(options["countries"].as_array().unwrap().len(), 8);
        assert_eq!(options["years"].as_array().unwrap().len(), 22);

        let health = get_json("/api/health").await;
        assert_eq!(health, json!({"status": "ok", "records": 22, "winners": 8}));
    }

    #[tokio::test]
    async fn test_figure_endpoint() {
        let figure = get_json("/api/figure").await;
        assert_eq!(figure["data"][0]["type"], json!("choropleth"));
        assert_eq!(figure["data"][0]["z"].as_array().unwrap().len(), 8);
    }
}
