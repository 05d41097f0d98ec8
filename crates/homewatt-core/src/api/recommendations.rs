use serde::Serialize;

use super::ApiClient;
use crate::http::{ApiError, RequestDescriptor};
use crate::models::{
    Recommendation, RecommendationCreate, RecommendationQuery, RecommendationSources,
    RecommendationUpdate,
};

/// Provider the backend uses when none is named
pub const DEFAULT_AI_PROVIDER: &str = "tongyi";

#[derive(Serialize)]
struct GenerateParams<'a> {
    user_id: i64,
    ai_provider: &'a str,
}

#[derive(Serialize)]
struct UserParam {
    user_id: i64,
}

impl ApiClient {
    pub async fn my_recommendations(
        &self,
        query: &RecommendationQuery,
    ) -> Result<Vec<Recommendation>, ApiError> {
        let request =
            RequestDescriptor::get("/recommendations/my-recommendations").query(query);
        self.http().request(request).await
    }

    pub async fn create_recommendation(
        &self,
        recommendation: &RecommendationCreate,
    ) -> Result<Recommendation, ApiError> {
        self.http().post_json("/recommendations/", recommendation).await
    }

    pub async fn update_recommendation(
        &self,
        recommendation_id: i64,
        update: &RecommendationUpdate,
    ) -> Result<Recommendation, ApiError> {
        self.http()
            .put_json(&format!("/recommendations/{}", recommendation_id), update)
            .await
    }

    /// Mark a recommendation as acted on
    pub async fn implement_recommendation(
        &self,
        recommendation_id: i64,
    ) -> Result<Recommendation, ApiError> {
        let request = RequestDescriptor::post(format!(
            "/recommendations/{}/implement",
            recommendation_id
        ));
        self.http().request(request).await
    }

    /// Ask an AI provider for fresh recommendations for `user_id`.
    pub async fn generate_ai_recommendations(
        &self,
        user_id: i64,
        ai_provider: &str,
    ) -> Result<Vec<Recommendation>, ApiError> {
        let request = RequestDescriptor::post("/recommendations/ai/generate").query(
            &GenerateParams {
                user_id,
                ai_provider,
            },
        );
        self.http().request(request).await
    }

    pub async fn recommendation_sources(
        &self,
        user_id: i64,
    ) -> Result<RecommendationSources, ApiError> {
        let request =
            RequestDescriptor::get("/recommendations/sources").query(&UserParam { user_id });
        self.http().request(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Method;

    use super::*;
    use crate::auth::{CredentialStore, SessionToken};
    use crate::http::HttpClient;
    use crate::models::{DifficultyLevel, RecommendationCategory};
    use crate::testing::{FakeTransport, RecordingNavigator, RecordingNotifier};

    const RECOMMENDATION_JSON: &str = r#"{"id":5,"user_id":4,"title":"Raise the AC setpoint","description":"26C saves energy","category":"device_usage","estimated_saving":30.0,"estimated_cost_saving":18.0,"implementation_difficulty":"low","device_id":2,"is_implemented":false,"created_at":"2024-06-01T10:00:00"}"#;

    fn api(transport: Arc<FakeTransport>) -> ApiClient {
        ApiClient::new(HttpClient::new(
            transport,
            CredentialStore::with_token(SessionToken::new("tok")),
            Arc::new(RecordingNavigator::default()),
            Arc::new(RecordingNotifier::default()),
        ))
    }

    #[tokio::test]
    async fn test_my_recommendations_filters() {
        let transport = Arc::new(FakeTransport::replying(
            200,
            &format!("[{}]", RECOMMENDATION_JSON),
        ));
        let api = api(transport.clone());

        let list = api
            .my_recommendations(&RecommendationQuery::default())
            .await
            .unwrap();
        assert_eq!(list[0].title, "Raise the AC setpoint");

        let query = RecommendationQuery {
            category: Some(RecommendationCategory::DeviceUpgrade),
            is_implemented: Some(false),
            ..Default::default()
        };
        api.my_recommendations(&query).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::GET);
        assert_eq!(sent[0].path, "/recommendations/my-recommendations?skip=0&limit=100");
        assert_eq!(
            sent[1].path,
            "/recommendations/my-recommendations?category=device_upgrade&is_implemented=false&skip=0&limit=100"
        );
        assert_eq!(sent[1].authorization(), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_recommendation_write_requests() {
        let transport = Arc::new(FakeTransport::replying(200, RECOMMENDATION_JSON));
        let api = api(transport.clone());

        let create = RecommendationCreate {
            title: "Raise the AC setpoint".to_string(),
            description: "26C saves energy".to_string(),
            category: RecommendationCategory::DeviceUsage,
            estimated_saving: Some(30.0),
            estimated_cost_saving: None,
            implementation_difficulty: Some(DifficultyLevel::Low),
            device_id: None,
        };
        api.create_recommendation(&create).await.unwrap();
        let update = RecommendationUpdate {
            is_implemented: Some(true),
            ..Default::default()
        };
        api.update_recommendation(5, &update).await.unwrap();
        api.implement_recommendation(5).await.unwrap();

        let sent = transport.requests();
        let summary: Vec<(Method, &str)> = sent
            .iter()
            .map(|r| (r.method.clone(), r.path.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Method::POST, "/recommendations/"),
                (Method::PUT, "/recommendations/5"),
                (Method::POST, "/recommendations/5/implement"),
            ]
        );
        assert_eq!(
            sent[0].body.as_deref(),
            Some(r#"{"title":"Raise the AC setpoint","description":"26C saves energy","category":"device_usage","estimated_saving":30.0,"implementation_difficulty":"low"}"#)
        );
        assert_eq!(sent[1].body.as_deref(), Some(r#"{"is_implemented":true}"#));
        assert_eq!(sent[2].body, None);
        assert_eq!(sent[2].content_type(), None);
    }

    #[tokio::test]
    async fn test_generate_ai_recommendations() {
        let transport = Arc::new(FakeTransport::replying(
            200,
            &format!("[{}]", RECOMMENDATION_JSON),
        ));
        let api = api(transport.clone());

        let generated = api
            .generate_ai_recommendations(4, DEFAULT_AI_PROVIDER)
            .await
            .unwrap();
        assert_eq!(generated.len(), 1);

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::POST);
        assert_eq!(
            sent.path,
            "/recommendations/ai/generate?user_id=4&ai_provider=tongyi"
        );
        assert_eq!(sent.body, None);
    }

    #[tokio::test]
    async fn test_recommendation_sources() {
        let transport = Arc::new(FakeTransport::replying(
            200,
            r#"{"source_stats":{"rule_based":3},"available_ai_providers":["tongyi"]}"#,
        ));
        let api = api(transport.clone());

        let sources = api.recommendation_sources(4).await.unwrap();
        assert_eq!(sources.source_stats.get("rule_based"), Some(&3));

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::GET);
        assert_eq!(sent.path, "/recommendations/sources?user_id=4");
    }
}
