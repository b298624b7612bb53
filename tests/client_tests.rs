use katapultpro::{ConfigError, Job, KatapultClient, KatapultError, Meta};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = "test-key";

fn client_for(server: &MockServer) -> KatapultClient {
    KatapultClient::builder(TEST_KEY)
        .base_url(format!("{}/api", server.uri()))
        .build()
        .expect("client")
}

fn meta(token_count: i64) -> Value {
    json!({"token_count": token_count, "last_refill_time": 1_700_000_000})
}

#[cfg(test)]
mod envelope_tests {
    use super::*;

    #[tokio::test]
    async fn test_success_object_decodes_data_and_meta() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/jobs/j1"))
            .and(query_param("api_key", TEST_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": {"id": "j1", "name": "Route 9"},
                "meta": meta(99)
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let job: Option<Job> = client.get("v3/jobs/j1").await.unwrap();

        let job = job.unwrap();
        assert_eq!(job.id.as_deref(), Some("j1"));
        assert_eq!(job.name.as_deref(), Some("Route 9"));
        assert_eq!(
            client.last_meta(),
            Some(Meta {
                token_count: 99,
                last_refill_time: 1_700_000_000
            })
        );
    }

    #[tokio::test]
    async fn test_not_found_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/jobs/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status": "error",
                "message": "Job not found",
                "type": "not_found",
                "meta": meta(98)
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get::<Job>("v3/jobs/missing").await.unwrap_err();

        let api = err.as_api_error().expect("api error");
        assert_eq!(api.status_code, 404);
        assert_eq!(api.message, "Job not found");
        assert!(api.is_type("not_found"));
        assert!(api.is_not_found());
        assert_eq!(api.meta.map(|m| m.token_count), Some(98));
        assert_eq!(client.last_meta(), None);
    }

    #[tokio::test]
    async fn test_error_status_on_2xx_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v3/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "error",
                "message": "model is required",
                "type": "validation",
                "meta": meta(41)
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .post::<_, Job>("v3/jobs", &json!({"name": "x"}))
            .await
            .unwrap_err();

        let api = err.as_api_error().expect("api error");
        assert_eq!(api.status_code, 200);
        assert_eq!(api.error_type, "validation");
        assert_eq!(api.meta.map(|m| m.token_count), Some(41));
        assert_eq!(client.last_meta(), None);
    }

    #[tokio::test]
    async fn test_error_without_message_uses_raw_body() {
        let server = MockServer::start().await;
        let body = r#"{"status":"error"}"#;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string(body))
            .mount(&server)
            .await;

        let err = client_for(&server).get::<Value>("v3/jobs").await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.as_api_error().unwrap().message, body);
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server).get::<Value>("v3/jobs").await;
        assert!(matches!(result, Err(KatapultError::Decode(_))));
    }

    #[tokio::test]
    async fn test_array_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/jobs/empty"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v3/jobs/positional"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                "success", {"id": "x"}, "m", "t", meta(3)
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        for job_path in ["v3/jobs/empty", "v3/jobs/positional"] {
            let result = client.get::<Value>(job_path).await;
            assert!(matches!(result, Err(KatapultError::Decode(_))));
            assert_eq!(client.last_meta(), None);
        }
    }

    #[tokio::test]
    async fn test_missing_and_null_data_yield_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/jobs/a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v3/jobs/b"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": null
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(client.get::<Job>("v3/jobs/a").await.unwrap(), None);
        assert_eq!(client.get::<Job>("v3/jobs/b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_data_shape_mismatch_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": "oops"
            })))
            .mount(&server)
            .await;

        let result = client_for(&server).get::<Vec<Job>>("v3/jobs").await;
        assert!(matches!(result, Err(KatapultError::Decode(_))));
    }
}

#[cfg(test)]
mod facade_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_preserves_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": [{"id": "j3"}, {"id": "j1"}, {"id": "j2"}]
            })))
            .mount(&server)
            .await;

        let jobs = client_for(&server).jobs().list(None).await.unwrap();
        let ids: Vec<_> = jobs.iter().filter_map(|j| j.id.as_deref()).collect();
        assert_eq!(ids, vec!["j3", "j1", "j2"]);
    }

    #[tokio::test]
    async fn test_snapshot_cleared_by_failed_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/jobs/ok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success", "data": {}, "meta": meta(50)
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v3/jobs/bad"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "status": "error", "message": "slow down", "meta": meta(0)
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.get::<Value>("v3/jobs/ok").await.unwrap();
        assert_eq!(client.last_meta().map(|m| m.token_count), Some(50));

        let err = client.get::<Value>("v3/jobs/bad").await.unwrap_err();
        assert!(err.as_api_error().unwrap().is_rate_limited());
        assert_eq!(client.last_meta(), None);

        // clones share the snapshot
        let clone = client.clone();
        clone.get::<Value>("v3/jobs/ok").await.unwrap();
        assert_eq!(client.last_meta().map(|m| m.token_count), Some(50));
    }

    #[tokio::test]
    async fn test_success_without_meta_clears_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/jobs/with"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success", "meta": meta(7)
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v3/jobs/without"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.get::<Value>("v3/jobs/with").await.unwrap();
        assert!(client.last_meta().is_some());
        client.get::<Value>("v3/jobs/without").await.unwrap();
        assert_eq!(client.last_meta(), None);
    }

    #[tokio::test]
    async fn test_repeated_get_is_idempotent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/jobs/j1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success", "data": {"id": "j1", "done": true}
            })))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let first: Option<Job> = client.get("v3/jobs/j1").await.unwrap();
        let second: Option<Job> = client.get("v3/jobs/j1").await.unwrap();
        assert_eq!(first, second);
        assert!(first.unwrap().done);
    }

    #[tokio::test]
    async fn test_api_key_sent_as_query_parameter_only() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .mount(&server)
            .await;

        client_for(&server)
            .jobs()
            .list(Some(&katapultpro::ListJobsOptions {
                include_archived: true,
                metadata_filter: None,
            }))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        let pairs: Vec<(String, String)> = request
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("includeArchived".to_string(), "true".to_string()),
                ("api_key".to_string(), TEST_KEY.to_string()),
            ]
        );
        assert!(request.headers.get("authorization").is_none());
        assert_eq!(
            request.headers.get("accept").and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_delete_discards_data() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v3/jobs/j1/nodes/n1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success", "data": {"deleted": true}
            })))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).delete("v3/jobs/j1/nodes/n1").await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = KatapultClient::builder("very-secret-key")
            .base_url(format!("http://{}/api", addr))
            .build()
            .unwrap();
        let err = client.get::<Value>("v3/jobs").await.unwrap_err();

        assert!(matches!(err, KatapultError::Transport(_)));
        assert!(!err.to_string().contains("very-secret-key"));
        assert_eq!(client.last_meta(), None);
    }

    #[test]
    fn test_empty_api_key_is_configuration_error() {
        let result = KatapultClient::builder("").base_url("http://localhost").build();
        assert!(matches!(
            result,
            Err(KatapultError::Configuration(ConfigError::MissingApiKey))
        ));
    }
}
