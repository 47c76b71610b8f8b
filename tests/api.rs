//! End-to-end tests over a real socket.

mod common;

use std::collections::BTreeMap;

use reqwest::StatusCode;
use sdk_rust::{
    AiServiceClient, ClientError, ExpressionRequest, GeneDelta, MissionRequest, RiskRequest,
};
use serde_json::{json, Map, Value};

fn readings(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[tokio::test]
async fn test_health_probe() {
    let server = common::start_server().await;
    let client = AiServiceClient::new(&server.url());

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.service, "ai-service");
    assert!(health.time > 1_600_000_000.0);

    server.stop().await;
}

#[tokio::test]
async fn test_health_risk_levels() {
    let server = common::start_server().await;
    let client = AiServiceClient::new(&server.url());

    let cases = [
        (readings(&[]), 0.05, "low"),
        (readings(&[("a", 10.0), ("b", 20.0)]), 0.99, "high"),
        (readings(&[("a", 5.0)]), 0.5, "medium"),
        (readings(&[("a", 2.0), ("b", 3.0)]), 0.25, "low"),
    ];

    for (biomarkers, score, level) in cases {
        let resp = client
            .predict_health_risk(&RiskRequest {
                biomarkers,
                metadata: None,
            })
            .await
            .unwrap();
        assert_eq!(resp.risk_score, score);
        assert_eq!(resp.risk_level, level);
        assert_eq!(resp.model, "random_forest_demo");
    }

    server.stop().await;
}

#[tokio::test]
async fn test_gene_expression_ranking() {
    let server = common::start_server().await;
    let client = AiServiceClient::new(&server.url());

    let resp = client
        .analyze_gene_expression(&ExpressionRequest {
            sample_a: readings(&[("g1", 5.0)]),
            sample_b: readings(&[("g1", 2.0), ("g2", 7.0)]),
            metadata: None,
        })
        .await
        .unwrap();

    assert_eq!(resp.method, "demo_diff");
    assert_eq!(
        resp.top_genes,
        vec![
            GeneDelta { gene: "g2".into(), delta: -7.0 },
            GeneDelta { gene: "g1".into(), delta: 3.0 },
        ]
    );

    server.stop().await;
}

#[tokio::test]
async fn test_gene_expression_keeps_top_five() {
    let server = common::start_server().await;
    let client = AiServiceClient::new(&server.url());

    let sample_b: BTreeMap<String, f64> = (0..8).map(|i| (format!("g{i}"), i as f64)).collect();
    let resp = client
        .analyze_gene_expression(&ExpressionRequest {
            sample_a: BTreeMap::new(),
            sample_b,
            metadata: None,
        })
        .await
        .unwrap();

    let genes: Vec<&str> = resp.top_genes.iter().map(|g| g.gene.as_str()).collect();
    assert_eq!(genes, ["g7", "g6", "g5", "g4", "g3"]);

    server.stop().await;
}

#[tokio::test]
async fn test_mission_echo() {
    let server = common::start_server().await;
    let client = AiServiceClient::new(&server.url());

    let mut environment = Map::new();
    environment.insert("grav".into(), json!(0.16));
    environment.insert("crew".into(), json!(["a", "b"]));

    let resp = client
        .simulate_mission(&MissionRequest {
            mission: "Artemis".into(),
            duration_days: 30,
            environment: environment.clone(),
        })
        .await
        .unwrap();

    assert_eq!(resp.mission, "Artemis");
    assert_eq!(resp.duration_days, 30);
    assert_eq!(resp.summary, "Simulation completed (demo).");
    assert_eq!(resp.environment, environment);

    server.stop().await;
}

#[tokio::test]
async fn test_validation_reports_every_field() {
    let server = common::start_server().await;
    let client = AiServiceClient::new(&server.url());

    let err = client
        .post_json::<_, Value>(
            "/api/v1/ai/analyze/gene-expression",
            &json!({"sample_a": {"g1": "lots"}, "metadata": 3}),
        )
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    assert_eq!(
        err.invalid_fields(),
        ["sample_a.g1", "sample_b", "metadata"]
    );
    match err {
        ClientError::Api { body, .. } => {
            assert_eq!(body["success"], false);
            assert_eq!(body["code"], "VALIDATION_ERROR");
        }
        other => panic!("unexpected error: {other}"),
    }

    server.stop().await;
}

#[tokio::test]
async fn test_malformed_and_unknown_requests() {
    let server = common::start_server().await;
    let http = reqwest::Client::new();

    let resp = http
        .post(format!("{}/api/v1/ai/simulate/mission", server.url()))
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "MALFORMED_BODY");

    let resp = http
        .get(format!("{}/api/v1/ai/predict/nothing", server.url()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().contains_key("x-request-id"));

    server.stop().await;
}

#[tokio::test]
async fn test_status_and_models() {
    let server = common::start_server().await;
    let client = AiServiceClient::new(&server.url());

    let status = client.status().await.unwrap();
    assert_eq!(status["service"], "ai-service");
    assert_eq!(status["demo"], true);

    let models = client.models().await.unwrap();
    assert_eq!(models["total"], 3);
    let tags: Vec<&str> = models["models"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["tag"].as_str().unwrap())
        .collect();
    assert_eq!(tags, ["random_forest_demo", "demo_diff", "mission_echo_demo"]);

    server.stop().await;
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let server = common::start_server().await;
    let url = server.url();

    let tasks: Vec<_> = (1..=20)
        .map(|i| {
            let client = AiServiceClient::new(&url);
            tokio::spawn(async move {
                let value = i as f64;
                let resp = client
                    .predict_health_risk(&RiskRequest {
                        biomarkers: readings(&[("x", value)]),
                        metadata: None,
                    })
                    .await
                    .unwrap();
                (value, resp.risk_score)
            })
        })
        .collect();

    for task in tasks {
        let (value, score) = task.await.unwrap();
        let expected = (value / 10.0).min(0.99);
        assert!((score - expected).abs() < 1e-9, "{value}: {score}");
    }

    server.stop().await;
}
