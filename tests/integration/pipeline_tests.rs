//! Integration tests for the scrape-and-publish pipeline
//!
//! These tests use wiremock to stand in for the problem site, solved.ac and
//! the Notion API, and drive the real HTTP clients end-to-end.

use boj_notion::config::{BrowserConfig, Config, NotionConfig, SiteConfig, SolvedAcConfig};
use boj_notion::fetch::HttpPageFetcher;
use boj_notion::notion::{NotionClient, PublishOutcome};
use boj_notion::pipeline;
use boj_notion::solved::SolvedAcClient;
use boj_notion::{BojError, Tier, UrlError};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROBLEM_HTML: &str = r#"<!DOCTYPE html>
<html><head><title>14716번: 현수막</title></head>
<body>
  <span id="problem_title">현수막</span>
  <table id="problem-info"><tbody><tr>
    <td>1 초</td><td>512 MB</td><td>10234</td><td>6026</td><td>4732</td><td>59.132%</td>
  </tr></tbody></table>
  <div id="problem_description">
    <p>ANT가 처음 알고리즘 대회를 개최하게 되면서 현수막을 달기로 했다.</p>
    <p><img src="/upload/images/banner.png"></p>
  </div>
  <div id="problem_input"><p>첫 번째 줄에는 현수막의 크기인 M와 N가 주어진다.</p></div>
  <div id="problem_output"><p>혼자 읽을 수 있는 글자의 개수를 출력한다.</p></div>
  <pre id="sample-input-1">8 19
0 0 0 1 1 0 0 0 0 1 1 1 0 0 0 0 0 0 0
</pre>
  <pre id="sample-output-1">3</pre>
  <pre id="sample-input-2">1 1
1
</pre>
  <pre id="sample-output-2">1</pre>
</body></html>
"#;

/// Creates a configuration pointing every endpoint at the mock server
fn create_test_config(base_url: &str) -> Config {
    Config {
        notion: NotionConfig {
            token: "secret_integration".to_string(),
            parent_page_id: "parent-page".to_string(),
            api_base: base_url.to_string(),
            ..NotionConfig::default()
        },
        solved_ac: SolvedAcConfig {
            api_base: base_url.to_string(),
        },
        browser: BrowserConfig {
            enabled: false,
            ..BrowserConfig::default()
        },
        site: SiteConfig {
            origin: base_url.to_string(),
            name: "백준".to_string(),
        },
    }
}

async fn mount_problem_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/problem/14716"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PROBLEM_HTML)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

async fn mount_solved_ac(server: &MockServer, status: u16) {
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(json!({
            "problemId": 14716,
            "level": 10,
            "tags": [
                {"key": "graphs", "displayNames": [{"language": "ko", "name": "그래프 이론"}]},
                {"key": "dfs", "displayNames": [{"language": "en", "name": "depth-first search"}]}
            ]
        }))
    } else {
        ResponseTemplate::new(status)
    };

    Mock::given(method("GET"))
        .and(path("/api/v3/problem/show"))
        .and(query_param("problemId", "14716"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_children(server: &MockServer, results: Value) {
    Mock::given(method("GET"))
        .and(path("/v1/blocks/parent-page/children"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": results,
            "has_more": false,
            "next_cursor": null
        })))
        .mount(server)
        .await;
}

async fn mount_create(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "page",
            "id": "aaaa1111-bbbb-2222-cccc-3333dddd4444",
            "url": "https://www.notion.so/14716-aaaa1111bbbb2222cccc3333dddd4444"
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn run_pipeline(config: &Config, url: &str) -> Result<PublishOutcome, BojError> {
    let fetcher = HttpPageFetcher::new(&config.browser).expect("Failed to build fetcher");
    let metadata = SolvedAcClient::new(&config.solved_ac, "TestBot/1.0").expect("Failed to build solved.ac client");
    let store = NotionClient::new(&config.notion).expect("Failed to build Notion client");

    pipeline::run(config, &fetcher, &metadata, &store, url)
        .await
        .map(|(_, outcome)| outcome)
}

/// Body of the single POST /v1/pages request
async fn created_page_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.expect("Request recording disabled");
    let create = requests
        .iter()
        .find(|r| r.method.as_str() == "POST" && r.url.path() == "/v1/pages")
        .expect("No create request was sent");
    serde_json::from_slice(&create.body).expect("Create body is not JSON")
}

#[tokio::test]
async fn test_full_pipeline_creates_page() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_problem_page(&server).await;
    mount_solved_ac(&server, 200).await;
    mount_children(&server, json!([])).await;
    mount_create(&server, 1).await;

    let config = create_test_config(&base_url);
    let outcome = run_pipeline(&config, &format!("{}/problem/14716", base_url))
        .await
        .expect("Pipeline failed");

    assert_eq!(
        outcome,
        PublishOutcome::Created {
            url: "https://www.notion.so/14716-aaaa1111bbbb2222cccc3333dddd4444".to_string()
        }
    );

    let body = created_page_body(&server).await;
    assert_eq!(body["parent"]["page_id"], "parent-page");
    assert_eq!(body["icon"]["emoji"], "🥈");
    assert_eq!(
        body["properties"]["title"]["title"][0]["text"]["content"],
        "[백준 실버 I] 14716: 현수막"
    );

    let children = body["children"].as_array().expect("children array");
    assert_eq!(
        children[0]["callout"]["rich_text"][0]["text"]["content"],
        "#그래프 이론 | #depth-first search"
    );

    let image = children
        .iter()
        .find(|b| b["type"] == "image")
        .expect("image block");
    assert_eq!(
        image["image"]["external"]["url"],
        format!("{}/upload/images/banner.png", base_url)
    );

    let codes: Vec<&str> = children
        .iter()
        .filter(|b| b["type"] == "code")
        .map(|b| b["code"]["rich_text"][0]["text"]["content"].as_str().unwrap_or(""))
        .collect();
    assert_eq!(
        codes,
        vec!["8 19\n0 0 0 1 1 0 0 0 0 1 1 1 0 0 0 0 0 0 0", "3", "1 1\n1", "1"]
    );
}

#[tokio::test]
async fn test_existing_page_is_not_recreated() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_problem_page(&server).await;
    mount_solved_ac(&server, 200).await;
    mount_children(
        &server,
        json!([
            {"id": "1234abcd-0000-0000-0000-000000000001", "type": "child_page",
             "child_page": {"title": "[백준 실버 I] 14716: 현수막"}}
        ]),
    )
    .await;
    mount_create(&server, 0).await;

    let config = create_test_config(&base_url);
    let outcome = run_pipeline(&config, &format!("{}/problem/14716", base_url))
        .await
        .expect("Pipeline failed");

    assert_eq!(
        outcome,
        PublishOutcome::Duplicate {
            url: "https://www.notion.so/1234abcd000000000000000000000001".to_string()
        }
    );
}

#[tokio::test]
async fn test_solved_ac_outage_degrades_to_unknown_tier() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_problem_page(&server).await;
    mount_solved_ac(&server, 500).await;
    mount_children(&server, json!([])).await;
    mount_create(&server, 1).await;

    let config = create_test_config(&base_url);
    let fetcher = HttpPageFetcher::new(&config.browser).unwrap();
    let metadata = SolvedAcClient::new(&config.solved_ac, "TestBot/1.0").unwrap();
    let store = NotionClient::new(&config.notion).unwrap();

    let (record, outcome) = pipeline::run(
        &config,
        &fetcher,
        &metadata,
        &store,
        &format!("{}/problem/14716", base_url),
    )
    .await
    .expect("Pipeline failed");

    assert_eq!(record.tier, Tier::Unknown);
    assert!(record.tags.is_empty());
    assert!(!outcome.is_duplicate());

    let body = created_page_body(&server).await;
    assert_eq!(body["icon"]["emoji"], "🥚");
    assert_eq!(body["children"][0]["callout"]["icon"]["emoji"], "🔗");
}

#[tokio::test]
async fn test_listing_failure_still_creates_once() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_problem_page(&server).await;
    mount_solved_ac(&server, 200).await;
    Mock::given(method("GET"))
        .and(path("/v1/blocks/parent-page/children"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_create(&server, 1).await;

    let config = create_test_config(&base_url);
    let outcome = run_pipeline(&config, &format!("{}/problem/14716", base_url))
        .await
        .expect("Pipeline failed");

    assert!(!outcome.is_duplicate());
}

#[tokio::test]
async fn test_notion_rejection_is_fatal() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_problem_page(&server).await;
    mount_solved_ac(&server, 200).await;
    mount_children(&server, json!([])).await;
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "object": "error",
            "status": 401,
            "code": "unauthorized",
            "message": "API token is invalid."
        })))
        .mount(&server)
        .await;

    let config = create_test_config(&base_url);
    let result = run_pipeline(&config, &format!("{}/problem/14716", base_url)).await;

    assert!(matches!(result, Err(BojError::Notion(_))));
}

/// A problem page with enough examples to need more than one create request
fn long_problem_html(examples: usize) -> String {
    let samples: String = (1..=examples)
        .map(|n| {
            format!(
                "<pre id=\"sample-input-{n}\">{n} {n}</pre><pre id=\"sample-output-{n}\">{}</pre>\n",
                n * 2
            )
        })
        .collect();

    format!(
        r#"<html><body>
  <span id="problem_title">현수막</span>
  <div id="problem_description"><p>설명</p></div>
  <div id="problem_input"><p>입력</p></div>
  <div id="problem_output"><p>출력</p></div>
  {}
</body></html>"#,
        samples
    )
}

#[tokio::test]
async fn test_interrupted_create_does_not_block_rerun() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    Mock::given(method("GET"))
        .and(path("/problem/14716"))
        .respond_with(ResponseTemplate::new(200).set_body_string(long_problem_html(40)))
        .mount(&server)
        .await;
    mount_solved_ac(&server, 200).await;
    // Archived pages are no longer listed as children
    mount_children(&server, json!([])).await;
    mount_create(&server, 2).await;

    Mock::given(method("PATCH"))
        .and(path("/v1/blocks/aaaa1111-bbbb-2222-cccc-3333dddd4444/children"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "object": "error",
            "status": 500,
            "code": "internal_server_error",
            "message": "boom"
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/v1/blocks/aaaa1111-bbbb-2222-cccc-3333dddd4444/children"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/v1/pages/aaaa1111-bbbb-2222-cccc-3333dddd4444"))
        .and(body_partial_json(json!({"archived": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"archived": true})))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&base_url);
    let url = format!("{}/problem/14716", base_url);

    let first = run_pipeline(&config, &url).await;
    assert!(matches!(first, Err(BojError::Notion(_))));

    let second = run_pipeline(&config, &url).await.expect("Rerun failed");
    assert!(!second.is_duplicate());
}

#[tokio::test]
async fn test_page_fetch_failure_is_fatal() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    Mock::given(method("GET"))
        .and(path("/problem/14716"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    mount_create(&server, 0).await;

    let config = create_test_config(&base_url);
    let result = run_pipeline(&config, &format!("{}/problem/14716", base_url)).await;

    assert!(matches!(result, Err(BojError::Fetch(_))));
}

#[tokio::test]
async fn test_url_without_problem_number_makes_no_requests() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    let config = create_test_config(&base_url);
    let result = run_pipeline(&config, &format!("{}/problemset", base_url)).await;

    assert!(matches!(
        result,
        Err(BojError::Url(UrlError::MissingProblemId(_)))
    ));
    let requests = server.received_requests().await.expect("Request recording disabled");
    assert!(requests.is_empty());
}
