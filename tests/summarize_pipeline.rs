// file: tests/summarize_pipeline.rs
// description: end-to-end tests of the summarization pipeline against mocked services
// reference: https://docs.rs/wiremock

use helpdesk_summarize::{
    Config, ConfluenceConfig, OpenAiConfig, PipelineConfig, SummarizePipeline, VisionConfig,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server_uri: &str) -> Config {
    Config {
        confluence: ConfluenceConfig {
            base_url: server_uri.to_string(),
            username: "svc-helpdesk".to_string(),
            api_token: "token".to_string(),
        },
        vision: VisionConfig {
            endpoint: server_uri.to_string(),
            api_key: "key".to_string(),
        },
        openai: OpenAiConfig {
            endpoint: server_uri.to_string(),
            api_key: "key".to_string(),
            api_version: "2023-05-15".to_string(),
            deployment: "gpt-35-turbo".to_string(),
        },
        pipeline: PipelineConfig {
            image_workers: 5,
            search_limit: 10,
            request_timeout_secs: 5,
            intake_temperature: 0.2,
        },
    }
}

fn chat_response(content: &str) -> serde_json::Value {
    json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
}

const CHAT_PATH: &str = "/openai/deployments/gpt-35-turbo/chat/completions";
const VISION_PATH: &str = "/vision/v3.2/describe";

#[tokio::test]
async fn no_search_results_short_circuits_before_summarization() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let pipeline = SummarizePipeline::new(&test_config(&server.uri())).unwrap();
    let output = pipeline.summarize_software("Widget").await;

    assert_eq!(output, "No Confluence pages found for 'Widget'.");
}

#[tokio::test]
async fn failed_search_is_treated_as_no_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let pipeline = SummarizePipeline::new(&test_config(&server.uri())).unwrap();
    let output = pipeline.summarize_software("Widget").await;

    assert_eq!(output, "No Confluence pages found for 'Widget'.");
}

#[tokio::test]
async fn single_page_without_attachments_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "id": "101",
                "title": "Zoom Setup",
                "body": {"view": {"value": "<h1>Zoom Setup</h1><p>Install the Zoom client and sign in.</p>"}}
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/101/child/attachment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    // The summarizer must receive the page's title and normalized text.
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(body_string_contains("Page Title: Zoom Setup"))
        .and(body_string_contains("Install the Zoom client and sign in."))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(
            "Zoom is a video conferencing tool. Install the client to get started.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = SummarizePipeline::new(&test_config(&server.uri())).unwrap();
    let output = pipeline.summarize_software("Zoom").await;

    assert_eq!(
        output,
        "Zoom is a video conferencing tool. Install the client to get started."
    );
}

#[tokio::test]
async fn failed_downloads_become_failure_captions_without_dropping_siblings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "id": "202",
                "title": "Architecture Overview",
                "body": {"view": {"value": "<p>System diagrams below.</p>"}}
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/202/child/attachment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"title": "a.png", "_links": {"download": "/download/attachments/202/a.png"}},
                {"title": "b.png", "_links": {"download": "/download/attachments/202/b.png"}},
                {"title": "broken.png", "_links": {"download": "/download/attachments/202/broken.png"}}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/download/attachments/202/a.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PNG-A".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/download/attachments/202/b.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PNG-B".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/download/attachments/202/broken.png"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    // Only the two successful downloads reach the vision service.
    Mock::given(method("POST"))
        .and(path(VISION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "description": {"captions": [{"text": "a screenshot", "confidence": 0.9}]}
        })))
        .expect(2)
        .mount(&server)
        .await;

    // One caption block per attachment, failure sentinel included.
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(body_string_contains("Image 'a.png' described as: a screenshot"))
        .and(body_string_contains("Image 'b.png' described as: a screenshot"))
        .and(body_string_contains("Failed to analyze image 'broken.png'."))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("SUMMARY")))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = SummarizePipeline::new(&test_config(&server.uri())).unwrap();
    let output = pipeline.summarize_software("Architecture").await;

    assert_eq!(output, "SUMMARY");
}

#[tokio::test]
async fn empty_caption_list_yields_no_description_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "id": "303",
                "title": "Login Guide",
                "body": {"view": {"value": "<p>See screenshot.</p>"}}
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/303/child/attachment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"title": "login.png", "_links": {"download": "/download/attachments/303/login.png"}}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/download/attachments/303/login.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PNG-LOGIN".to_vec()))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(VISION_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"description": {"captions": []}})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(body_string_contains(
            "Image 'login.png' described as: No description available.",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("SUMMARY")))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = SummarizePipeline::new(&test_config(&server.uri())).unwrap();
    let output = pipeline.summarize_software("Login").await;

    assert_eq!(output, "SUMMARY");
}

#[tokio::test]
async fn summarizer_failure_degrades_to_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "id": "404",
                "title": "Flaky Service",
                "body": {"view": {"value": "<p>Content.</p>"}}
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/404/child/attachment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let pipeline = SummarizePipeline::new(&test_config(&server.uri())).unwrap();
    let output = pipeline.summarize_software("Flaky").await;

    assert_eq!(output, "An error occurred while generating the summary.");
}
