use news_dispatch::models::news::Category;
use news_dispatch::utils::config::Config;
use news_dispatch::utils::github_client::{GithubClient, NewsSource};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GithubClient {
    let config = Config {
        github_api_url: server.uri(),
        ..Config::default()
    };
    GithubClient::new(reqwest::Client::new(), &config)
}

fn repo(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "topics": ["devops", "docker"],
        "html_url": format!("https://github.com/example/{name}"),
        "stargazers_count": 100 + id,
        "updated_at": "2024-05-06T10:11:12Z"
    })
}

fn search_body(count: u64) -> Value {
    let items: Vec<Value> = (1..=count).map(|i| repo(i, &format!("repo{i}"))).collect();
    json!({ "total_count": count, "items": items })
}

#[tokio::test]
async fn fetch_news_maps_a_single_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("q", "topic:mlops"))
        .and(query_param("sort", "stars"))
        .and(query_param("order", "desc"))
        .and(header("user-agent", "news-dispatch/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": 7,
                "name": "TF",
                "description": null,
                "topics": ["ml"],
                "html_url": "https://x",
                "stargazers_count": 10,
                "updated_at": "2024-01-01T00:00:00Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let news = client.fetch_news("mlops").await;

    assert_eq!(news.len(), 1);
    let item = &news[0];
    assert_eq!(item.id, "7");
    assert_eq!(item.title, "TF");
    assert_eq!(item.description, "No description available");
    assert_eq!(item.category, Category::MLOps);
    assert_eq!(item.date.to_string(), "2024-01-01");
    assert_eq!(item.link, "https://x");
    assert_eq!(item.tags, vec!["ml"]);
}

#[tokio::test]
async fn news_and_tools_are_truncated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(12)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.fetch_news("devops").await.len(), 10);

    let tools = client.fetch_tools("devops").await;
    assert_eq!(tools.len(), 5);
    assert_eq!(tools[0].stars, Some(101));
    assert_eq!(tools[0].url, "https://github.com/example/repo1");
}

#[tokio::test]
async fn fresh_cache_skips_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(3)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.fetch_news("DevOps").await;
    let second = client.fetch_news("devops").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_category_uses_devops_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("q", "topic:devops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(2)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let news = client.fetch_news("woodworking").await;
    assert_eq!(news.len(), 2);
    assert!(news.iter().all(|n| n.category == Category::DevOps));
}

#[tokio::test]
async fn browse_views_sort_by_update_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("sort", "updated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let news = client.fetch_news("latest").await;
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].category, Category::DevOps);
}

#[tokio::test]
async fn failure_without_cache_yields_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.fetch_news("dataops").await.is_empty());
    assert!(client.fetch_tools("dataops").await.is_empty());
}

#[tokio::test]
async fn malformed_body_falls_back_to_stale_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(2)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"items\": 42"))
        .mount(&server)
        .await;

    let config = Config {
        github_api_url: server.uri(),
        cache_ttl_secs: 1,
        ..Config::default()
    };
    let client = GithubClient::new(reqwest::Client::new(), &config);
    let first = client.fetch_news("dataops").await;
    assert_eq!(first.len(), 2);

    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    assert_eq!(client.fetch_news("dataops").await, first);
}

#[tokio::test]
async fn oversized_ttl_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(1)))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        github_api_url: server.uri(),
        cache_ttl_secs: i64::MAX,
        ..Config::default()
    };
    let client = GithubClient::new(reqwest::Client::new(), &config);
    assert_eq!(client.fetch_news("devops").await.len(), 1);
    assert_eq!(client.fetch_news("devops").await.len(), 1);
}
