use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde_json::from_str;
use tracing::{debug, info, warn};

use crate::{
    models::{
        cache::FetchCache,
        error::FetchError,
        github::{Repository, SearchResponse},
        news::{normalize_key, NewsItem, View},
        tool::Tool,
    },
    utils::{category_routes::query_for, config::Config},
};

pub const NEWS_LIMIT: usize = 10;
pub const TOOLS_LIMIT: usize = 5;
pub const MISSING_DESCRIPTION: &str = "No description available";
pub const NEWS_SOURCE: &str = "GitHub";

/// Anything that can produce news and tool batches for a category.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_news(&self, category: &str) -> Vec<NewsItem>;
    async fn fetch_tools(&self, category: &str) -> Vec<Tool>;
}

pub struct GithubClient {
    http_client: Client,
    api_url: String,
    user_agent: String,
    news_cache: FetchCache<Vec<NewsItem>>,
    tools_cache: FetchCache<Vec<Tool>>,
}

impl GithubClient {
    pub fn new(http_client: Client, config: &Config) -> Self {
        let ttl = config.cache_ttl();
        Self {
            http_client,
            api_url: config.github_api_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            news_cache: FetchCache::new(ttl),
            tools_cache: FetchCache::new(ttl),
        }
    }

    async fn search(&self, view: View, limit: usize) -> Result<Vec<Repository>, FetchError> {
        let query = query_for(view);
        let per_page = limit.to_string();
        let res = self
            .http_client
            .get(format!("{}/search/repositories", self.api_url))
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/vnd.github+json")
            .query(&[
                ("q", query.q),
                ("sort", query.sort.as_str()),
                ("order", "desc"),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = res.text().await?;
        let mut parsed: SearchResponse = from_str(&body)?;
        parsed.items.truncate(limit);
        Ok(parsed.items)
    }
}

pub fn to_news_item(view: View, repo: Repository) -> NewsItem {
    NewsItem {
        id: repo.id.to_string(),
        category: view.category_for(&repo.topics),
        title: repo.name,
        description: repo
            .description
            .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
        source: NEWS_SOURCE.to_string(),
        tags: repo.topics,
        image_url: format!("https://picsum.photos/seed/{}/400/200", repo.id),
        link: repo.html_url,
        date: repo.updated_at.date_naive(),
    }
}

pub fn to_tool(view: View, repo: Repository) -> Tool {
    Tool {
        id: repo.id.to_string(),
        category: view.category_for(&repo.topics),
        name: repo.name,
        description: repo
            .description
            .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
        url: repo.html_url,
        stars: Some(repo.stargazers_count),
    }
}

#[async_trait]
impl NewsSource for GithubClient {
    async fn fetch_news(&self, category: &str) -> Vec<NewsItem> {
        let key = normalize_key(category);
        if let Some(cached) = self.news_cache.get(&key) {
            debug!(category = %key, "news cache hit");
            return cached;
        }

        let view = View::parse(&key);
        match self.search(view, NEWS_LIMIT).await {
            Ok(repos) => {
                let items: Vec<NewsItem> = repos
                    .into_iter()
                    .map(|repo| to_news_item(view, repo))
                    .collect();
                info!(category = %key, count = items.len(), "fetched news");
                self.news_cache.put(&key, items.clone(), Utc::now());
                items
            }
            Err(e) => {
                warn!(category = %key, error = %e, "error fetching news");
                self.news_cache.get_stale(&key).unwrap_or_default()
            }
        }
    }

    async fn fetch_tools(&self, category: &str) -> Vec<Tool> {
        let key = normalize_key(category);
        if let Some(cached) = self.tools_cache.get(&key) {
            debug!(category = %key, "tools cache hit");
            return cached;
        }

        let view = View::parse(&key);
        match self.search(view, TOOLS_LIMIT).await {
            Ok(repos) => {
                let tools: Vec<Tool> = repos.into_iter().map(|repo| to_tool(view, repo)).collect();
                info!(category = %key, count = tools.len(), "fetched tools");
                self.tools_cache.put(&key, tools.clone(), Utc::now());
                tools
            }
            Err(e) => {
                warn!(category = %key, error = %e, "error fetching tools");
                self.tools_cache.get_stale(&key).unwrap_or_default()
            }
        }
    }
}
