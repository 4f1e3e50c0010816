use std::sync::Arc;

use reqwest::Client;

use crate::{
    models::news::View,
    utils::{
        config::Config, controller::FeedController, github_client::GithubClient,
        theme_store::ThemeStore,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub github: Arc<GithubClient>,
    pub controller: Arc<FeedController>,
    pub theme: ThemeStore,
}

impl AppState {
    pub fn init(config: Config) -> Self {
        let http_client = Client::new();
        let github = Arc::new(GithubClient::new(http_client, &config));
        let controller = Arc::new(FeedController::new(
            github.clone(),
            config.page_size,
            View::parse(&config.initial_category),
        ));
        let theme = ThemeStore::new(&config.theme_store_path);
        AppState {
            github,
            controller,
            theme,
        }
    }
}
