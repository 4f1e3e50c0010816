use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Topic category a card or tool belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    DevOps,
    MLOps,
    DataOps,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::DevOps, Category::MLOps, Category::DataOps];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DevOps => "DevOps",
            Category::MLOps => "MLOps",
            Category::DataOps => "DataOps",
        }
    }

    /// Picks the category named by the first matching topic, e.g. `mlops-tutorial`.
    pub fn from_topics(topics: &[String]) -> Option<Category> {
        topics.iter().find_map(|topic| {
            let topic = topic.to_lowercase();
            if topic.starts_with("mlops") {
                Some(Category::MLOps)
            } else if topic.starts_with("dataops") {
                Some(Category::DataOps)
            } else if topic.starts_with("devops") {
                Some(Category::DevOps)
            } else {
                None
            }
        })
    }
}

/// Browse route selected in the sidebar. The three primary views map onto a
/// [`Category`]; the auxiliary ones only steer query routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Latest,
    DevOps,
    MLOps,
    DataOps,
    Tutorials,
    Resources,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Latest,
        View::DevOps,
        View::MLOps,
        View::DataOps,
        View::Tutorials,
        View::Resources,
    ];

    /// Parses a category string case-insensitively. Anything unrecognised
    /// takes the DevOps route.
    pub fn parse(category: &str) -> View {
        match normalize_key(category).as_str() {
            "latest" => View::Latest,
            "devops" => View::DevOps,
            "mlops" => View::MLOps,
            "dataops" => View::DataOps,
            "tutorials" => View::Tutorials,
            "resources" => View::Resources,
            _ => View::DevOps,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            View::Latest => "latest",
            View::DevOps => "devops",
            View::MLOps => "mlops",
            View::DataOps => "dataops",
            View::Tutorials => "tutorials",
            View::Resources => "resources",
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            View::DevOps => Some(Category::DevOps),
            View::MLOps => Some(Category::MLOps),
            View::DataOps => Some(Category::DataOps),
            View::Latest | View::Tutorials | View::Resources => None,
        }
    }

    /// Category stamped on records fetched for this view.
    pub fn category_for(&self, topics: &[String]) -> Category {
        self.category()
            .or_else(|| Category::from_topics(topics))
            .unwrap_or(Category::DevOps)
    }
}

/// Cache key form of a category string.
pub fn normalize_key(category: &str) -> String {
    category.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub image_url: String,
    pub link: String,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(View::parse("MLOps"), View::MLOps);
        assert_eq!(View::parse("  DataOps "), View::DataOps);
        assert_eq!(View::parse("LATEST"), View::Latest);
    }

    #[test]
    fn unknown_view_routes_to_devops() {
        assert_eq!(View::parse("gardening"), View::DevOps);
        assert_eq!(View::parse(""), View::DevOps);
    }

    #[test]
    fn auxiliary_views_infer_category_from_topics() {
        let topics = vec!["python".to_string(), "mlops-tutorial".to_string()];
        assert_eq!(View::Tutorials.category_for(&topics), Category::MLOps);
        assert_eq!(View::Latest.category_for(&[]), Category::DevOps);
        assert_eq!(View::DataOps.category_for(&topics), Category::DataOps);
    }

    #[test]
    fn news_item_serializes_date_without_time() {
        let item = NewsItem {
            id: "1".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            source: "GitHub".to_string(),
            category: Category::MLOps,
            tags: vec![],
            image_url: "i".to_string(),
            link: "l".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["category"], "MLOps");
        assert_eq!(json["imageUrl"], "i");
    }
}
