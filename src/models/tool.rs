use serde::{Deserialize, Serialize};

use crate::models::news::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
}

fn tool(
    id: &str,
    name: &str,
    description: &str,
    category: Category,
    url: &str,
    stars: u64,
) -> Tool {
    Tool {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        url: url.to_string(),
        stars: Some(stars),
    }
}

/// Seed list shown until a remote tool fetch has produced something.
pub fn builtin_tools() -> Vec<Tool> {
    vec![
        tool(
            "1",
            "Kubernetes",
            "Container orchestration platform",
            Category::DevOps,
            "https://kubernetes.io",
            98000,
        ),
        tool(
            "2",
            "TensorFlow",
            "Open source machine learning framework",
            Category::MLOps,
            "https://tensorflow.org",
            171000,
        ),
        tool(
            "3",
            "Apache Airflow",
            "Platform to programmatically author, schedule and monitor workflows",
            Category::DataOps,
            "https://airflow.apache.org",
            29000,
        ),
        tool(
            "4",
            "Jenkins",
            "Open source automation server",
            Category::DevOps,
            "https://jenkins.io",
            20000,
        ),
        tool(
            "5",
            "MLflow",
            "Platform for ML lifecycle",
            Category::MLOps,
            "https://mlflow.org",
            14000,
        ),
        tool(
            "6",
            "dbt",
            "Data transformation tool",
            Category::DataOps,
            "https://www.getdbt.com",
            7000,
        ),
    ]
}

pub fn builtin_tools_for(category: Option<Category>) -> Vec<Tool> {
    builtin_tools()
        .into_iter()
        .filter(|t| category.map_or(true, |c| t.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tools_filter_by_category() {
        let mlops = builtin_tools_for(Some(Category::MLOps));
        let names: Vec<_> = mlops.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["TensorFlow", "MLflow"]);
        assert_eq!(builtin_tools_for(None).len(), 6);
    }
}
