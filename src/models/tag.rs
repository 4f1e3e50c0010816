use serde::{Deserialize, Serialize};

/// A tag chip in the filter bar. `selected` is the only field that ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default)]
    pub selected: bool,
}

impl TagFilter {
    pub fn new(id: &str, name: &str, count: Option<u32>, selected: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            count,
            selected,
        }
    }
}

pub fn default_tags() -> Vec<TagFilter> {
    vec![
        TagFilter::new("1", "Kubernetes", Some(42), false),
        TagFilter::new("2", "TensorFlow", Some(28), false),
        TagFilter::new("3", "Apache Airflow", Some(15), false),
        TagFilter::new("4", "Docker", Some(35), false),
        TagFilter::new("5", "Jenkins", Some(23), false),
        TagFilter::new("6", "GitLab", Some(19), false),
        TagFilter::new("7", "Prometheus", Some(12), false),
        TagFilter::new("8", "PyTorch", Some(25), false),
    ]
}

/// Flips the flag of the tag with `tag_id`. Returns false when no tag matched.
pub fn toggle(tags: &mut [TagFilter], tag_id: &str) -> bool {
    match tags.iter_mut().find(|t| t.id == tag_id) {
        Some(tag) => {
            tag.selected = !tag.selected;
            true
        }
        None => false,
    }
}

pub fn selected_names(tags: &[TagFilter]) -> Vec<String> {
    tags.iter()
        .filter(|t| t.selected)
        .map(|t| t.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_only_matching_tag() {
        let mut tags = default_tags();
        assert!(toggle(&mut tags, "4"));
        assert_eq!(selected_names(&tags), vec!["Docker"]);

        assert!(toggle(&mut tags, "1"));
        assert_eq!(selected_names(&tags), vec!["Kubernetes", "Docker"]);

        assert!(toggle(&mut tags, "4"));
        assert_eq!(selected_names(&tags), vec!["Kubernetes"]);
    }

    #[test]
    fn toggle_unknown_id_changes_nothing() {
        let mut tags = default_tags();
        assert!(!toggle(&mut tags, "99"));
        assert_eq!(tags, default_tags());
    }
}
