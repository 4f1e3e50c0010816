use crate::models::news::NewsItem;

fn matches_search(item: &NewsItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

fn matches_any_tag(item: &NewsItem, selected: &[String]) -> bool {
    item.tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        selected.iter().any(|s| s.to_lowercase() == tag)
    })
}

/// Computes the visible subset of `items`, always from the list it is given.
///
/// A non-blank `search_term` keeps items whose title, description or any tag
/// contains it as typed, ignoring case. A non-empty `selected_tags` keeps
/// items carrying at least one of those tags. Both criteria must hold when both are given.
/// Order is preserved.
pub fn filter_items(
    items: &[NewsItem],
    search_term: &str,
    selected_tags: &[String],
) -> Vec<NewsItem> {
    let blank = search_term.trim().is_empty();
    if blank && selected_tags.is_empty() {
        return items.to_vec();
    }
    let needle = search_term.to_lowercase();

    items
        .iter()
        .filter(|item| blank || matches_search(item, &needle))
        .filter(|item| selected_tags.is_empty() || matches_any_tag(item, selected_tags))
        .cloned()
        .collect()
}
