use crate::models::news::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Stars,
    Updated,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Stars => "stars",
            SortKey::Updated => "updated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: &'static str,
    pub sort: SortKey,
}

pub const DEFAULT_VIEW: View = View::DevOps;

const fn route(view: View, q: &'static str, sort: SortKey) -> (View, SearchQuery) {
    (view, SearchQuery { q, sort })
}

const ROUTES: [(View, SearchQuery); 6] = [
    route(View::DevOps, "topic:devops", SortKey::Stars),
    route(View::MLOps, "topic:mlops", SortKey::Stars),
    route(View::DataOps, "topic:dataops", SortKey::Stars),
    route(View::Latest, "topic:devops,mlops,dataops", SortKey::Updated),
    route(View::Tutorials, "topic:devops-tutorial,mlops-tutorial", SortKey::Updated),
    route(View::Resources, "topic:devops-resources,mlops-resources", SortKey::Updated),
];

pub fn query_for(view: View) -> SearchQuery {
    ROUTES
        .iter()
        .find(|(v, _)| *v == view)
        .or_else(|| ROUTES.iter().find(|(v, _)| *v == DEFAULT_VIEW))
        .map(|(_, query)| *query)
        .unwrap_or(ROUTES[0].1)
}
