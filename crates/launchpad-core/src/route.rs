//! Navigation paths for the project pages

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ProjectId;

/// Listing overview, the target of the back button
pub const PROJECTS_ROUTE: &str = "/projects";

static PROJECT_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/projects/([^/?#\s]+)/?(?:[?#].*)?$").expect("Invalid project path regex")
});

static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("Invalid project id regex"));

/// Extract the project id from a navigation path.
///
/// Accepts `/projects/<id>` (with optional trailing slash, query or fragment)
/// or a bare id. Anything else yields `None`.
pub fn parse_project_route(path: &str) -> Option<ProjectId> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }

    if path.starts_with('/') {
        let captures = PROJECT_PATH.captures(path)?;
        return ProjectId::parse(captures.get(1)?.as_str());
    }

    if BARE_ID.is_match(path) {
        return ProjectId::parse(path);
    }

    None
}

/// Build the navigation path for a project
pub fn project_route(id: &ProjectId) -> String {
    format!("{}/{}", PROJECTS_ROUTE, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(route: &str) -> Option<String> {
        parse_project_route(route).map(|p| p.as_str().to_string())
    }

    #[test]
    fn test_parse_full_path() {
        assert_eq!(id("/projects/p1"), Some("p1".to_string()));
        assert_eq!(id("/projects/p1/"), Some("p1".to_string()));
        assert_eq!(id("/projects/42?tab=pool"), Some("42".to_string()));
        assert_eq!(id("  /projects/nebula.near  "), Some("nebula.near".to_string()));
    }

    #[test]
    fn test_parse_bare_id() {
        assert_eq!(id("p1"), Some("p1".to_string()));
        assert_eq!(id("17"), Some("17".to_string()));
    }

    #[test]
    fn test_missing_id_degrades_to_none() {
        assert_eq!(id(""), None);
        assert_eq!(id("/projects"), None);
        assert_eq!(id("/projects/"), None);
        assert_eq!(id("/projects/p1/extra"), None);
        assert_eq!(id("/settings"), None);
        assert_eq!(id("not an id"), None);
    }

    #[test]
    fn test_project_route_round_trip() {
        let project = ProjectId::parse("p9").unwrap();
        let route = project_route(&project);
        assert_eq!(route, "/projects/p9");
        assert_eq!(parse_project_route(&route), Some(project));
    }
}
