use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{LanguageColorMap, Owner, RepoItem, SearchResult};

/// A page of the repository search API, as received.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoItemsSearchResponse {
    /// The total number of matching repositories.
    #[serde(default)]
    pub total_count: u64,

    /// Whether the search timed out before collecting every match.
    #[serde(default)]
    pub incomplete_results: bool,

    /// The repositories of the page, absent when the API omits them.
    pub items: Option<Vec<RawRepoItem>>,
}

/// A repository of the search API, as received.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawRepoItem {
    pub id: u64,
    pub full_name: String,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub owner: RawOwner,
    pub updated_at: DateTime<Utc>,
}

/// The owner of a repository of the search API, as received.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawOwner {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
}

impl RepoItemsSearchResponse {
    /// Merges the page with the language colors into an ordered search result.
    ///
    /// Missing items yield an empty result. Languages absent from `colors`
    /// leave `language_color` unset.
    pub fn into_search_result(self, colors: &LanguageColorMap) -> SearchResult {
        SearchResult(
            self.items
                .unwrap_or_default()
                .into_iter()
                .map(|item| item.into_repo_item(colors))
                .collect(),
        )
    }
}

impl RawRepoItem {
    fn into_repo_item(self, colors: &LanguageColorMap) -> RepoItem {
        RepoItem {
            language_color: colors.color_of(self.language.as_deref()),
            id: self.id,
            full_name: self.full_name,
            language: self.language,
            star_count: self.stargazers_count,
            name: self.name,
            description: self.description,
            html_url: self.html_url,
            owner: self.owner.into(),
            updated_at: self.updated_at,
        }
    }

    /// Creates a dummy `RawRepoItem` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(id: u64, language: Option<&str>) -> Self {
        Self {
            id,
            full_name: format!("org-1/repository-{id}"),
            language: language.map(str::to_string),
            stargazers_count: 10,
            name: format!("repository-{id}"),
            description: None,
            html_url: format!("https://github.com/org-1/repository-{id}"),
            owner: RawOwner {
                id: 1,
                login: "org-1".to_string(),
                avatar_url: "https://avatars.githubusercontent.com/u/1".to_string(),
            },
            updated_at: DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }
}

impl From<RawOwner> for Owner {
    fn from(owner: RawOwner) -> Self {
        Self {
            id: owner.id,
            username: owner.login,
            avatar_url: owner.avatar_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::ArgbColor;

    use super::*;

    fn kotlin_colors() -> LanguageColorMap {
        LanguageColorMap::from_iter([(
            "Kotlin".to_string(),
            ArgbColor::from_rgb(0x7F, 0x52, 0xFF),
        )])
    }

    #[test]
    fn merge_resolves_known_language_color() {
        let response = RepoItemsSearchResponse {
            items: Some(vec![RawRepoItem::dummy(1, Some("Kotlin"))]),
            ..Default::default()
        };

        let result = response.into_search_result(&kotlin_colors());

        assert_eq!(1, result.len());
        assert_eq!(1, result[0].id);
        assert_eq!(Some("Kotlin"), result[0].language.as_deref());
        assert_eq!(
            "#7F52FF",
            result[0].language_color.unwrap().to_string()
        );
    }

    #[test]
    fn merge_leaves_unknown_language_without_color() {
        let response = RepoItemsSearchResponse {
            items: Some(vec![
                RawRepoItem::dummy(2, Some("COBOL")),
                RawRepoItem::dummy(3, None),
            ]),
            ..Default::default()
        };

        let result = response.into_search_result(&kotlin_colors());

        assert_eq!(2, result.len());
        assert_eq!(None, result[0].language_color);
        assert_eq!(None, result[1].language_color);
    }

    #[test]
    fn merge_absent_items_into_empty_result() {
        let response = RepoItemsSearchResponse::default();

        let result = response.into_search_result(&kotlin_colors());

        assert!(result.is_empty());
    }

    #[test]
    fn merge_preserves_order_and_maps_owner() {
        let response = RepoItemsSearchResponse {
            items: Some(vec![
                RawRepoItem::dummy(3, Some("Kotlin")),
                RawRepoItem::dummy(1, None),
                RawRepoItem::dummy(2, Some("Rust")),
            ]),
            ..Default::default()
        };

        let result = response.into_search_result(&kotlin_colors());

        assert_eq!(
            vec![3, 1, 2],
            result.iter().map(|item| item.id).collect::<Vec<_>>()
        );
        assert_eq!("org-1", result[0].owner.username);
        assert_eq!(10, result[0].star_count);
    }

    #[test]
    fn decode_search_page() {
        let response: RepoItemsSearchResponse = serde_json::from_value(json!({
            "total_count": 1,
            "incomplete_results": false,
            "items": [
                {
                    "id": 1,
                    "name": "kotlin",
                    "full_name": "JetBrains/kotlin",
                    "language": "Kotlin",
                    "stargazers_count": 48000,
                    "description": null,
                    "html_url": "https://github.com/JetBrains/kotlin",
                    "owner": {
                        "id": 878437,
                        "login": "JetBrains",
                        "avatar_url": "https://avatars.githubusercontent.com/u/878437?v=4"
                    },
                    "updated_at": "2025-01-01T00:00:00Z",
                    "forks_count": 5600
                }
            ]
        }))
        .unwrap();

        let items = response.items.unwrap();
        assert_eq!(1, items.len());
        assert_eq!("JetBrains", items[0].owner.login);
        assert_eq!(48000, items[0].stargazers_count);
    }

    #[test]
    fn decode_search_page_without_items() {
        let response: RepoItemsSearchResponse =
            serde_json::from_value(json!({ "total_count": 0, "incomplete_results": false }))
                .unwrap();

        assert_eq!(None, response.items);
    }
}
