use std::collections::{BTreeMap, HashMap};

use fame_config::{
    export_into, exported, validate, BACKEND_URL, EXPORT_KEYS, GITHUB_REPO_URL,
};
use pretty_assertions::assert_eq;

#[test]
fn deployed_values() {
    assert_eq!(BACKEND_URL, "https://fame-rkomi98.onrender.com");
    assert_eq!(GITHUB_REPO_URL, "https://github.com/rkomi98/FAME");
}

#[test]
fn values_are_http_urls() {
    for url in [BACKEND_URL, GITHUB_REPO_URL] {
        assert!(!url.is_empty());
        assert!(url.starts_with("http://") || url.starts_with("https://"), "{url}");
    }
    validate().unwrap();
}

#[test]
fn export_has_exactly_the_two_keys() {
    let mut map: HashMap<String, String> = HashMap::new();
    assert!(export_into(Some(&mut map)));

    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["BackendURL", "GitHubRepoURL"]);
    assert_eq!(map["BackendURL"], BACKEND_URL);
    assert_eq!(map["GitHubRepoURL"], GITHUB_REPO_URL);
}

#[test]
fn no_registry_creates_nothing() {
    let registry: Option<&mut HashMap<String, String>> = None;
    assert!(!export_into(registry));

    assert_eq!(BACKEND_URL, "https://fame-rkomi98.onrender.com");
    assert_eq!(GITHUB_REPO_URL, "https://github.com/rkomi98/FAME");
}

#[test]
fn exporting_twice_is_stable() {
    let first = exported();
    let second = exported();
    assert_eq!(first, second);

    let mut map = BTreeMap::new();
    export_into(Some(&mut map));
    export_into(Some(&mut map));
    assert_eq!(map, first);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), EXPORT_KEYS.to_vec());
}
