use crate::types::Identity;

/// Finds the first identity whose handle equals `token` ignoring case, or whose id equals it
/// exactly. Both predicates are checked per entry, so directory order decides between them.
/// An empty token never matches.
pub fn find_identity<'a>(identities: &'a [Identity], token: &str) -> Option<&'a Identity> {
    if token.is_empty() {
        return None;
    }
    let folded = token.to_lowercase();
    identities
        .iter()
        .find(|identity| identity.handle.to_lowercase() == folded || identity.id == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<Identity> {
        vec![
            Identity::new("alice", "alice-id", "Alice Smith"),
            Identity::new("bob", "U002", "Bob Jones"),
        ]
    }

    #[test]
    fn test_handle_match_ignores_case() {
        let identities = directory();
        let found = find_identity(&identities, "Alice").unwrap();
        assert_eq!(found.id, "alice-id");
    }

    #[test]
    fn test_id_match_is_exact() {
        let identities = directory();
        assert!(find_identity(&identities, "ALICE-ID").is_none());
        assert_eq!(find_identity(&identities, "alice-id").unwrap().handle, "alice");
        assert_eq!(find_identity(&identities, "U002").unwrap().handle, "bob");
        assert!(find_identity(&identities, "u002").is_none());
    }

    #[test]
    fn test_directory_order_decides_between_predicates() {
        // "carol" is the id of the first entry and the handle of the second
        let identities = vec![
            Identity::new("mallory", "carol", "Mallory"),
            Identity::new("carol", "U003", "Carol White"),
        ];
        assert_eq!(find_identity(&identities, "carol").unwrap().handle, "mallory");
    }

    #[test]
    fn test_empty_token_never_matches() {
        let identities = vec![Identity::new("", "", "Nameless"), Identity::new("", "U0", "Blank")];
        assert!(find_identity(&identities, "").is_none());
    }

    #[test]
    fn test_no_partial_matches() {
        let identities = directory();
        assert!(find_identity(&identities, "ali").is_none());
        assert!(find_identity(&identities, "").is_none());
    }
}
