//! Property-based tests for search filtering and page slicing.
//!
//! The expected results are computed from the rules themselves, never from
//! the functions under test.

use proptest::prelude::*;
use usuarios::{
    api::User,
    table::view::{clamp_page_index, filter, Page},
};

// ===== Helpers =====

fn arbitrary_user() -> impl Strategy<Value = User> {
    (
        proptest::option::of(0i64..300),                 // id
        proptest::option::of("[A-Za-z0-9ÁáÉé ]{0,10}"), // nombre
    )
        .prop_map(|(id, name)| User {
            id,
            display_name: name,
            ..User::default()
        })
}

fn arbitrary_users() -> impl Strategy<Value = Vec<User>> {
    prop::collection::vec(arbitrary_user(), 0..40)
}

fn arbitrary_term() -> impl Strategy<Value = String> {
    "[A-Za-z0-9Éé ]{0,3}"
}

/// Id as text contains the term, or the lowercased name contains the lowercased term.
fn expected_match(user: &User, term: &str) -> bool {
    let by_id = user.id.is_some_and(|id| id.to_string().contains(term));
    let name = user.display_name.clone().unwrap_or_default();
    by_id || name.to_lowercase().contains(&term.to_lowercase())
}

// ===== Property Tests =====

proptest! {
    /// Property: a non-empty term keeps exactly the matching records, in list order
    #[test]
    fn filter_keeps_exactly_the_matching_records(
        users in arbitrary_users(),
        term in arbitrary_term()
    ) {
        let filtered = filter(&users, &term);

        let expected: Vec<&User> = if term.is_empty() {
            users.iter().collect()
        } else {
            users.iter().filter(|u| expected_match(u, &term)).collect()
        };

        prop_assert_eq!(filtered.len(), expected.len());
        for (got, want) in filtered.iter().zip(&expected) {
            prop_assert!(std::ptr::eq(*got, *want), "order or membership differs for term {:?}", term);
        }
    }

    /// Property: an empty term returns the full list unchanged
    #[test]
    fn empty_term_returns_everything(users in arbitrary_users()) {
        let filtered = filter(&users, "");
        prop_assert_eq!(filtered, users.iter().collect::<Vec<_>>());
    }

    /// Property: a slice never exceeds the page size and is full except on the last page
    #[test]
    fn page_slice_length(
        users in arbitrary_users(),
        page_size in 1usize..30,
        page_index in 0usize..15
    ) {
        let all: Vec<&User> = users.iter().collect();
        let page = Page::slice(&all, page_index, page_size);
        let page_count = all.len().div_ceil(page_size);

        prop_assert!(page.rows.len() <= page_size);
        prop_assert_eq!(page.page_count(), page_count);

        if page_index + 1 < page_count {
            prop_assert_eq!(page.rows.len(), page_size);
        } else if page_index + 1 == page_count {
            prop_assert_eq!(page.rows.len(), all.len() - page_index * page_size);
            prop_assert!(!page.rows.is_empty());
        } else {
            prop_assert!(page.rows.is_empty());
        }

        // rows are the records at the slice position
        for (offset, row) in page.rows.iter().enumerate() {
            prop_assert!(std::ptr::eq(*row, all[page_index * page_size + offset]));
        }
    }

    /// Property: clamping keeps a page that still has rows and otherwise goes to page 0
    #[test]
    fn clamp_resets_only_pages_past_the_end(
        total in 0usize..200,
        page_size in 1usize..30,
        page_index in 0usize..50
    ) {
        let clamped = clamp_page_index(page_index, page_size, total);

        if page_index * page_size < total {
            prop_assert_eq!(clamped, page_index);
        } else {
            prop_assert_eq!(clamped, 0);
        }
    }
}
