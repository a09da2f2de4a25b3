//! Property tests for the ordering, deduplication and purity guarantees of
//! the user queries.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use user_query::{Privilege, User, query};

fn privilege_strategy() -> impl Strategy<Value = Privilege> {
    prop::sample::select(Privilege::ALL.to_vec())
}

fn user_strategy() -> impl Strategy<Value = User> {
    (
        "[A-E][a-c]{0,2}",
        prop::sample::select(vec!["Doe", "doe", "Roe", "Poe", "POE"]),
        0_u32..90,
        prop::collection::vec(privilege_strategy(), 0..6),
    )
        .prop_map(|(first, last, age, privileges)| {
            User::new(first, last, age, privileges).expect("generated names are never blank")
        })
}

fn users_strategy() -> impl Strategy<Value = Vec<User>> {
    prop::collection::vec(user_strategy(), 0..24)
}

proptest! {
    #[test]
    fn sorted_ages_never_increase(users in users_strategy()) {
        let sorted = query::sort_by_age_desc_and_name_asc(&users);

        prop_assert_eq!(sorted.len(), users.len());
        for pair in sorted.windows(2) {
            let [older, younger] = pair else { continue };
            prop_assert!(older.age() >= younger.age());
            if older.age() == younger.age() {
                prop_assert!(older.first_name() <= younger.first_name());
            }
        }
    }

    #[test]
    fn distinct_privileges_are_the_union(users in users_strategy()) {
        let distinct = query::all_distinct_privileges(&users);
        let unique: BTreeSet<_> = distinct.iter().copied().collect();
        let union: BTreeSet<_> = users
            .iter()
            .flat_map(|user| user.privileges().iter())
            .collect();

        prop_assert_eq!(unique.len(), distinct.len());
        prop_assert_eq!(unique, union);
    }

    #[test]
    fn privilege_groups_cover_every_privilege(users in users_strategy()) {
        let groups = query::group_by_privileges(&users);

        prop_assert!(groups.keys().copied().eq(Privilege::ALL));
        for (privilege, members) in &groups {
            prop_assert!(members.iter().all(|user| user.privileges().contains(*privilege)));
            let holders = users
                .iter()
                .filter(|user| user.privileges().contains(*privilege))
                .count();
            prop_assert_eq!(members.len(), holders);
        }
    }

    #[test]
    fn count_groups_partition_the_input(users in users_strategy()) {
        let groups = query::group_by_count_of_privileges(&users);

        let grouped: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(grouped, users.len());
        for (count, members) in &groups {
            prop_assert!(members.iter().all(|user| user.privileges().len() == *count));
        }
    }

    #[test]
    fn filtering_without_predicates_is_identity(users in users_strategy()) {
        let kept = query::filter_by(&users, &[]);
        prop_assert!(kept.into_iter().eq(users.iter()));
    }

    #[test]
    fn last_name_counts_sum_to_input_length(users in users_strategy()) {
        let counts = query::number_of_last_names(&users);
        let total: u64 = counts.values().sum();
        prop_assert_eq!(total, u64::try_from(users.len()).expect("small input"));
    }

    #[test]
    fn negative_threshold_finds_the_first_updater(users in users_strategy(), threshold in -90_i64..0) {
        let expected = users
            .iter()
            .find(|user| user.privileges().contains(Privilege::Update));
        prop_assert_eq!(query::update_user_with_age_higher_than(&users, threshold), expected);
    }

    #[test]
    fn distinct_privileges_follow_first_occurrence(users in users_strategy()) {
        let distinct = query::all_distinct_privileges(&users);
        let mut ordered: Vec<Privilege> = Vec::new();
        for privilege in users.iter().flat_map(|user| user.privileges().iter()) {
            if !ordered.contains(&privilege) {
                ordered.push(privilege);
            }
        }
        prop_assert_eq!(distinct, ordered);
    }

    #[test]
    fn queries_are_idempotent(users in users_strategy(), threshold in -5_i64..90) {
        prop_assert_eq!(
            query::first_names_reverse_sorted(&users),
            query::first_names_reverse_sorted(&users)
        );
        prop_assert_eq!(
            query::most_frequent_last_name(&users),
            query::most_frequent_last_name(&users)
        );
        prop_assert_eq!(
            query::update_user_with_age_higher_than(&users, threshold),
            query::update_user_with_age_higher_than(&users, threshold)
        );
        prop_assert_eq!(
            query::join_last_names(&users, ";"),
            query::join_last_names(&users, ";")
        );
        let first = query::average_age_for_users(&users);
        let second = query::average_age_for_users(&users);
        prop_assert!(first.to_bits() == second.to_bits());
    }
}
