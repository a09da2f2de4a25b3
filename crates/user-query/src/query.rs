//! Stateless queries over a slice of users.
//!
//! Every function takes the users as a borrowed slice, never mutates them,
//! and returns a freshly built result. Functions that hand back users return
//! references into the input rather than clones.

use std::collections::BTreeMap;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use crate::predicate::{UserPredicate, all_of, has_privilege, older_than};
use crate::privilege::Privilege;
use crate::user::User;

/// Sentinel returned by [`average_age_for_users`] when there are no users.
pub const NO_AVERAGE_AGE: f64 = -1.0;

/// Returns every first name, sorted in descending natural order.
///
/// # Example
///
/// ```
/// use user_query::{User, query};
///
/// let users = [
///     User::new("Bob", "Stone", 30, []).expect("valid user"),
///     User::new("Cleo", "Marsh", 25, []).expect("valid user"),
///     User::new("Ann", "Reed", 41, []).expect("valid user"),
/// ];
///
/// assert_eq!(query::first_names_reverse_sorted(&users), ["Cleo", "Bob", "Ann"]);
/// ```
#[must_use]
pub fn first_names_reverse_sorted(users: &[User]) -> Vec<&str> {
    let mut names: Vec<&str> = users.iter().map(User::first_name).collect();
    names.sort_unstable_by(|left, right| right.cmp(left));
    names
}

/// Orders users by age descending, breaking ties by first name ascending.
///
/// The sort is stable: users equal on both keys keep their input order.
#[must_use]
pub fn sort_by_age_desc_and_name_asc(users: &[User]) -> Vec<&User> {
    let mut sorted: Vec<&User> = users.iter().collect();
    sorted.sort_by(|left, right| {
        right
            .age()
            .cmp(&left.age())
            .then_with(|| left.first_name().cmp(right.first_name()))
    });
    sorted
}

/// Returns the union of all users' privileges in first-seen order.
#[must_use]
pub fn all_distinct_privileges(users: &[User]) -> Vec<Privilege> {
    users
        .iter()
        .flat_map(|user| user.privileges().iter())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Finds the first user older than `age` who holds [`Privilege::Update`].
///
/// A negative `age` accepts users of any age, newborns included.
///
/// # Example
///
/// ```
/// use user_query::{Privilege, User, query};
///
/// let users = [
///     User::new("Ann", "Reed", 41, [Privilege::Read]).expect("valid user"),
///     User::new("Bob", "Stone", 30, [Privilege::Update]).expect("valid user"),
/// ];
///
/// let found = query::update_user_with_age_higher_than(&users, 25);
/// assert_eq!(found.map(User::first_name), Some("Bob"));
/// assert!(query::update_user_with_age_higher_than(&users, 30).is_none());
/// assert!(query::update_user_with_age_higher_than(&users, -1).is_some());
/// ```
#[must_use]
pub fn update_user_with_age_higher_than(users: &[User], age: i64) -> Option<&User> {
    let old_enough = older_than(age);
    let can_update = has_privilege(Privilege::Update);
    users
        .iter()
        .find(|&user| old_enough(user) && can_update(user))
}

/// Groups users by how many privileges they hold.
///
/// Users keep their input order within each group.
#[must_use]
pub fn group_by_count_of_privileges(users: &[User]) -> BTreeMap<usize, Vec<&User>> {
    let mut groups: BTreeMap<usize, Vec<&User>> = BTreeMap::new();
    for user in users {
        groups.entry(user.privileges().len()).or_default().push(user);
    }
    trace!(
        user_count = users.len(),
        group_count = groups.len(),
        "grouped users by privilege count"
    );
    groups
}

/// Returns the arithmetic mean of the users' ages.
///
/// An empty slice yields [`NO_AVERAGE_AGE`] rather than zero.
///
/// # Example
///
/// ```
/// use user_query::{User, query};
///
/// let users = [
///     User::new("Ann", "Reed", 10, []).expect("valid user"),
///     User::new("Bob", "Stone", 20, []).expect("valid user"),
/// ];
///
/// assert_eq!(query::average_age_for_users(&users), 15.0);
/// assert_eq!(query::average_age_for_users(&[]), query::NO_AVERAGE_AGE);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the mean is reported as a floating point value"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "user counts far below 2^52 convert exactly"
)]
pub fn average_age_for_users(users: &[User]) -> f64 {
    if users.is_empty() {
        debug!("no users supplied; reporting sentinel average age");
        return NO_AVERAGE_AGE;
    }
    let total: f64 = users.iter().map(|user| f64::from(user.age())).sum();
    total / users.len() as f64
}

/// Returns the most common last name, compared case-insensitively.
///
/// The name is returned lower-cased. `None` is returned when no last name
/// occurs more than once. When several names share the highest count, the
/// one that appears first in `users` wins.
#[must_use]
pub fn most_frequent_last_name(users: &[User]) -> Option<String> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for user in users {
        *counts.entry(user.last_name().to_lowercase()).or_insert(0) += 1;
    }

    // Entries iterate in first-seen order, so `>=` keeps the earlier name.
    let best = counts
        .into_iter()
        .fold(None, |best, (name, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((name, count)),
        });

    match best {
        Some((name, count)) if count > 1 => Some(name),
        _ => {
            debug!(
                user_count = users.len(),
                "no last name occurs more than once"
            );
            None
        }
    }
}

/// Keeps the users accepted by every predicate, in input order.
///
/// With no predicates every user is kept.
///
/// # Example
///
/// ```
/// use user_query::predicate::{UserPredicate, has_privilege, older_than};
/// use user_query::{Privilege, User, query};
///
/// let users = [
///     User::new("Ann", "Reed", 41, [Privilege::Read]).expect("valid user"),
///     User::new("Bob", "Stone", 30, [Privilege::Read]).expect("valid user"),
///     User::new("Cleo", "Marsh", 52, []).expect("valid user"),
/// ];
///
/// let over_35 = older_than(35);
/// let reads = has_privilege(Privilege::Read);
/// let predicates: [UserPredicate<'_>; 2] = [&over_35, &reads];
///
/// let kept = query::filter_by(&users, &predicates);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(query::filter_by(&users, &[]).len(), 3);
/// ```
#[must_use]
pub fn filter_by<'a>(users: &'a [User], predicates: &[UserPredicate<'_>]) -> Vec<&'a User> {
    trace!(
        user_count = users.len(),
        predicate_count = predicates.len(),
        "filtering users"
    );
    let accepts = all_of(predicates);
    users.iter().filter(|&user| accepts(user)).collect()
}

/// Formats each user with `format` and joins the results with `delimiter`.
///
/// An empty slice yields an empty string.
///
/// # Example
///
/// ```
/// use user_query::{User, query};
///
/// let users = [
///     User::new("Ann", "Reed", 41, []).expect("valid user"),
///     User::new("Bob", "Stone", 30, []).expect("valid user"),
/// ];
///
/// let text = query::convert_to(&users, ", ", |user| {
///     format!("{} {}", user.first_name(), user.last_name())
/// });
/// assert_eq!(text, "Ann Reed, Bob Stone");
/// ```
#[must_use]
pub fn convert_to<F>(users: &[User], delimiter: &str, format: F) -> String
where
    F: Fn(&User) -> String,
{
    users.iter().map(format).collect::<Vec<_>>().join(delimiter)
}

/// Joins every user's last name with `delimiter`.
#[must_use]
pub fn join_last_names(users: &[User], delimiter: &str) -> String {
    users
        .iter()
        .map(User::last_name)
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Maps every [`Privilege`] to the users holding it.
///
/// Privileges nobody holds map to an empty list, so the keys are always
/// exactly [`Privilege::ALL`].
#[must_use]
pub fn group_by_privileges(users: &[User]) -> BTreeMap<Privilege, Vec<&User>> {
    let mut groups: BTreeMap<Privilege, Vec<&User>> = Privilege::ALL
        .into_iter()
        .map(|privilege| (privilege, Vec::new()))
        .collect();
    for user in users {
        for privilege in user.privileges() {
            groups.entry(privilege).or_default().push(user);
        }
    }
    trace!(user_count = users.len(), "grouped users by privilege");
    groups
}

/// Counts occurrences of each exact last name.
///
/// Comparison is case-sensitive: `"Doe"` and `"doe"` are counted apart.
#[must_use]
pub fn number_of_last_names(users: &[User]) -> BTreeMap<&str, u64> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for user in users {
        *counts.entry(user.last_name()).or_insert(0) += 1;
    }
    counts
}
