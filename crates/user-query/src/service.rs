//! Service interface over the user queries.
//!
//! [`UserQueryService`] is the seam host applications depend on; it is
//! object-safe so callers can hold a `&dyn UserQueryService`. [`UserQueries`]
//! is the stateless implementation backed by [`crate::query`].

use std::collections::BTreeMap;

use crate::predicate::UserPredicate;
use crate::privilege::Privilege;
use crate::query;
use crate::user::User;

/// Query operations over an ordered list of users.
///
/// Implementations must not mutate the supplied users and must return the
/// same result for the same input on every call.
pub trait UserQueryService: Send + Sync {
    /// First names sorted in descending natural order.
    fn first_names_reverse_sorted<'a>(&self, users: &'a [User]) -> Vec<&'a str>;

    /// Users ordered by age descending, then first name ascending.
    fn sort_by_age_desc_and_name_asc<'a>(&self, users: &'a [User]) -> Vec<&'a User>;

    /// Union of all privileges, in first-seen order.
    fn all_distinct_privileges(&self, users: &[User]) -> Vec<Privilege>;

    /// First user older than `age` holding [`Privilege::Update`].
    fn update_user_with_age_higher_than<'a>(
        &self,
        users: &'a [User],
        age: i64,
    ) -> Option<&'a User>;

    /// Users grouped by the size of their privilege set.
    fn group_by_count_of_privileges<'a>(
        &self,
        users: &'a [User],
    ) -> BTreeMap<usize, Vec<&'a User>>;

    /// Mean age, or [`query::NO_AVERAGE_AGE`] for no users.
    fn average_age_for_users(&self, users: &[User]) -> f64;

    /// Lower-cased most frequent last name, if any occurs more than once.
    fn most_frequent_last_name(&self, users: &[User]) -> Option<String>;

    /// Users accepted by every predicate.
    fn filter_by<'a>(
        &self,
        users: &'a [User],
        predicates: &[UserPredicate<'_>],
    ) -> Vec<&'a User>;

    /// Users formatted by `format` and joined with `delimiter`.
    fn convert_to(
        &self,
        users: &[User],
        delimiter: &str,
        format: &dyn Fn(&User) -> String,
    ) -> String;

    /// Last names joined with `delimiter`.
    fn join_last_names(&self, users: &[User], delimiter: &str) -> String;

    /// Every privilege mapped to the users holding it.
    fn group_by_privileges<'a>(&self, users: &'a [User]) -> BTreeMap<Privilege, Vec<&'a User>>;

    /// Case-sensitive last-name counts.
    fn number_of_last_names<'a>(&self, users: &'a [User]) -> BTreeMap<&'a str, u64>;
}

/// Stateless [`UserQueryService`] implementation.
///
/// # Example
///
/// ```
/// use user_query::{Privilege, User, UserQueries, UserQueryService};
///
/// let service: &dyn UserQueryService = &UserQueries;
/// let users = [
///     User::new("Ann", "Doe", 40, [Privilege::Update]).expect("valid user"),
///     User::new("Bob", "Doe", 20, []).expect("valid user"),
/// ];
///
/// assert_eq!(service.average_age_for_users(&users), 30.0);
/// assert_eq!(service.most_frequent_last_name(&users).as_deref(), Some("doe"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserQueries;

impl UserQueryService for UserQueries {
    fn first_names_reverse_sorted<'a>(&self, users: &'a [User]) -> Vec<&'a str> {
        query::first_names_reverse_sorted(users)
    }

    fn sort_by_age_desc_and_name_asc<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        query::sort_by_age_desc_and_name_asc(users)
    }

    fn all_distinct_privileges(&self, users: &[User]) -> Vec<Privilege> {
        query::all_distinct_privileges(users)
    }

    fn update_user_with_age_higher_than<'a>(
        &self,
        users: &'a [User],
        age: i64,
    ) -> Option<&'a User> {
        query::update_user_with_age_higher_than(users, age)
    }

    fn group_by_count_of_privileges<'a>(
        &self,
        users: &'a [User],
    ) -> BTreeMap<usize, Vec<&'a User>> {
        query::group_by_count_of_privileges(users)
    }

    fn average_age_for_users(&self, users: &[User]) -> f64 {
        query::average_age_for_users(users)
    }

    fn most_frequent_last_name(&self, users: &[User]) -> Option<String> {
        query::most_frequent_last_name(users)
    }

    fn filter_by<'a>(
        &self,
        users: &'a [User],
        predicates: &[UserPredicate<'_>],
    ) -> Vec<&'a User> {
        query::filter_by(users, predicates)
    }

    fn convert_to(
        &self,
        users: &[User],
        delimiter: &str,
        format: &dyn Fn(&User) -> String,
    ) -> String {
        query::convert_to(users, delimiter, format)
    }

    fn join_last_names(&self, users: &[User], delimiter: &str) -> String {
        query::join_last_names(users, delimiter)
    }

    fn group_by_privileges<'a>(&self, users: &'a [User]) -> BTreeMap<Privilege, Vec<&'a User>> {
        query::group_by_privileges(users)
    }

    fn number_of_last_names<'a>(&self, users: &'a [User]) -> BTreeMap<&'a str, u64> {
        query::number_of_last_names(users)
    }
}
