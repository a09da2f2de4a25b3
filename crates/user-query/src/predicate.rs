//! Predicate combinators over users.
//!
//! Filtering takes any number of caller-supplied predicates; [`all_of`] folds
//! them with logical AND, where an empty list accepts every user.

use crate::privilege::Privilege;
use crate::user::User;

/// Borrowed, type-erased user predicate.
pub type UserPredicate<'p> = &'p dyn Fn(&User) -> bool;

/// Combines predicates with logical AND.
///
/// The returned predicate accepts a user only when every supplied predicate
/// does; with no predicates it accepts everything.
///
/// # Example
///
/// ```
/// use user_query::predicate::{UserPredicate, all_of, older_than};
/// use user_query::User;
///
/// let adult = older_than(17);
/// let predicates: [UserPredicate<'_>; 1] = [&adult];
/// let combined = all_of(&predicates);
/// let user = User::new("Ada", "Lovelace", 36, []).expect("valid user");
///
/// assert!(combined(&user));
/// assert!(all_of(&[])(&user));
/// ```
pub fn all_of<'p>(predicates: &'p [UserPredicate<'p>]) -> impl Fn(&User) -> bool + 'p {
    move |user| predicates.iter().all(|predicate| predicate(user))
}

/// Accepts users strictly older than `age`.
///
/// `age` is signed so that a negative threshold accepts every user.
pub fn older_than(age: i64) -> impl Fn(&User) -> bool {
    move |user| i64::from(user.age()) > age
}

/// Accepts users holding `privilege`.
pub fn has_privilege(privilege: Privilege) -> impl Fn(&User) -> bool {
    move |user| user.privileges().contains(privilege)
}
