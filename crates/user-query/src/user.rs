//! User data model.

use std::slice;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::UserValidationError;
use crate::privilege::Privilege;

/// Set of privileges held by a user.
///
/// Duplicates are dropped on construction. Iteration yields privileges in the
/// order they were first supplied.
///
/// # Example
///
/// ```
/// use user_query::{Privilege, PrivilegeSet};
///
/// let set: PrivilegeSet = [Privilege::Read, Privilege::Update, Privilege::Read]
///     .into_iter()
///     .collect();
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Privilege::Update));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Privilege>", into = "Vec<Privilege>")]
pub struct PrivilegeSet(Vec<Privilege>);

impl PrivilegeSet {
    /// Returns `true` if the set holds `privilege`.
    #[must_use]
    pub fn contains(&self, privilege: Privilege) -> bool {
        self.0.contains(&privilege)
    }

    /// Number of distinct privileges in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set holds no privileges.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the privileges in first-inserted order.
    pub fn iter(&self) -> impl Iterator<Item = Privilege> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Privilege> for PrivilegeSet {
    fn from_iter<I: IntoIterator<Item = Privilege>>(iter: I) -> Self {
        Self(iter.into_iter().collect::<IndexSet<_>>().into_iter().collect())
    }
}

impl IntoIterator for PrivilegeSet {
    type Item = Privilege;
    type IntoIter = std::vec::IntoIter<Privilege>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PrivilegeSet {
    type Item = Privilege;
    type IntoIter = std::iter::Copied<slice::Iter<'a, Privilege>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl From<Vec<Privilege>> for PrivilegeSet {
    fn from(value: Vec<Privilege>) -> Self {
        value.into_iter().collect()
    }
}

impl From<PrivilegeSet> for Vec<Privilege> {
    fn from(value: PrivilegeSet) -> Self {
        value.0
    }
}

/// A user record queried by this crate.
///
/// ## Invariants
/// - `first_name` and `last_name` are non-empty once trimmed of whitespace.
/// - `privileges` holds no duplicates.
///
/// Users are immutable once built; every query borrows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    first_name: String,
    last_name: String,
    age: u32,
    privileges: PrivilegeSet,
}

impl User {
    /// Validate and construct a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`UserValidationError`] when either name is blank.
    ///
    /// # Example
    ///
    /// ```
    /// use user_query::{Privilege, User};
    ///
    /// let user = User::new("Ada", "Lovelace", 36, [Privilege::Read]).expect("valid user");
    ///
    /// assert_eq!(user.last_name(), "Lovelace");
    /// assert!(user.privileges().contains(Privilege::Read));
    /// ```
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        privileges: impl IntoIterator<Item = Privilege>,
    ) -> Result<Self, UserValidationError> {
        let first = first_name.into();
        if first.trim().is_empty() {
            return Err(UserValidationError::BlankFirstName);
        }
        let last = last_name.into();
        if last.trim().is_empty() {
            return Err(UserValidationError::BlankLastName);
        }

        Ok(Self {
            first_name: first,
            last_name: last,
            age,
            privileges: privileges.into_iter().collect(),
        })
    }

    /// Returns the user's first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the user's last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the user's age in years.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Returns the privileges granted to the user.
    #[must_use]
    pub const fn privileges(&self) -> &PrivilegeSet {
        &self.privileges
    }
}

/// Wire representation used by serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UserDto {
    first_name: String,
    last_name: String,
    age: u32,
    #[serde(default)]
    privileges: PrivilegeSet,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            first_name,
            last_name,
            age,
            privileges,
        } = value;
        Self {
            first_name,
            last_name,
            age,
            privileges,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        Self::new(value.first_name, value.last_name, value.age, value.privileges)
    }
}
