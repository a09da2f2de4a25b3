//! Privilege flags carried by users.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePrivilegeError;

/// Capability flag granted to a user.
///
/// The set is closed; [`Privilege::ALL`] lists every value in declaration
/// order, which is also the [`Ord`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Privilege {
    /// May create records.
    Create,
    /// May read records.
    Read,
    /// May update records.
    Update,
    /// May delete records.
    Delete,
}

impl Privilege {
    /// Every privilege, in declaration order.
    pub const ALL: [Self; 4] = [Self::Create, Self::Read, Self::Update, Self::Delete];

    /// Returns the canonical upper-case name of the privilege.
    ///
    /// # Example
    ///
    /// ```
    /// use user_query::Privilege;
    ///
    /// assert_eq!(Privilege::Update.as_str(), "UPDATE");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Read => "READ",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Privilege {
    type Err = ParsePrivilegeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|privilege| privilege.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ParsePrivilegeError {
                value: value.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("CREATE", Privilege::Create)]
    #[case("read", Privilege::Read)]
    #[case("Update", Privilege::Update)]
    #[case(" delete ", Privilege::Delete)]
    fn parses_privilege_names(#[case] input: &str, #[case] expected: Privilege) {
        assert_eq!(input.parse::<Privilege>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("WRITE")]
    #[case("UPDATES")]
    fn rejects_unknown_names(#[case] input: &str) {
        assert_eq!(
            input.parse::<Privilege>(),
            Err(ParsePrivilegeError {
                value: input.to_owned()
            })
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for privilege in Privilege::ALL {
            assert_eq!(privilege.to_string().parse::<Privilege>(), Ok(privilege));
        }
    }

    #[test]
    fn all_is_sorted_by_ord() {
        let mut sorted = Privilege::ALL;
        sorted.sort();
        assert_eq!(sorted, Privilege::ALL);
    }

    #[test]
    fn serializes_upper_case() {
        let json = serde_json::to_string(&Privilege::Update).expect("serialize");
        assert_eq!(json, "\"UPDATE\"");
    }
}
