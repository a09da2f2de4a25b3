//! Stateless query utilities over in-memory user records.
//!
//! Each [`User`] carries a first name, last name, age and a
//! [`PrivilegeSet`]. The [`query`] module provides sorting, filtering,
//! grouping, aggregation and joining over a borrowed slice of users; the
//! [`UserQueryService`] trait exposes the same operations behind an
//! object-safe seam.
//!
//! # Overview
//!
//! - No query mutates its input; users are borrowed, never cloned
//! - "No result" is signalled with `None` or a documented sentinel such as
//!   [`query::NO_AVERAGE_AGE`], never with an error
//! - Filtering combines any number of predicates with logical AND
//!
//! # Example
//!
//! ```
//! use user_query::{Privilege, User, query};
//!
//! let users = vec![
//!     User::new("Ada", "Lovelace", 36, [Privilege::Read, Privilege::Update]).expect("valid"),
//!     User::new("Alan", "Turing", 41, [Privilege::Read]).expect("valid"),
//! ];
//!
//! let sorted = query::sort_by_age_desc_and_name_asc(&users);
//! assert_eq!(sorted[0].first_name(), "Alan");
//!
//! let updater = query::update_user_with_age_higher_than(&users, 30);
//! assert_eq!(updater.map(User::last_name), Some("Lovelace"));
//! ```

mod error;
pub mod predicate;
mod privilege;
pub mod query;
mod service;
mod user;

pub use error::{ParsePrivilegeError, UserValidationError};
pub use privilege::Privilege;
pub use service::{UserQueries, UserQueryService};
pub use user::{PrivilegeSet, User};
