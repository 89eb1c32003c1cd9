//! Access to the signed-in user's identifier.
//!
//! Sign-in itself happens outside this app: the identity provider leaves
//! the user id in local storage under `userId` and this module only reads
//! it. No id means the user is not signed in.

use crate::storage;

pub const USER_ID_KEY: &str = "userId";

pub fn signed_in_user() -> Option<String> {
    storage::get(USER_ID_KEY).filter(|id| !id.trim().is_empty())
}
