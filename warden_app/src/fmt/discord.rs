//! Provides utilities for formatting Discord data.

use serenity::model::prelude::*;

/// Gets a unique username for this user.
///
/// This will either be the pomelo username or include the discriminator.
#[must_use]
pub fn get_unique_username(user: &User) -> String {
    user.discriminator
        .map(|d| format!("{}#{:04}", user.name, d))
        .unwrap_or_else(|| user.name.clone())
}
