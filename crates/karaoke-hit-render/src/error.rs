// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Errors raised while decoding raw hit documents.

use thiserror::Error;

/// A raw record that cannot be treated as a hit at all.
///
/// Rendering itself never fails; these only come out of [`crate::Hit::from_value`].
#[derive(Debug, Error)]
pub enum HitError {
	#[error("malformed hit document: {0}")]
	Malformed(#[source] serde_json::Error),

	#[error("hit has an empty objectID")]
	MissingObjectId,

	#[error("hit {object_id} has an empty title")]
	EmptyTitle { object_id: String },
}
