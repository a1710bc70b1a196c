// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Badge colours for karaoke delivery platforms.

use serde::Serialize;

use crate::model::KaraokeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
	Black,
	Red,
	/// Neutral styling from the stylesheet.
	Default,
}

impl BadgeColor {
	/// CSS colour for the badge background, `None` for the stylesheet default.
	pub fn css(self) -> Option<&'static str> {
		match self {
			BadgeColor::Black => Some("rgba(0, 0, 0, 1)"),
			BadgeColor::Red => Some("red"),
			BadgeColor::Default => None,
		}
	}
}

/// Pick the badge colour for a delivery platform.
pub fn badge_color(karaoke_type: &KaraokeType) -> BadgeColor {
	match karaoke_type {
		KaraokeType::Dam => BadgeColor::Black,
		KaraokeType::Joysound => BadgeColor::Red,
		KaraokeType::Other(_) => BadgeColor::Default,
	}
}
