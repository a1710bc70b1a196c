// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Karaoke search hit renderer.
//!
//! Turns one raw search hit (a loosely typed JSON document from the search
//! index) into a [`Card`]: a tree of display [`Node`]s that serialises to
//! HTML. Rendering is pure and synchronous; every lookup on an open-ended tag
//! has an explicit fallback, so no structurally valid hit can make it fail.
//!
//! # Example
//!
//! ```
//! use karaoke_hit_render::{render_hit, Hit};
//!
//! let raw = serde_json::json!({
//!     "objectID": "1",
//!     "title": "ネイティブフェイス",
//!     "url": "https://example.com/songs/1",
//! });
//! let hit = Hit::from_value(raw).unwrap();
//! let html = render_hit(&hit).to_html();
//! assert!(html.contains("ネイティブフェイス"));
//! ```

pub mod badge;
pub mod error;
pub mod html;
mod lenient;
pub mod model;
pub mod node;
pub mod render;
pub mod video;

pub use badge::{badge_color, BadgeColor};
pub use error::HitError;
pub use model::{
	Artist, Categories, Circle, Hit, KaraokeDeliveryModel, KaraokeType, OriginalSong, OriginalWork,
	TouhouMusic, Video, VideoType,
};
pub use node::{AspectRatio, Badge, Card, Embed, Link, Node, Text, TextStyle};
pub use render::{
	render_artist, render_circle, render_delivery_deadline, render_delivery_models, render_hit,
	render_original_songs, render_song_number, render_title, render_videos, labels,
};
pub use video::{render_video, NICONICO_EMBED_BASE, NICONICO_EMBED_QUERY, YOUTUBE_EMBED_BASE};
