// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Typed view of one karaoke search hit.
//!
//! Field names follow the index's JSON documents. Decoding is tolerant:
//! missing nested objects fall back to empty defaults, malformed entries of
//! nested collections are dropped one by one, and empty optional strings are
//! normalised to `None`.

use serde::{Deserialize, Serialize};

use crate::error::HitError;
use crate::lenient;

/// One search result record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
	#[serde(rename = "objectID")]
	pub object_id: String,
	pub title: String,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub reading_title: String,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub url: String,
	#[serde(default, deserialize_with = "lenient::non_empty_string")]
	pub song_number: Option<String>,
	#[serde(default, deserialize_with = "lenient::non_empty_string")]
	pub delivery_deadline_date: Option<String>,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub display_artist: Artist,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub circle: Circle,
	#[serde(default, deserialize_with = "lenient::vec_skip_invalid")]
	pub original_songs: Vec<OriginalSong>,
	#[serde(default, deserialize_with = "lenient::vec_skip_invalid")]
	pub karaoke_delivery_models: Vec<KaraokeDeliveryModel>,
	#[serde(default, deserialize_with = "lenient::vec_skip_invalid")]
	pub videos: Vec<Video>,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub karaoke_type: Option<KaraokeType>,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub updated_at_i: Option<i64>,
	#[serde(default, deserialize_with = "lenient::vec_skip_invalid")]
	pub touhou_music: Vec<TouhouMusic>,
	#[serde(default, deserialize_with = "lenient::non_empty_string")]
	pub musicpost_url: Option<String>,
}

impl Hit {
	/// Decode a raw hit document and check the identity invariants.
	pub fn from_value(value: serde_json::Value) -> Result<Self, HitError> {
		let hit: Hit = serde_json::from_value(value).map_err(HitError::Malformed)?;
		if hit.object_id.is_empty() {
			return Err(HitError::MissingObjectId);
		}
		if hit.title.is_empty() {
			return Err(HitError::EmptyTitle {
				object_id: hit.object_id,
			});
		}
		Ok(hit)
	}
}

/// Nested records decode field by field, so one `null` or mistyped leaf
/// blanks only that leaf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artist {
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub name: String,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub reading_name: String,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub reading_name_hiragana: String,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub karaoke_type: String,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalSong {
	pub title: String,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub original: OriginalWork,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub categories: Categories,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginalWork {
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub title: String,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub short_title: String,
}

/// Hierarchical category path, most general first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Categories {
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub lvl0: String,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub lvl1: String,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub lvl2: String,
}

/// A missing or `null` tag decodes as the empty unknown tag and gets the
/// neutral badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KaraokeDeliveryModel {
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub name: String,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub karaoke_type: KaraokeType,
}

/// Karaoke platform vendor. The vocabulary is owned by the index and grows
/// over time, so unknown tags are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KaraokeType {
	Dam,
	Joysound,
	Other(String),
}

impl Default for KaraokeType {
	fn default() -> Self {
		KaraokeType::Other(String::new())
	}
}

impl KaraokeType {
	pub fn as_str(&self) -> &str {
		match self {
			KaraokeType::Dam => "DAM",
			KaraokeType::Joysound => "JOYSOUND",
			KaraokeType::Other(tag) => tag,
		}
	}
}

impl From<String> for KaraokeType {
	fn from(tag: String) -> Self {
		match tag.as_str() {
			"DAM" => KaraokeType::Dam,
			"JOYSOUND" => KaraokeType::Joysound,
			_ => KaraokeType::Other(tag),
		}
	}
}

impl From<&str> for KaraokeType {
	fn from(tag: &str) -> Self {
		KaraokeType::from(tag.to_string())
	}
}

impl From<KaraokeType> for String {
	fn from(tag: KaraokeType) -> Self {
		match tag {
			KaraokeType::Other(tag) => tag,
			known => known.as_str().to_string(),
		}
	}
}

/// A video without a `type` falls through to the plain-URL rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
	#[serde(rename = "type", default, deserialize_with = "lenient::or_default")]
	pub video_type: VideoType,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub url: String,
	#[serde(default, deserialize_with = "lenient::or_default")]
	pub id: String,
}

/// Video hosting platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VideoType {
	YouTube,
	NicoNico,
	Other(String),
}

impl Default for VideoType {
	fn default() -> Self {
		VideoType::Other(String::new())
	}
}

impl VideoType {
	pub const YOUTUBE_TAG: &'static str = "YouTube";
	pub const NICONICO_TAG: &'static str = "ニコニコ動画";

	pub fn as_str(&self) -> &str {
		match self {
			VideoType::YouTube => Self::YOUTUBE_TAG,
			VideoType::NicoNico => Self::NICONICO_TAG,
			VideoType::Other(tag) => tag,
		}
	}
}

impl From<String> for VideoType {
	fn from(tag: String) -> Self {
		match tag.as_str() {
			Self::YOUTUBE_TAG => VideoType::YouTube,
			Self::NICONICO_TAG => VideoType::NicoNico,
			_ => VideoType::Other(tag),
		}
	}
}

impl From<&str> for VideoType {
	fn from(tag: &str) -> Self {
		VideoType::from(tag.to_string())
	}
}

impl From<VideoType> for String {
	fn from(tag: VideoType) -> Self {
		match tag {
			VideoType::Other(tag) => tag,
			known => known.as_str().to_string(),
		}
	}
}

/// Link to the song on a Touhou music database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouhouMusic {
	#[serde(rename = "type")]
	pub source_type: String,
	pub url: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn minimal() -> serde_json::Value {
		json!({ "objectID": "42", "title": "患部で止まってすぐ溶ける" })
	}

	#[test]
	fn test_minimal_hit_decodes_with_defaults() {
		let hit = Hit::from_value(minimal()).unwrap();
		assert_eq!(hit.object_id, "42");
		assert_eq!(hit.song_number, None);
		assert_eq!(hit.delivery_deadline_date, None);
		assert_eq!(hit.circle, Circle::default());
		assert!(hit.original_songs.is_empty());
		assert!(hit.karaoke_delivery_models.is_empty());
		assert!(hit.videos.is_empty());
	}

	#[test]
	fn test_full_hit_decodes() {
		let raw = json!({
			"objectID": "7",
			"title": "Bad Apple!!",
			"reading_title": "ばっどあっぷる",
			"url": "https://example.com/songs/7",
			"song_number": "1234-56",
			"delivery_deadline_date": "2024-12-31",
			"display_artist": {
				"name": "nomico",
				"reading_name": "ノミコ",
				"reading_name_hiragana": "のみこ",
				"karaoke_type": "DAM",
				"url": "https://example.com/artists/nomico"
			},
			"circle": { "name": "Alstroemeria Records" },
			"original_songs": [{
				"title": "Bad Apple!!",
				"original": { "title": "東方幻想郷", "short_title": "幻想郷" },
				"categories": { "lvl0": "PC-98", "lvl1": "PC-98 > 東方幻想郷", "lvl2": "" }
			}],
			"karaoke_type": "DAM",
			"karaoke_delivery_models": [
				{ "name": "LIVE DAM Ai", "karaoke_type": "DAM" },
				{ "name": "JOYSOUND MAX GO", "karaoke_type": "JOYSOUND" }
			],
			"updated_at_i": 1700000000,
			"videos": [{ "type": "YouTube", "url": "https://youtu.be/abc", "id": "abc" }],
			"touhou_music": [{ "type": "東方同人音楽流通", "url": "https://example.com/tmd" }],
			"musicpost_url": "https://example.com/post"
		});
		let hit = Hit::from_value(raw).unwrap();
		assert_eq!(hit.song_number.as_deref(), Some("1234-56"));
		assert_eq!(hit.display_artist.reading_name, "ノミコ");
		assert_eq!(hit.original_songs[0].original.short_title, "幻想郷");
		assert_eq!(hit.karaoke_delivery_models[1].karaoke_type, KaraokeType::Joysound);
		assert_eq!(hit.videos[0].video_type, VideoType::YouTube);
		assert_eq!(hit.karaoke_type, Some(KaraokeType::Dam));
		assert_eq!(hit.touhou_music.len(), 1);
		assert_eq!(hit.updated_at_i, Some(1_700_000_000));
	}

	#[test]
	fn test_empty_optional_strings_become_none() {
		let mut raw = minimal();
		raw["song_number"] = json!("");
		raw["delivery_deadline_date"] = json!("");
		raw["musicpost_url"] = json!(null);
		let hit = Hit::from_value(raw).unwrap();
		assert_eq!(hit.song_number, None);
		assert_eq!(hit.delivery_deadline_date, None);
		assert_eq!(hit.musicpost_url, None);
	}

	#[test]
	fn test_malformed_entries_are_dropped_individually() {
		let mut raw = minimal();
		raw["videos"] = json!([
			{ "type": "YouTube", "id": "ok1" },
			"not an object",
			{ "type": "ニコニコ動画", "id": "sm9" }
		]);
		raw["karaoke_delivery_models"] = json!([42, { "name": "DAM", "karaoke_type": "DAM" }]);
		let hit = Hit::from_value(raw).unwrap();
		assert_eq!(hit.videos.len(), 2);
		assert_eq!(hit.videos[1].video_type, VideoType::NicoNico);
		assert_eq!(hit.karaoke_delivery_models.len(), 1);
	}

	#[test]
	fn test_missing_tags_decode_as_empty_unknown_tag() {
		let mut raw = minimal();
		raw["karaoke_delivery_models"] = json!([{ "name": "UGA" }, { "name": "x", "karaoke_type": null }]);
		raw["videos"] = json!([{ "url": "https://example.com/v" }, { "type": null, "id": "n" }]);
		let hit = Hit::from_value(raw).unwrap();
		assert_eq!(hit.karaoke_delivery_models.len(), 2);
		assert_eq!(hit.karaoke_delivery_models[0].name, "UGA");
		assert_eq!(hit.karaoke_delivery_models[0].karaoke_type, KaraokeType::default());
		assert_eq!(hit.karaoke_delivery_models[1].karaoke_type, KaraokeType::Other(String::new()));
		assert_eq!(hit.videos.len(), 2);
		assert_eq!(hit.videos[0].video_type, VideoType::default());
		assert_eq!(hit.videos[0].url, "https://example.com/v");
		assert_eq!(hit.videos[1].id, "n");
	}

	#[test]
	fn test_null_leaf_keeps_sibling_fields() {
		let mut raw = minimal();
		raw["display_artist"] = json!({
			"name": "ビートまりお",
			"reading_name": null,
			"url": "https://example.com/artists/1"
		});
		raw["original_songs"] = json!([{
			"title": "ナイト・オブ・ナイツ",
			"original": { "title": null, "short_title": "花映塚" },
			"categories": { "lvl0": "Windows", "lvl1": 3 }
		}]);
		raw["circle"] = json!({ "name": null });
		let hit = Hit::from_value(raw).unwrap();
		assert_eq!(hit.display_artist.name, "ビートまりお");
		assert_eq!(hit.display_artist.reading_name, "");
		assert_eq!(hit.display_artist.url, "https://example.com/artists/1");
		let song = &hit.original_songs[0];
		assert_eq!(song.original.short_title, "花映塚");
		assert_eq!(song.original.title, "");
		assert_eq!(song.categories.lvl0, "Windows");
		assert_eq!(song.categories.lvl1, "");
		assert_eq!(hit.circle.name, "");
	}

	#[test]
	fn test_null_collections_are_empty() {
		let mut raw = minimal();
		raw["videos"] = json!(null);
		raw["original_songs"] = json!({ "not": "a list" });
		let hit = Hit::from_value(raw).unwrap();
		assert!(hit.videos.is_empty());
		assert!(hit.original_songs.is_empty());
	}

	#[test]
	fn test_malformed_nested_object_falls_back_to_default() {
		let mut raw = minimal();
		raw["circle"] = json!("not an object");
		let hit = Hit::from_value(raw).unwrap();
		assert_eq!(hit.circle.name, "");
	}

	#[test]
	fn test_missing_object_id_is_rejected() {
		let raw = json!({ "title": "no id" });
		assert!(matches!(Hit::from_value(raw), Err(HitError::Malformed(_))));

		let raw = json!({ "objectID": "", "title": "empty id" });
		assert!(matches!(Hit::from_value(raw), Err(HitError::MissingObjectId)));
	}

	#[test]
	fn test_empty_title_is_rejected() {
		let raw = json!({ "objectID": "1", "title": "" });
		assert!(matches!(Hit::from_value(raw), Err(HitError::EmptyTitle { .. })));
	}

	#[test]
	fn test_tag_round_trip_keeps_unknown_text() {
		assert_eq!(String::from(KaraokeType::from("UGA")), "UGA");
		assert_eq!(String::from(VideoType::from("ニコニコ動画")), "ニコニコ動画");
		assert_eq!(KaraokeType::from(""), KaraokeType::Other(String::new()));
	}
}
