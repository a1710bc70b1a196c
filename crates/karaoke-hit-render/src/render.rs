// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Hit → card mapping.
//!
//! Each block has its own function so it can be rendered and tested on its
//! own. Blocks never look at each other; a hit renders as the blocks in
//! fixed order.

use crate::badge::badge_color;
use crate::model::{Artist, Circle, Hit, KaraokeDeliveryModel, OriginalSong, Video};
use crate::node::{Badge, Card, Node, TextStyle};
use crate::video::render_video;

/// Fixed section labels.
pub mod labels {
	pub const SONG_NUMBER: &str = "曲番号:";
	pub const SONG_NUMBER_NONE: &str = "なし";
	pub const DELIVERY_DEADLINE: &str = "配信期限:";
	pub const CIRCLE: &str = "サークル名:";
	pub const ARTIST: &str = "歌手名:";
	pub const ORIGINAL_SONGS: &str = "原曲(原作):";
	pub const DELIVERY_MODELS: &str = "配信機種:";
	pub const VIDEOS: &str = "動画:";
}

/// Render a whole hit.
pub fn render_hit(hit: &Hit) -> Card {
	let mut children = vec![render_title(hit), render_song_number(hit)];
	children.extend(render_delivery_deadline(hit));
	children.push(render_circle(&hit.circle));
	children.push(render_artist(&hit.display_artist));
	children.push(render_original_songs(&hit.original_songs));
	children.push(render_delivery_models(&hit.karaoke_delivery_models));
	children.extend(render_videos(&hit.videos));

	Card {
		key: hit.object_id.clone(),
		children,
	}
}

pub fn render_title(hit: &Hit) -> Node {
	Node::row(vec![
		Node::text(hit.title.clone(), TextStyle::Title),
		Node::external_link(hit.url.clone()),
	])
}

/// Song number, or an explicit placeholder when the song has none.
pub fn render_song_number(hit: &Hit) -> Node {
	let value = match &hit.song_number {
		Some(number) => number.clone(),
		None => labels::SONG_NUMBER_NONE.to_string(),
	};
	Node::row(vec![Node::label(labels::SONG_NUMBER), Node::value(value)])
}

/// Delivery deadline; nothing at all when the song has none.
pub fn render_delivery_deadline(hit: &Hit) -> Option<Node> {
	let deadline = hit.delivery_deadline_date.as_ref()?;
	Some(Node::row(vec![
		Node::label(labels::DELIVERY_DEADLINE),
		Node::value(deadline.clone()),
	]))
}

pub fn render_circle(circle: &Circle) -> Node {
	Node::row(vec![
		Node::label(labels::CIRCLE),
		Node::value(circle.name.clone()),
	])
}

pub fn render_artist(artist: &Artist) -> Node {
	Node::row(vec![
		Node::label(labels::ARTIST),
		Node::value(format!("{}({})", artist.name, artist.reading_name)),
		Node::external_link(artist.url.clone()),
	])
}

/// Original songs in index order. The header is shown even for an empty list.
pub fn render_original_songs(songs: &[OriginalSong]) -> Node {
	let mut children = Vec::with_capacity(songs.len() + 1);
	children.push(Node::label(labels::ORIGINAL_SONGS));
	children.extend(songs.iter().enumerate().map(|(index, song)| {
		Node::keyed(
			format!("{}-{index}", song.title),
			Node::plain(format!("{}({})", song.title, song.original.short_title)),
		)
	}));
	Node::fragment(children)
}

/// Delivery platforms as coloured badges. The header is shown even for an
/// empty list.
pub fn render_delivery_models(models: &[KaraokeDeliveryModel]) -> Node {
	let badges = models
		.iter()
		.map(|model| {
			Node::keyed(
				model.name.clone(),
				Node::Badge(Badge {
					label: model.name.clone(),
					color: badge_color(&model.karaoke_type),
				}),
			)
		})
		.collect();
	Node::fragment(vec![
		Node::label(labels::DELIVERY_MODELS),
		Node::group(badges),
	])
}

/// Video players; the whole section is omitted when there are no videos.
pub fn render_videos(videos: &[Video]) -> Option<Node> {
	if videos.is_empty() {
		return None;
	}

	let mut children = Vec::with_capacity(videos.len() + 1);
	children.push(Node::label(labels::VIDEOS));
	children.extend(videos.iter().enumerate().map(|(index, video)| {
		let key = if video.id.is_empty() {
			format!("video-{index}")
		} else {
			video.id.clone()
		};
		Node::keyed(key, render_video(video))
	}));
	Some(Node::fragment(children))
}
