// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Embedded players for videos.

use crate::model::{Video, VideoType};
use crate::node::{AspectRatio, Embed, Node};

pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";
pub const NICONICO_EMBED_BASE: &str = "https://embed.nicovideo.jp/watch/";
/// Parameters the niconico embed player requires.
pub const NICONICO_EMBED_QUERY: &str = "?oldScript=1&referer=&from=0&allowProgrammaticFullScreen=1";

const EMBED_ALLOW: &str = "autoplay; encrypted-media";

/// Render one video as an embedded player, or as its raw URL when the host
/// has no embed support.
pub fn render_video(video: &Video) -> Node {
	match &video.video_type {
		VideoType::YouTube => embed(format!("{YOUTUBE_EMBED_BASE}{}", video.id)),
		VideoType::NicoNico => embed(format!(
			"{NICONICO_EMBED_BASE}{}{NICONICO_EMBED_QUERY}",
			video.id
		)),
		VideoType::Other(_) => Node::plain(video.url.clone()),
	}
}

fn embed(src: String) -> Node {
	Node::Embed(Embed {
		src,
		aspect_ratio: AspectRatio::WIDESCREEN,
		allow: EMBED_ALLOW,
		allow_full_screen: true,
	})
}
