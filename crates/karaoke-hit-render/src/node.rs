// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Display node tree produced by the renderer.
//!
//! The tree is presentation-neutral: it names visual intents (a label, a
//! badge of a given colour, a 16:9 embed) and leaves markup to
//! [`crate::html`]. It serialises to JSON for client-side updates.

use serde::Serialize;

use crate::badge::BadgeColor;

/// A rendered hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
	/// The hit's `objectID`; unique within one result set.
	pub key: String,
	pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
	/// Label/value pair laid out on one line.
	Row { children: Vec<Node> },
	/// Children without a wrapping element.
	Fragment { children: Vec<Node> },
	/// Children laid out inline with wrapping, used for badges.
	Group { children: Vec<Node> },
	/// A child with a key that is unique among its siblings.
	Keyed { key: String, child: Box<Node> },
	Text(Text),
	Link(Link),
	Badge(Badge),
	Embed(Embed),
}

impl Node {
	pub fn row(children: Vec<Node>) -> Self {
		Node::Row { children }
	}

	pub fn fragment(children: Vec<Node>) -> Self {
		Node::Fragment { children }
	}

	pub fn group(children: Vec<Node>) -> Self {
		Node::Group { children }
	}

	pub fn keyed(key: impl Into<String>, child: Node) -> Self {
		Node::Keyed {
			key: key.into(),
			child: Box::new(child),
		}
	}

	pub fn text(content: impl Into<String>, style: TextStyle) -> Self {
		Node::Text(Text {
			content: content.into(),
			style,
		})
	}

	pub fn label(content: impl Into<String>) -> Self {
		Node::text(content, TextStyle::Label)
	}

	pub fn value(content: impl Into<String>) -> Self {
		Node::text(content, TextStyle::Value)
	}

	pub fn plain(content: impl Into<String>) -> Self {
		Node::text(content, TextStyle::Plain)
	}

	pub fn external_link(href: impl Into<String>) -> Self {
		Node::Link(Link { href: href.into() })
	}

	/// Direct children, for walking the tree.
	pub fn children(&self) -> Vec<&Node> {
		match self {
			Node::Row { children } | Node::Fragment { children } | Node::Group { children } => {
				children.iter().collect()
			}
			Node::Keyed { child, .. } => vec![child.as_ref()],
			Node::Text(_) | Node::Link(_) | Node::Badge(_) | Node::Embed(_) => Vec::new(),
		}
	}

	/// Concatenated text of every text node and badge label below this one.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			Node::Text(text) => out.push_str(&text.content),
			Node::Badge(badge) => out.push_str(&badge.label),
			_ => {
				for child in self.children() {
					child.collect_text(out);
				}
			}
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
	pub content: String,
	pub style: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
	/// Card heading: bold, large.
	Title,
	/// Section label: bold.
	Label,
	/// Value next to a label: indented.
	Value,
	Plain,
}

/// Outbound link rendered as an external-link icon, opening in a new tab.
/// The target is passed through as received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
	pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
	pub label: String,
	pub color: BadgeColor,
}

/// Embedded player in a fixed-ratio frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
	pub src: String,
	pub aspect_ratio: AspectRatio,
	/// Value of the iframe `allow` attribute.
	pub allow: &'static str,
	pub allow_full_screen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AspectRatio {
	pub width: u32,
	pub height: u32,
}

impl AspectRatio {
	pub const WIDESCREEN: AspectRatio = AspectRatio {
		width: 16,
		height: 9,
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_text_content_walks_nested_nodes() {
		let node = Node::fragment(vec![
			Node::label("a"),
			Node::keyed("k", Node::row(vec![Node::value("b"), Node::external_link("x")])),
			Node::group(vec![Node::Badge(Badge {
				label: "c".to_string(),
				color: BadgeColor::Default,
			})]),
		]);
		assert_eq!(node.text_content(), "abc");
	}

	#[test]
	fn test_serializes_with_kind_tag() {
		let json = serde_json::to_value(Node::label("曲番号:")).unwrap();
		assert_eq!(json["kind"], "text");
		assert_eq!(json["style"], "label");
		assert_eq!(json["content"], "曲番号:");
	}
}
