// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTML serialisation of the node tree.
//!
//! Output is deterministic and every text and attribute value is escaped.
//! Class names are the hooks the page stylesheet targets.

use std::fmt::Write;

use crate::node::{Badge, Card, Embed, Link, Node, TextStyle};

const EXTERNAL_LINK_ICON: &str = concat!(
	r#"<svg class="icon-external-link" xmlns="http://www.w3.org/2000/svg" width="16" height="16" "#,
	r#"viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" "#,
	r#"stroke-linejoin="round" aria-hidden="true"><path d="M12 6h-6a2 2 0 0 0 -2 2v10a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-6" />"#,
	r#"<path d="M11 13l9 -9" /><path d="M15 4h5v5" /></svg>"#
);

impl Card {
	pub fn to_html(&self) -> String {
		let mut out = String::new();
		self.write_html(&mut out);
		out
	}

	pub fn write_html(&self, out: &mut String) {
		out.push_str(r#"<article class="hit" data-object-id=""#);
		escape_into(&self.key, out);
		out.push_str(r#"">"#);
		for child in &self.children {
			child.write_html(out);
		}
		out.push_str("</article>");
	}
}

impl Node {
	pub fn to_html(&self) -> String {
		let mut out = String::new();
		self.write_html(&mut out);
		out
	}

	pub fn write_html(&self, out: &mut String) {
		match self {
			Node::Row { children } => {
				out.push_str(r#"<div class="hit-row">"#);
				write_all(children, out);
				out.push_str("</div>");
			}
			Node::Fragment { children } => write_all(children, out),
			Node::Group { children } => {
				out.push_str(r#"<div class="hit-group">"#);
				write_all(children, out);
				out.push_str("</div>");
			}
			Node::Keyed { key, child } => {
				out.push_str(r#"<div data-key=""#);
				escape_into(key, out);
				out.push_str(r#"">"#);
				child.write_html(out);
				out.push_str("</div>");
			}
			Node::Text(text) => {
				let class = match text.style {
					TextStyle::Title => "hit-title",
					TextStyle::Label => "hit-label",
					TextStyle::Value => "hit-value",
					TextStyle::Plain => "hit-text",
				};
				let _ = write!(out, r#"<p class="{class}">"#);
				escape_into(&text.content, out);
				out.push_str("</p>");
			}
			Node::Link(link) => write_link(link, out),
			Node::Badge(badge) => write_badge(badge, out),
			Node::Embed(embed) => write_embed(embed, out),
		}
	}
}

fn write_all(children: &[Node], out: &mut String) {
	for child in children {
		child.write_html(out);
	}
}

fn write_link(link: &Link, out: &mut String) {
	out.push_str(r#"<a class="hit-link" href=""#);
	escape_into(&link.href, out);
	out.push_str(r#"" target="_blank" rel="noopener noreferrer">"#);
	out.push_str(EXTERNAL_LINK_ICON);
	out.push_str("</a>");
}

fn write_badge(badge: &Badge, out: &mut String) {
	out.push_str(r#"<span class="badge""#);
	if let Some(color) = badge.color.css() {
		let _ = write!(out, r#" style="background-color: {color}""#);
	}
	out.push('>');
	escape_into(&badge.label, out);
	out.push_str("</span>");
}

fn write_embed(embed: &Embed, out: &mut String) {
	let _ = write!(
		out,
		r#"<div class="aspect-ratio" style="aspect-ratio: {} / {}"><iframe src=""#,
		embed.aspect_ratio.width, embed.aspect_ratio.height
	);
	escape_into(&embed.src, out);
	out.push_str(r#"" allow=""#);
	escape_into(embed.allow, out);
	out.push('"');
	if embed.allow_full_screen {
		out.push_str(" allowfullscreen");
	}
	out.push_str("></iframe></div>");
}

/// Escape text for use in both element content and quoted attributes.
pub fn escape_into(text: &str, out: &mut String) {
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
}

pub fn escape(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	escape_into(text, &mut out);
	out
}
