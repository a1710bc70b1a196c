// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Pagination links computed from the service's page count.

use serde::Serialize;

/// Pages shown on each side of the current page.
pub const DEFAULT_PADDING: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
	/// One-based page number.
	pub page: u32,
	pub href: String,
	pub current: bool,
}

/// First / previous / page window / next / last. Links that would point at
/// the current edge are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
	pub current: u32,
	pub nb_pages: u32,
	pub first: Option<PageLink>,
	pub previous: Option<PageLink>,
	pub pages: Vec<PageLink>,
	pub next: Option<PageLink>,
	pub last: Option<PageLink>,
}

impl Pagination {
	/// `current` is zero-based, as the service reports it.
	pub fn build(current: u32, nb_pages: u32, padding: u32, href: impl Fn(u32) -> String) -> Self {
		let link = |page: u32| PageLink {
			page: page + 1,
			href: href(page + 1),
			current: page == current,
		};

		let is_first = current == 0;
		let is_last = nb_pages == 0 || current + 1 >= nb_pages;

		Self {
			current: current + 1,
			nb_pages,
			first: (!is_first).then(|| link(0)),
			previous: (!is_first).then(|| link(current - 1)),
			pages: page_window(current, nb_pages, padding)
				.into_iter()
				.map(&link)
				.collect(),
			next: (!is_last).then(|| link(current + 1)),
			last: (!is_last).then(|| link(nb_pages - 1)),
		}
	}
}

/// Zero-based pages to list around `current`. The window keeps its full
/// width `2 * padding + 1` near the edges by shifting instead of shrinking.
pub fn page_window(current: u32, nb_pages: u32, padding: u32) -> Vec<u32> {
	if nb_pages == 0 {
		return vec![0];
	}

	let displayed = (2 * padding + 1).min(nb_pages);
	if displayed == nb_pages {
		return (0..nb_pages).collect();
	}

	let current = current.min(nb_pages - 1);
	let padding_left = if current <= padding {
		current
	} else if current >= nb_pages - padding {
		displayed - (nb_pages - current)
	} else {
		padding
	};
	let first = current - padding_left;

	(first..first + displayed).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn href(page: u32) -> String {
		format!("/?p={page}")
	}

	#[test]
	fn test_window_fits_all_pages() {
		assert_eq!(page_window(0, 5, 3), vec![0, 1, 2, 3, 4]);
		assert_eq!(page_window(0, 0, 3), vec![0]);
	}

	#[test]
	fn test_window_at_edges() {
		assert_eq!(page_window(0, 20, 3), vec![0, 1, 2, 3, 4, 5, 6]);
		assert_eq!(page_window(2, 20, 3), vec![0, 1, 2, 3, 4, 5, 6]);
		assert_eq!(page_window(10, 20, 3), vec![7, 8, 9, 10, 11, 12, 13]);
		assert_eq!(page_window(19, 20, 3), vec![13, 14, 15, 16, 17, 18, 19]);
		assert_eq!(page_window(17, 20, 3), vec![13, 14, 15, 16, 17, 18, 19]);
	}

	#[test]
	fn test_first_page_has_no_backward_links() {
		let pagination = Pagination::build(0, 10, DEFAULT_PADDING, href);
		assert_eq!(pagination.current, 1);
		assert!(pagination.first.is_none());
		assert!(pagination.previous.is_none());
		assert_eq!(pagination.next.as_ref().map(|l| l.page), Some(2));
		assert_eq!(pagination.last.as_ref().map(|l| l.href.as_str()), Some("/?p=10"));
		assert!(pagination.pages[0].current);
	}

	#[test]
	fn test_last_page_has_no_forward_links() {
		let pagination = Pagination::build(9, 10, DEFAULT_PADDING, href);
		assert_eq!(pagination.previous.as_ref().map(|l| l.page), Some(9));
		assert_eq!(pagination.first.as_ref().map(|l| l.page), Some(1));
		assert!(pagination.next.is_none());
		assert!(pagination.last.is_none());
	}

	#[test]
	fn test_empty_result_set() {
		let pagination = Pagination::build(0, 0, DEFAULT_PADDING, href);
		assert_eq!(pagination.pages.len(), 1);
		assert!(pagination.next.is_none());
		assert!(pagination.previous.is_none());
	}

	proptest! {
		#[test]
		fn window_contains_current_and_stays_in_range(
			nb_pages in 1u32..200,
			current_seed in 0u32..200,
			padding in 0u32..6,
		) {
			let current = current_seed % nb_pages;
			let window = page_window(current, nb_pages, padding);
			prop_assert!(window.contains(&current));
			prop_assert_eq!(window.len() as u32, (2 * padding + 1).min(nb_pages));
			prop_assert!(window.iter().all(|page| *page < nb_pages));
			prop_assert!(window.windows(2).all(|pair| pair[1] == pair[0] + 1));
		}
	}
}
