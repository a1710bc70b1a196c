// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities.
//!
//! Every outbound client is built here so requests carry a consistent
//! User-Agent header.

mod client;

pub use client::{builder, builder_with_timeout, user_agent};
