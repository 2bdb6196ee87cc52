// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent classification for Agropilot requests.
//!
//! This crate provides [`IntentRouter`], a zero-cost, zero-latency keyword
//! router that maps an incoming message (plus whether an image is attached)
//! to the handler that should answer it. No LLM pre-call, no network.
//!
//! Precedence is purely check order: translation > location > disease >
//! chat. The reasoning stager in `agropilot-reasoning` carries its own,
//! differently-ordered action keyword list; the two are intentionally not
//! unified.

pub mod intent;

pub use intent::{Intent, IntentRouter};
