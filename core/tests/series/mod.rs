// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests over generated series.
//!
//! These tests cover what happens after generation: per-occurrence edits, the recurrence
//! icon lookup, template expansion and string-typed requests.

mod events;
mod requests;
