// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date generation tests for the recurcal-core crate.
//!
//! These tests pin the dates each kind of rule produces, including the short-month and
//! leap-day policies and the horizon limits.

mod horizon;
mod yearly;
