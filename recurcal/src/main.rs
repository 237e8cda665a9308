// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! recurcal - recurring-event dates with explicit month-end and leap-day policies

use recurcal_cli::run;

#[tokio::main]
async fn main() {
    // The error itself is already on stderr.
    if run().await.is_err() {
        std::process::exit(1);
    }
}
