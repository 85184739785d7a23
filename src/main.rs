// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Polysnap: replay a gesture script and print the resulting shapes

fn main() -> anyhow::Result<()> {
    polysnap::run()
}
