// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dendron basics.
//!
//! Build one ROI of each kind, add them to a dendron, and remove a few.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example dendron_basics`

use ndarray::array;
use understory_roi::{Dendron, Ellipsoid, Line, Polygon, Rectangle, Roi, RoiError};

fn main() -> Result<(), RoiError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut dendron = Dendron::new();
    println!("created {}", dendron.id());

    dendron.add(Some(Roi::from(Ellipsoid::new(array![
        [120.0, 80.0],
        [15.0, 10.0]
    ])?)));
    dendron.add(Some(Roi::from(Line::new(array![
        [0.0, 0.0],
        [64.0, 48.0]
    ])?)));
    dendron.add(Some(Roi::from(Rectangle::new(array![
        [10.0, 10.0],
        [50.0, 40.0]
    ])?)));
    dendron.add(Some(Roi::from(Polygon::new(array![
        [0.0, 0.0],
        [20.0, 0.0],
        [20.0, 20.0],
        [0.0, 20.0]
    ])?)));

    // Absent ROIs are ignored; with RUST_LOG=debug this is reported.
    dendron.add(None);

    println!("count after adds: {}", dendron.count());
    for (i, roi) in dendron.iter().enumerate() {
        println!(
            "  [{i}] {} ndim={} owner={:?}",
            roi.kind(),
            roi.ndim(),
            roi.dendron()
        );
    }

    // Remove the line; the rectangle shifts into index 1.
    let line = dendron.remove(1)?;
    println!(
        "removed {} (owner now {:?}); count = {}",
        line.kind(),
        line.dendron(),
        dendron.count()
    );

    match dendron.remove(10) {
        Ok(_) => unreachable!("index 10 is out of range"),
        Err(err) => println!("expected failure: {err}"),
    }

    // A malformed array is rejected before it can reach the dendron.
    if let Err(err) = Rectangle::new(array![[1.0, 2.0, 3.0]]) {
        println!("rejected: {err}");
    }

    let rest = dendron.clear();
    println!(
        "cleared {} ROIs; all unowned: {}",
        rest.len(),
        rest.iter().all(|roi| roi.dendron().is_none())
    );
    Ok(())
}
