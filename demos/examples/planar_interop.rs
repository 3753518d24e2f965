// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar interop.
//!
//! Convert two-column ROIs into Kurbo shapes and use Kurbo for geometry.
//!
//! Run:
//! - `cargo run -p understory_demos --example planar_interop`

use kurbo::{Point, Shape};
use ndarray::array;
use understory_roi::{Dendron, Ellipsoid, Polygon, Rectangle, RoiError, RoiShape};

fn main() -> Result<(), RoiError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut dendron = Dendron::new();
    dendron.push(Ellipsoid::new(array![[50.0, 50.0], [20.0, 10.0]])?);
    dendron.push(Rectangle::new(array![[0.0, 0.0], [30.0, 30.0]])?);
    dendron.push(Polygon::new(array![[60.0, 0.0], [90.0, 0.0], [75.0, 25.0]])?);
    // A volume ROI has no planar form.
    dendron.push(Rectangle::new(array![[0.0, 0.0, 0.0], [5.0, 5.0, 5.0]])?);

    let probe = Point::new(20.0, 20.0);
    for (i, roi) in dendron.iter().enumerate() {
        let planar: Option<(f64, bool)> = match roi.shape() {
            RoiShape::Ellipsoid(e) => e.to_ellipse().map(|s| (s.area(), s.contains(probe))),
            RoiShape::Rectangle(r) => r.to_rect().map(|s| (s.area(), s.contains(probe))),
            RoiShape::Polygon(p) => p
                .to_bez_path()
                .map(|s| (s.area().abs(), s.contains(probe))),
            RoiShape::Line(l) => l.to_line().map(|s| (0.0, s.contains(probe))),
        };
        match planar {
            Some((area, hit)) => println!(
                "[{i}] {}: area {area:.1}, contains {probe:?}: {hit}",
                roi.kind()
            ),
            None => log::info!("[{i}] {} is {}-D; skipping", roi.kind(), roi.ndim()),
        }
    }
    Ok(())
}
