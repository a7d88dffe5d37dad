// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{QrImage, render_qr, render_qr_map};
use std::collections::HashMap;

#[test]
fn test_renders_square_image_of_minimum_size() {
    let image: QrImage = render_qr("3f6c1d2e-9a4b-4c8d-b1e2-aa55cc77ee99").expect("QR renders");

    assert_eq!(image.width(), image.height());
    assert!(image.width() >= 200);
}

#[test]
fn test_pixel_buffer_matches_dimensions() {
    let image: QrImage = render_qr("3f6c1d2e-9a4b-4c8d-b1e2-aa55cc77ee99").expect("QR renders");
    let expected: usize = (image.width() as usize) * (image.height() as usize) * 3;
    assert_eq!(image.pixels().len(), expected);
}

#[test]
fn test_rendering_is_deterministic() {
    let first: QrImage = render_qr("ticket-id").expect("QR renders");
    let second: QrImage = render_qr("ticket-id").expect("QR renders");
    assert_eq!(first, second);
}

#[test]
fn test_map_contains_one_image_per_id() {
    let ids: Vec<String> = vec![
        String::from("id-0001"),
        String::from("id-0002"),
        String::from("id-0003"),
    ];
    let images: HashMap<String, QrImage> = render_qr_map(&ids).expect("QR map renders");

    assert_eq!(images.len(), 3);
    for id in &ids {
        assert!(images.contains_key(id));
    }
}
