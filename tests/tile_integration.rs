// SPDX-License-Identifier: MPL-2.0
//! End-to-end tile behavior with images decoded from disk.

use image_rs::{Rgba, RgbaImage};
use image_strip::media;
use image_strip::ui::fit_image::{self, LoadStatus};
use image_strip::ui::tile::{Effect, ImageTile, Message, OwnerId};
use std::path::Path;
use tempfile::tempdir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> String {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
        .save(&path)
        .expect("failed to write test image");
    path.to_string_lossy().into_owned()
}

/// Feeds both load notifications the way the runtime delivers them.
async fn deliver_load(tile: &mut ImageTile, uri: &str) {
    let image = tile.image_id().expect("image set");
    let result = media::load_uri(uri.to_string()).await;

    if let Ok(data) = &result {
        let _ = tile.update(Message::Image(fit_image::Message::ElementLoaded {
            image,
            width: data.width,
            height: data.height,
        }));
    }
    let _ = tile.update(Message::Image(fit_image::Message::ContentDecoded {
        image,
        result,
    }));
}

#[tokio::test]
async fn decoded_image_is_centered_and_shown() {
    let dir = tempdir().expect("temp dir");
    let uri = write_png(dir.path(), "narrow.png", 100, 40);

    let mut tile = ImageTile::new();
    tile.set_current_width(200);
    tile.set_current_height(100);
    tile.set_horizontal_margin(10);
    tile.set_vertical_margin(10);
    let _ = tile.set_image_source(Some(&uri));
    assert!(tile.is_loading());

    deliver_load(&mut tile, &uri).await;

    let image = tile.image().expect("image");
    assert_eq!(image.status(), LoadStatus::Decoded);
    assert!(image.style().is_visible());
    assert_eq!(image.style().left, Some(50));
    assert_eq!(image.style().bottom, Some(10));
    assert!(!tile.is_loading());
    assert_eq!(tile.image_and_margin_width(), 120);
}

#[tokio::test]
async fn missing_file_degrades_silently() {
    let dir = tempdir().expect("temp dir");
    let uri = dir.path().join("absent.png").to_string_lossy().into_owned();

    let mut tile = ImageTile::new();
    let _ = tile.set_image_source(Some(&uri));
    deliver_load(&mut tile, &uri).await;

    let image = tile.image().expect("image");
    assert_eq!(image.status(), LoadStatus::Failed);
    assert!(!image.style().is_visible());
    assert!(!tile.is_loading());
}

#[tokio::test]
async fn late_load_of_replaced_image_leaves_current_one_pending() {
    let dir = tempdir().expect("temp dir");
    let first = write_png(dir.path(), "first.png", 8, 8);
    let second = write_png(dir.path(), "second.png", 8, 8);

    let mut tile = ImageTile::new();
    let _ = tile.set_image_source(Some(&first));
    let first_id = tile.image_id().expect("first image");
    let _ = tile.set_image_source(Some(&second));

    let data = media::load_uri(first).await;
    let _ = tile.update(Message::Image(fit_image::Message::ContentDecoded {
        image: first_id,
        result: data,
    }));

    let image = tile.image().expect("image");
    assert_eq!(image.uri(), second);
    assert_eq!(image.status(), LoadStatus::Pending);
    assert!(!image.style().is_visible());
    assert!(tile.is_loading());
}

#[test]
fn animation_endpoints_follow_current_box() {
    let mut tile = ImageTile::new();
    tile.set_current_width(100);
    tile.set_current_x(20);
    tile.init_animation(50, 0);

    assert_eq!(
        (
            tile.start_width(),
            tile.start_position(),
            tile.end_width(),
            tile.end_position()
        ),
        (100, 20, 50, 0)
    );
}

#[test]
fn click_is_forwarded_with_index() {
    let mut tile = ImageTile::new();
    tile.set_owner(OwnerId::new(42));
    tile.set_index(2);
    let _ = tile.set_image_source(Some("any.png"));
    let image = tile.image_id().expect("image");

    let (effect, _) = tile.update(Message::Image(fit_image::Message::Clicked(image)));
    assert_eq!(
        effect,
        Effect::ImageClicked {
            owner: OwnerId::new(42),
            index: 2,
        }
    );
}
