// Host-side tests for image brightness sampling.

use bitmorph_core::*;

fn rgba_grid(pixel: impl Fn(u32, u32) -> [u8; 4]) -> Vec<u8> {
    (0..SAMPLE_GRID * SAMPLE_GRID)
        .flat_map(|i| pixel(i % SAMPLE_GRID, i / SAMPLE_GRID))
        .collect()
}

#[test]
fn brightness_is_mean_of_rgb_ignoring_alpha() {
    let rgba = rgba_grid(|x, y| {
        if (x, y) == (1, 1) {
            [30, 60, 90, 0]
        } else {
            [255, 255, 254, 255]
        }
    });
    let map = BrightnessMap::from_rgba(SAMPLE_GRID, SAMPLE_GRID, &rgba).expect("valid size");
    assert_eq!(map.len(), 4096);
    let s = map.samples()[SAMPLE_GRID as usize + 1];
    assert_eq!((s.x, s.y, s.brightness), (1, 1, 60));
    // integer mean truncates
    assert_eq!(map.samples()[0].brightness, 254);
}

#[test]
fn samples_are_row_major() {
    let rgba = rgba_grid(|x, _| [x as u8 * 4, x as u8 * 4, x as u8 * 4, 255]);
    let map = BrightnessMap::from_rgba(SAMPLE_GRID, SAMPLE_GRID, &rgba).expect("valid size");
    let last = map.samples().last().copied().expect("non-empty");
    assert_eq!((last.x, last.y), (SAMPLE_GRID - 1, SAMPLE_GRID - 1));
    assert_eq!(last.brightness, 252);
}

#[test]
fn wrong_dimensions_are_rejected() {
    let rgba = vec![0u8; 32 * 32 * 4];
    let err = BrightnessMap::from_rgba(32, 32, &rgba).unwrap_err();
    assert_eq!(
        err,
        MorphError::SampleDimensions {
            width: 32,
            height: 32,
            len: rgba.len(),
            expected: SAMPLE_GRID,
        }
    );
    let short = vec![0u8; 10];
    assert!(BrightnessMap::from_rgba(SAMPLE_GRID, SAMPLE_GRID, &short).is_err());
}

#[test]
fn slot_is_filled_once_and_shared() {
    let slot = BrightnessSlot::new();
    let reader = slot.clone();
    assert!(!reader.is_ready());
    assert!(reader.get().is_none());

    let first = BrightnessMap::from_samples(vec![BrightnessSample {
        x: 0,
        y: 0,
        brightness: 9,
    }]);
    assert!(slot.fill(first));
    assert!(reader.is_ready());
    assert_eq!(reader.get().map(|m| m.len()), Some(1));

    assert!(!slot.fill(BrightnessMap::default()));
    assert_eq!(reader.get().map(|m| m.samples()[0].brightness), Some(9));
}
