//! Grayscale samples taken from a downsampled raster image.
//!
//! The web front-end draws the image onto a `SAMPLE_GRID`² canvas, reads its
//! RGBA bytes and hands them to [`BrightnessMap::from_rgba`]. The result is
//! published through a [`BrightnessSlot`], which the engine polls every time it
//! needs galaxy targets. A slot that is never filled is a valid steady state.

use crate::constants::SAMPLE_GRID;
use crate::error::MorphError;
use std::cell::OnceCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrightnessSample {
    pub x: u32,
    pub y: u32,
    pub brightness: u8,
}

#[derive(Clone, Debug, Default)]
pub struct BrightnessMap {
    samples: Vec<BrightnessSample>,
}

impl BrightnessMap {
    /// Build from row-major RGBA bytes of a `SAMPLE_GRID`×`SAMPLE_GRID` image.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, MorphError> {
        let expected_len = (SAMPLE_GRID * SAMPLE_GRID * 4) as usize;
        if width != SAMPLE_GRID || height != SAMPLE_GRID || rgba.len() != expected_len {
            return Err(MorphError::SampleDimensions {
                width,
                height,
                len: rgba.len(),
                expected: SAMPLE_GRID,
            });
        }
        let samples = rgba
            .chunks_exact(4)
            .enumerate()
            .map(|(i, px)| {
                let sum = px[0] as u32 + px[1] as u32 + px[2] as u32;
                BrightnessSample {
                    x: i as u32 % SAMPLE_GRID,
                    y: i as u32 / SAMPLE_GRID,
                    brightness: (sum / 3) as u8,
                }
            })
            .collect();
        Ok(Self { samples })
    }

    pub fn from_samples(samples: Vec<BrightnessSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[BrightnessSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// One-shot, shared handle to brightness data that may never arrive.
#[derive(Clone, Debug, Default)]
pub struct BrightnessSlot {
    cell: Rc<OnceCell<BrightnessMap>>,
}

impl BrightnessSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish the map. Returns false if the slot was already filled.
    pub fn fill(&self, map: BrightnessMap) -> bool {
        self.cell.set(map).is_ok()
    }

    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get(&self) -> Option<&BrightnessMap> {
        self.cell.get()
    }
}
