use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MorphError {
    #[error("brightness buffer is {width}x{height} with {len} bytes, expected {expected}x{expected} RGBA")]
    SampleDimensions {
        width: u32,
        height: u32,
        len: usize,
        expected: u32,
    },
    #[error("canvas has zero area ({width}x{height})")]
    EmptyCanvas { width: f32, height: f32 },
}
