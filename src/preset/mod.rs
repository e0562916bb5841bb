//! Preset strings: `<RESOLUTION>_<fpsNum>_<fpsDen>_<FORMAT>`.

pub(crate) mod format;
pub(crate) mod parse;
pub(crate) mod resolution;

#[cfg(test)]
#[path = "../../tests/unit/preset/parse.rs"]
mod tests;
