//! Color inputs and per-format background samples.

pub(crate) mod convert;
pub(crate) mod input;

#[cfg(test)]
#[path = "../../tests/unit/color/color.rs"]
mod tests;
