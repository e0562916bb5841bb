//! Blank clip descriptors.

pub(crate) mod builder;
pub(crate) mod descriptor;

#[cfg(test)]
#[path = "../../tests/unit/clip/builder.rs"]
mod tests;
