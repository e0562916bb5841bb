//! Track stacks over blank clips.

pub(crate) mod composition;
pub(crate) mod spec;

#[cfg(test)]
#[path = "../../tests/unit/scene/composition.rs"]
mod tests;
