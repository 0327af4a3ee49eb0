pub(crate) mod minimum;
pub(crate) mod walker;
