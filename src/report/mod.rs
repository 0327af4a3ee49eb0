pub(crate) mod diagnostic;
