pub(crate) mod entry;
pub(crate) mod sequence;
pub(crate) mod state;
