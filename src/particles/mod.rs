pub(crate) mod buffers;
pub(crate) mod config;
pub(crate) mod field;
pub(crate) mod particle;
