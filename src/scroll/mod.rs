pub(crate) mod parallax;
pub(crate) mod smooth;
pub(crate) mod trigger;
