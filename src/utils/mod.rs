pub mod fetching;
pub(crate) mod logging;
