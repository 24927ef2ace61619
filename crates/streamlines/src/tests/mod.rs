mod property_split;
pub(crate) mod utils;
