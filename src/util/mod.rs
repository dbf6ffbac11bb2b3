pub(crate) mod fmt;
#[cfg(test)]
pub(crate) mod panic;
