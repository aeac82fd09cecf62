//! Misc non-public utility code for the sortkey crate itself.
pub(crate) mod debug;

#[cfg(test)]
mod test;

#[cfg(test)]
pub(crate) use self::test::*;
