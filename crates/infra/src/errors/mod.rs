//! Infrastructure error plumbing

pub(crate) mod conversions;

pub(crate) use conversions::from_reqwest;
