#![forbid(unsafe_code)]

mod builtin;
mod source;

pub use source::{InMemoryProfiles, OptionProfile, ProfileSource, TextOrList};
