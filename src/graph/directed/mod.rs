//! Implementations of directed graphs

mod hash_backed;
pub use self::hash_backed::*;
