pub mod error;
pub mod apply;
pub mod eval;

pub mod prelude {
    pub use super::{
        error::*,
        apply::*,
        eval::*
    };
}

#[cfg(test)]
mod tests;
