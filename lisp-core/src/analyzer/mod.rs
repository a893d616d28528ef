pub mod error;
pub mod analyzed;
pub mod analyzer;

pub mod prelude {
    pub use super::{
        analyzed::*,
        analyzer::*,
        error::*
    };
}
