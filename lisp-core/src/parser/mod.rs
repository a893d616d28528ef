pub mod error;
pub mod parser;

pub mod prelude {
    pub use super::{
        error::*,
        parser::*
    };
}

#[cfg(test)]
mod tests;
