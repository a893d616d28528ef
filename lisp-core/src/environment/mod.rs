pub mod arena;
pub mod environment;

pub mod prelude {
    pub use super::{
        arena::*,
        environment::*
    };
}
