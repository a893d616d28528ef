pub mod symbol;
pub mod number;
pub mod expression;
pub mod list;
pub mod procedure;

pub mod prelude {
    pub use super::{
        symbol::*,
        number::*,
        expression::*,
        list::*,
        procedure::*
    };
}
