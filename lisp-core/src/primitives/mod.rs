pub mod arithmetic;
pub mod lists;
pub mod meta;

use crate::{
    environment::prelude::Environments,
    expression::prelude::{Arity, Expression, Primitive},
};

pub const PRIMITIVES: &[Primitive] = &[
    Primitive::new("eval", Arity::Exactly(1), meta::eval),
    Primitive::new("apply", Arity::AtLeast(2), meta::apply),
    Primitive::new("load", Arity::Exactly(1), meta::load),

    Primitive::new("car", Arity::Exactly(1), lists::car),
    Primitive::new("cdr", Arity::Exactly(1), lists::cdr),
    Primitive::new("cons", Arity::Exactly(2), lists::cons),
    Primitive::new("list", Arity::AtLeast(0), lists::list),
    Primitive::new("pair?", Arity::Exactly(1), lists::is_pair),
    Primitive::new("null?", Arity::Exactly(1), lists::is_null),
    Primitive::new("equal?", Arity::Exactly(2), lists::is_equal),
    Primitive::new("not", Arity::Exactly(1), lists::not),

    Primitive::new("+", Arity::AtLeast(0), arithmetic::add),
    Primitive::new("-", Arity::AtLeast(1), arithmetic::sub),
    Primitive::new("*", Arity::AtLeast(0), arithmetic::mul),
    Primitive::new("/", Arity::AtLeast(1), arithmetic::div),
    Primitive::new("=", Arity::AtLeast(1), arithmetic::equal),
    Primitive::new("<", Arity::AtLeast(1), arithmetic::less),
    Primitive::new(">", Arity::AtLeast(1), arithmetic::greater),
    Primitive::new("<=", Arity::AtLeast(1), arithmetic::less_or_equal),
    Primitive::new(">=", Arity::AtLeast(1), arithmetic::greater_or_equal),
];

/// Binds every primitive in the root frame.
pub fn install(environments: &mut Environments) {
    for primitive in PRIMITIVES {
        environments.define_global(primitive.name, Expression::Primitive(*primitive));
    }
}

#[cfg(test)]
mod tests;
