mod comparison;
mod expression;
mod field;
mod operator;

pub use comparison::*;
pub use expression::*;
pub use field::*;
pub use operator::*;
