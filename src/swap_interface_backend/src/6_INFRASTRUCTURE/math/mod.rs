pub mod pure_math;

pub use pure_math::{
    format_display_amount, multiply_and_divide, nat_to_biguint, parse_display_amount,
};
