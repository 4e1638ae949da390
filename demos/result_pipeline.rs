//! Result pipeline example
//!
//! This example shows:
//! - Lifting `str::parse` failures into `FpResult` with `attempt`
//! - Chaining validation steps that stop at the first error
//! - Falling back to defaults for absent configuration values

use cim_fp::{attempt, err, flat_map_result, map_result, ok, Either, FpError, FpResult, Optional};

fn parse_quantity(raw: &str) -> FpResult<u32> {
    attempt(|| {
        raw.parse::<u32>()
            .map_err(|e| FpError::failure(format!("'{raw}' is not a quantity: {e}")))
    })
}

fn ensure_positive(quantity: u32) -> FpResult<u32> {
    if quantity > 0 {
        ok(quantity)
    } else {
        err(FpError::failure("quantity must be positive"))
    }
}

fn price_in_cents(raw: &str, unit_price: u32) -> FpResult<u32> {
    let validated = flat_map_result(parse_quantity(raw), ensure_positive);
    map_result(validated, |quantity| quantity * unit_price)
}

fn main() {
    println!("=== Result pipeline ===\n");

    for raw in ["3", "0", "three"] {
        match price_in_cents(raw, 250) {
            Either::Right(total) => println!("  {raw:>6} -> total {total} cents"),
            Either::Left(error) => println!("  {raw:>6} -> rejected: {error}"),
        }
    }

    let discount: Optional<u32> = Optional::none();
    println!("\n  discount -> {} cents", discount.get_or_else(0));
}
