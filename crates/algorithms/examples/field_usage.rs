// Walks through the GF(2^359) API: parsing, arithmetic, inversion and the
// trace-based quadratic solver.

use gf359_algorithms::{Error, Gf2_359 as FieldElement};

// Parse two elements, multiply them and divide the product back out
fn arithmetic_example() -> Result<(FieldElement, FieldElement), Error> {
    let a = FieldElement::from_hex("0x9f3c8a71d4b29e6c8b5fa31d27c4e9a6")?;
    let b: FieldElement = "7d1a9e8f63b0c4d52a79f8e6b3d2c1a0".parse()?;

    let product = a * b;
    let quotient = product.div(&b)?;
    Ok((product, quotient))
}

// a * a^-1 = 1, and zero has no inverse
fn inversion_example() -> Result<FieldElement, Error> {
    let a = FieldElement::from_u64(2);
    let inv = a.invert()?;
    debug_assert!((a * inv).is_one());

    if let Err(e) = FieldElement::zero().invert() {
        println!("Expected failure: {}", e);
    }
    Ok(inv)
}

// z^2 + z = c has a solution exactly when Tr(c) = 0
fn quadratic_example() -> Result<Option<FieldElement>, Error> {
    let c = FieldElement::from_hex("abcdef1234567890fedcba9876543210")?;
    println!("Tr(c) = {}", c.trace());
    Ok(c.solve_quadratic())
}

fn main() {
    println!("GF(2^359) Field Usage Example");
    println!("=============================");

    match arithmetic_example() {
        Ok((product, quotient)) => {
            println!("a * b       = {}", product);
            println!("(a * b) / b = {:#x}", quotient);
        }
        Err(e) => println!("Arithmetic error: {}", e),
    }

    match inversion_example() {
        Ok(inv) => println!("x^-1        = {}", inv),
        Err(e) => println!("Inversion error: {}", e),
    }

    match quadratic_example() {
        Ok(Some(z)) => println!("z           = {}", z),
        Ok(None) => println!("No solution"),
        Err(e) => println!("Quadratic error: {}", e),
    }

    // Malformed input is reported with its position
    if let Err(e) = FieldElement::from_hex("12g4") {
        println!("Rejected: {}", e);
    }
}
