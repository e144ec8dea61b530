//! The clinic's sample owners, loaded when example seeding is enabled.

use crate::domain::{FieldErrors, OwnerDetails};

const EXAMPLE_OWNERS: [[&str; 5]; 10] = [
    ["George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"],
    ["Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"],
    ["Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"],
    ["Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"],
    ["Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"],
    ["Jean", "Coleman", "105 N. Lake St.", "Monona", "6085552654"],
    ["Jeff", "Black", "1450 Oak Blvd.", "Monona", "6085555387"],
    ["Maria", "Escobito", "345 Maple St.", "Madison", "6085557683"],
    ["David", "Schroeder", "2749 Blackhawk Trail", "Madison", "6085559435"],
    ["Carlos", "Estaban", "2335 Independence La.", "Waunakee", "6085555487"],
];

/// Validated sample owners in insertion order.
///
/// # Errors
/// Only if the constant table stops satisfying owner validation.
pub fn example_owners() -> Result<Vec<OwnerDetails>, FieldErrors> {
    EXAMPLE_OWNERS
        .iter()
        .map(|[first_name, last_name, address, city, telephone]| {
            OwnerDetails::try_from_parts(*first_name, *last_name, *address, *city, *telephone)
        })
        .collect()
}
