// Copyright 2025 Cowboy AI, LLC.

//! Input predicates shared by entity constructors and services

/// Ids must be strictly positive
pub fn is_valid_id(id: i64) -> bool {
    id > 0
}

/// Prices must be finite and strictly positive
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

/// Strings must contain something other than whitespace
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}
