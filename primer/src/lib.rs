pub mod conversions;
pub mod demo;
pub mod errors;
pub mod greeter;
pub mod number;

#[cfg(test)]
mod testing;
