pub mod country;
pub mod locations;
