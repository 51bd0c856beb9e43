/// Random formula generation, mostly useful for testing.
pub mod formula_randomizer;
