/// Entity primary keys are 64-bit database identifiers.
pub type DbId = i64;
