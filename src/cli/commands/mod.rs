pub mod course;
pub mod reference;
