pub mod cases;
pub mod extraction;
