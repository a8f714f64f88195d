pub(crate) mod cases;
pub(crate) mod serve;
