pub mod interp;
pub mod table;
