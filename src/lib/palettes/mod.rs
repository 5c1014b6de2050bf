pub mod lines;
pub mod mode;
pub mod pal_gpl;
pub mod palette;
pub mod row;
pub mod scan;
