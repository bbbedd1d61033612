//! Common function, data, constant use in test and benchmark

/* mod declaration */
pub mod constant;
pub mod generator;
pub mod io;
