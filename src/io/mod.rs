//! File format input/output

pub mod dxf;
