#![allow(dead_code)]

pub mod counter;
pub mod jtag;
