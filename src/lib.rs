extern crate env_logger;
#[macro_use]
extern crate log;

pub mod bus;
pub mod cpu;
pub mod mem;
pub mod pins;
pub mod reg;
pub mod status;
pub mod wire;
