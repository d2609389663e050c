use crate::bus::{Bus16, Bus8};
use crate::wire::Wire;

// The shared bus between the CPU and whatever answers it. This is the whole
// contract: each tick the CPU drives the address, the read line and possibly
// the data lines; the memory side must then either drive data (read high) or
// store data (read low), combinationally, before the next CPU tick.
//
// nmi, irq, ready and reset are active low. reset starts low, so a freshly
// wired CPU is halted until reset() releases it.
pub struct Pins {
    pub address: Bus16,
    pub data: Bus8,

    pub read: Wire,
    pub nmi: Wire,
    pub irq: Wire,
    pub ready: Wire,
    pub reset: Wire,
    pub sync: Wire,
}

impl Pins {
    pub fn new() -> Self {
        Self {
            address: Bus16::new(),
            data: Bus8::new(),
            read: Wire::new(true),
            nmi: Wire::new(true),
            irq: Wire::new(true),
            ready: Wire::new(true),
            reset: Wire::new(false),
            sync: Wire::new(false),
        }
    }
}

impl Default for Pins {
    fn default() -> Self { Self::new() }
}
