use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use pretty_hex::*;

use crate::pins::Pins;

const CAPACITY: usize = 0x10000; // 64K

// Flat 64K memory answering the shared bus. The sole contract: every tick,
// right after the CPU's tick, drive the data lines from memory on a read
// cycle or store them on a write cycle.
pub struct Memory {
    mem: Vec<u8>,
    pins: Rc<RefCell<Pins>>,
}

impl Memory {
    pub fn new(pins: Rc<RefCell<Pins>>) -> Self {
        Self { mem: vec![0; CAPACITY], pins }
    }

    pub fn peek_at(&self, addr: u16) -> u8 { self.mem[addr as usize] }

    pub fn put_at(&mut self, addr: u16, value: u8) {
        self.mem[addr as usize] = value;
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        for (i, &value) in data.iter().enumerate() {
            self.put_at(addr.wrapping_add(i as u16), value);
        }
    }

    pub fn tick(&mut self) {
        let mut pins = self.pins.borrow_mut();
        let addr = pins.address.value();
        if pins.read.is_high() {
            let value = self.peek_at(addr);
            pins.data.set_value(value);
        } else {
            self.mem[addr as usize] = pins.data.value();
        }
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        writeln!(formatter, "Zero page | {:?}", (&self.mem[0x0000..0x0100]).hex_dump())?;
        write!(formatter, "Stack     | {:?}", (&self.mem[0x0100..0x0200]).hex_dump())
    }
}
