use crate::bus::{Bus16, Bus8};

// An 8 bit register is a Bus8 plus the ALU operations the 6502 can route
// through it. The operations are pure: they return the new value together
// with the flags it would produce and leave the register untouched. The
// tick engine decides where results land.
//
// incr/decr are the exception: they mutate in place and never report flags,
// matching the dedicated increment hardware used for PC/SP/address fixups.
#[derive(Debug, Copy, Clone, Default, PartialOrd, PartialEq)]
pub struct Register8 {
    bus: Bus8,
}

impl Register8 {
    pub fn new() -> Self { Self { bus: Bus8::new() } }

    pub fn value(&self) -> u8 { self.bus.value() }
    pub fn set_value(&mut self, value: u8) { self.bus.set_value(value) }
    pub fn bus(&self) -> Bus8 { self.bus }
    pub fn line(&self, index: u8) -> bool { self.bus.line(index) }

    pub fn incr(&mut self) { self.bus.set_value(self.value().wrapping_add(1)) }
    pub fn decr(&mut self) { self.bus.set_value(self.value().wrapping_sub(1)) }

    // 9 bit unsigned sum. Subtraction is adc of the complemented operand,
    // there is no separate borrow path.
    pub fn adc(&self, operand: u8, carry_in: bool) -> (u8, bool, bool, bool, bool) {
        let sum = self.value() as u16 + operand as u16 + carry_in as u16;
        let value = sum as u8;
        let carry = sum > 0xff;
        let overflow = ((operand ^ value) & (self.value() ^ value) & 0x80) != 0;
        (value, carry, overflow, value & 0x80 != 0, value == 0)
    }

    pub fn shift_left(&self) -> (u8, bool, bool, bool) {
        let value = self.value() << 1;
        (value, self.line(7), value & 0x80 != 0, value == 0)
    }

    pub fn shift_right(&self) -> (u8, bool, bool, bool) {
        let value = self.value() >> 1;
        (value, self.line(0), value & 0x80 != 0, value == 0)
    }

    pub fn rotate_left(&self, carry_in: bool) -> (u8, bool, bool, bool) {
        let value = (self.value() << 1) | carry_in as u8;
        (value, self.line(7), value & 0x80 != 0, value == 0)
    }

    pub fn rotate_right(&self, carry_in: bool) -> (u8, bool, bool, bool) {
        let value = (self.value() >> 1) | ((carry_in as u8) << 7);
        (value, self.line(0), value & 0x80 != 0, value == 0)
    }

    pub fn and(&self, operand: u8) -> (u8, bool, bool) {
        let value = self.value() & operand;
        (value, value & 0x80 != 0, value == 0)
    }

    pub fn or(&self, operand: u8) -> (u8, bool, bool) {
        let value = self.value() | operand;
        (value, value & 0x80 != 0, value == 0)
    }

    pub fn xor(&self, operand: u8) -> (u8, bool, bool) {
        let value = self.value() ^ operand;
        (value, value & 0x80 != 0, value == 0)
    }
}

// Two 8 bit registers viewed as one 16 bit one. PC and the internal address
// register are this shape, with the halves individually addressable.
#[derive(Debug, Copy, Clone, Default, PartialOrd, PartialEq)]
pub struct Register16 {
    pub high: Register8,
    pub low: Register8,
}

impl Register16 {
    pub fn new() -> Self { Self { high: Register8::new(), low: Register8::new() } }

    pub fn value(&self) -> u16 {
        ((self.high.value() as u16) << 8) | (self.low.value() as u16)
    }

    pub fn set_value(&mut self, value: u16) {
        self.high.set_value((value >> 8) as u8);
        self.low.set_value(value as u8);
    }

    pub fn bus(&self) -> Bus16 {
        Bus16 { high: self.high.bus(), low: self.low.bus() }
    }

    pub fn load(&mut self, from: Bus16) {
        self.high.set_value(from.high.value());
        self.low.set_value(from.low.value());
    }

    pub fn incr(&mut self) { self.set_value(self.value().wrapping_add(1)) }
    pub fn decr(&mut self) { self.set_value(self.value().wrapping_sub(1)) }
}
