use std::fmt;

use crate::reg::Register8;

// Bit for each flag
pub const CARRY: u8 = 0b0000_0001;
pub const ZERO: u8 = 0b0000_0010;
pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;
pub const DECIMAL: u8 = 0b0000_1000;
pub const BREAK: u8 = 0b0001_0000;
pub const OVERFLOW: u8 = 0b0100_0000;
pub const NEGATIVE: u8 = 0b1000_0000;

// The P register. A Register8 with the seven 6502 flags at their fixed bit
// positions. Bit 5 is unconnected.
#[derive(Debug, Copy, Clone, Default, PartialOrd, PartialEq)]
pub struct Status {
    reg: Register8,
}

impl Status {
    pub fn new() -> Self { Self { reg: Register8::new() } }

    pub fn value(&self) -> u8 { self.reg.value() }
    pub fn set_value(&mut self, value: u8) { self.reg.set_value(value) }

    fn contains(&self, flag: u8) -> bool { (self.value() & flag) != 0 }

    fn change(&mut self, flag: u8, condition: bool) {
        let value = self.value();
        self.reg.set_value(if condition { value | flag } else { value & !flag });
    }

    pub fn carry(&self) -> bool { self.contains(CARRY) }
    pub fn zero(&self) -> bool { self.contains(ZERO) }
    pub fn interrupt_disable(&self) -> bool { self.contains(INTERRUPT_DISABLE) }
    pub fn decimal(&self) -> bool { self.contains(DECIMAL) }
    pub fn brk(&self) -> bool { self.contains(BREAK) }
    pub fn overflow(&self) -> bool { self.contains(OVERFLOW) }
    pub fn negative(&self) -> bool { self.contains(NEGATIVE) }

    pub fn set_carry(&mut self, condition: bool) { self.change(CARRY, condition) }
    pub fn set_zero(&mut self, condition: bool) { self.change(ZERO, condition) }
    pub fn set_interrupt_disable(&mut self, condition: bool) { self.change(INTERRUPT_DISABLE, condition) }
    pub fn set_decimal(&mut self, condition: bool) { self.change(DECIMAL, condition) }
    pub fn set_brk(&mut self, condition: bool) { self.change(BREAK, condition) }
    pub fn set_overflow(&mut self, condition: bool) { self.change(OVERFLOW, condition) }
    pub fn set_negative(&mut self, condition: bool) { self.change(NEGATIVE, condition) }

    // Zero and negative always travel together on register loads.
    pub fn change_zero_negative(&mut self, value: u8) {
        self.set_zero(value == 0);
        self.set_negative(value & 0x80 != 0);
    }
}

impl fmt::Display for Status {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}{}_{}{}{}{}{}",
               if self.negative() { 'n' } else { '_' },
               if self.overflow() { 'v' } else { '_' },
               if self.brk() { 'b' } else { '_' },
               if self.decimal() { 'd' } else { '_' },
               if self.interrupt_disable() { 'i' } else { '_' },
               if self.zero() { 'z' } else { '_' },
               if self.carry() { 'c' } else { '_' })
    }
}
