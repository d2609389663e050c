// Signal groups. A Bus8 is eight lines viewed as a byte, a Bus16 is two
// Bus8 halves viewed as a 16 bit word. Nothing here has behavior beyond
// packing and unpacking bits.

#[derive(Debug, Copy, Clone, Default, PartialOrd, PartialEq)]
pub struct Bus8 {
    value: u8,
}

impl Bus8 {
    pub fn new() -> Self { Self { value: 0 } }

    pub fn value(&self) -> u8 { self.value }
    pub fn set_value(&mut self, value: u8) { self.value = value }

    // Individual line access, bit 0 is the least significant line.
    pub fn line(&self, index: u8) -> bool {
        (self.value & (1 << index)) != 0
    }

    pub fn set_line(&mut self, index: u8, high: bool) {
        let bit = 1 << index;
        self.value = if high { self.value | bit } else { self.value & !bit };
    }
}

#[derive(Debug, Copy, Clone, Default, PartialOrd, PartialEq)]
pub struct Bus16 {
    pub high: Bus8,
    pub low: Bus8,
}

impl Bus16 {
    pub fn new() -> Self { Self { high: Bus8::new(), low: Bus8::new() } }

    pub fn value(&self) -> u16 {
        ((self.high.value() as u16) << 8) | (self.low.value() as u16)
    }

    pub fn set_value(&mut self, value: u16) {
        self.high.set_value((value >> 8) as u8);
        self.low.set_value(value as u8);
    }

    pub fn line(&self, index: u8) -> bool {
        if index < 8 { self.low.line(index) } else { self.high.line(index - 8) }
    }

    pub fn set_line(&mut self, index: u8, high: bool) {
        if index < 8 {
            self.low.set_line(index, high)
        } else {
            self.high.set_line(index - 8, high)
        }
    }

    // Copies both halves independently. No byte order involved.
    pub fn load(&mut self, from: Bus16) {
        self.high = from.high;
        self.low = from.low;
    }
}
