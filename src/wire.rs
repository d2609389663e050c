// A single signal line. Control pins on the 6502 are level triggered, so a
// wire only knows whether it's being held high or low.
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct Wire {
    high: bool,
}

impl Wire {
    pub fn new(high: bool) -> Self { Self { high } }

    pub fn set(&mut self) { self.high = true }
    pub fn clear(&mut self) { self.high = false }
    pub fn put(&mut self, high: bool) { self.high = high }

    pub fn is_high(&self) -> bool { self.high }
    pub fn is_low(&self) -> bool { !self.high }
}
