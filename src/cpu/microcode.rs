use crate::pins::Pins;
use crate::reg::Register8;

use super::{Cpu, Interrupt};

// One control line combination. A decode table cycle is an ordered list of
// these, executed in order within a single tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Micro {
    // Sequencing
    NextOp,
    PcIncr,
    SpIncr,
    SpDecr,
    Write,

    // Flags
    Clc,
    Cld,
    Cli,
    Clv,
    Sec,
    Sed,
    Sei,
    BrkSei,

    // Address bus
    VecLowToAddr,
    VecHighToAddr,
    PcToAddr,
    AdToAddr,
    SpToAddr,
    AddrToPc,

    // Into the data latch
    PchToData,
    PclToData,
    PToData,
    AToData,
    XToData,
    YToData,

    // Out of the data latch
    DataToPch,
    DataToPcl,
    DataToP,
    DataToA,
    DataToX,
    DataToY,
    DataToAdh,
    DataToAdl,

    // ALU
    Adc,
    Sbc,
    And,
    Ora,
    Eor,
    Cmp,
    Cpx,
    Cpy,
    Asl,
    Lsr,
    Rol,
    Ror,

    // Address arithmetic
    AdlPlusX,
    AdlPlusY,
    AdlIncr,
    AdhIncr,
    AdhPlusCarry,
    ChkCarry,
}

impl Cpu {
    pub(super) fn perform(&mut self, pins: &mut Pins, op: Micro) {
        match op {
            // Sequencing
            Micro::NextOp => pins.sync.set(),
            Micro::PcIncr => self.pc.incr(),
            Micro::SpIncr => self.sp.incr(),
            Micro::SpDecr => self.sp.decr(),
            // Writes are suppressed while resetting
            Micro::Write => pins.read.put(self.interrupt == Interrupt::Reset),

            // Flags
            Micro::Clc => self.p.set_carry(false),
            Micro::Cld => self.p.set_decimal(false),
            Micro::Cli => self.p.set_interrupt_disable(false),
            Micro::Clv => self.p.set_overflow(false),
            Micro::Sec => self.p.set_carry(true),
            Micro::Sed => self.p.set_decimal(true),
            Micro::Sei => self.p.set_interrupt_disable(true),
            Micro::BrkSei => {
                if self.interrupt == Interrupt::Irq || self.interrupt == Interrupt::Brk {
                    self.p.set_interrupt_disable(true)
                }
            }

            // Address bus
            Micro::VecLowToAddr => pins.address.set_value(self.vector()),
            Micro::VecHighToAddr => pins.address.set_value(self.vector() + 1),
            Micro::PcToAddr => pins.address.load(self.pc.bus()),
            Micro::AdToAddr => pins.address.load(self.ad.bus()),
            Micro::AddrToPc => self.pc.load(pins.address),
            Micro::SpToAddr => {
                pins.address.high.set_value(0x01);
                pins.address.low.set_value(self.sp.value());
            }

            // Into the data latch
            Micro::PchToData => self.data.set_value(self.pc.high.value()),
            Micro::PclToData => self.data.set_value(self.pc.low.value()),
            Micro::PToData => self.data.set_value(self.p.value()),
            Micro::AToData => self.data.set_value(self.a.value()),
            Micro::XToData => self.data.set_value(self.x.value()),
            Micro::YToData => self.data.set_value(self.y.value()),

            // Out of the data latch
            Micro::DataToPch => self.pc.high.set_value(self.data.value()),
            Micro::DataToPcl => self.pc.low.set_value(self.data.value()),
            Micro::DataToP => self.p.set_value(self.data.value()),
            Micro::DataToA => {
                self.a.set_value(self.data.value());
                self.check_nz(self.a.value());
            }
            Micro::DataToX => {
                self.x.set_value(self.data.value());
                self.check_nz(self.x.value());
            }
            Micro::DataToY => {
                self.y.set_value(self.data.value());
                self.check_nz(self.y.value());
            }
            Micro::DataToAdh => self.ad.high.set_value(self.data.value()),
            // A zero page pointer, so the high half clears too
            Micro::DataToAdl => {
                self.ad.low.set_value(self.data.value());
                self.ad.high.set_value(0x00);
            }

            // ALU
            Micro::Adc => {
                let result = self.a.adc(self.data.value(), self.p.carry());
                self.update_arith(result);
            }
            Micro::Sbc => {
                let result = self.a.adc(!self.data.value(), self.p.carry());
                self.update_arith(result);
            }
            Micro::And => {
                let result = self.a.and(self.data.value());
                self.update_logic(result);
            }
            Micro::Ora => {
                let result = self.a.or(self.data.value());
                self.update_logic(result);
            }
            Micro::Eor => {
                let result = self.a.xor(self.data.value());
                self.update_logic(result);
            }
            Micro::Cmp => self.compare(self.a),
            Micro::Cpx => self.compare(self.x),
            Micro::Cpy => self.compare(self.y),
            Micro::Asl => {
                let result = self.shift_operand().shift_left();
                self.update_shift(result);
            }
            Micro::Lsr => {
                let result = self.shift_operand().shift_right();
                self.update_shift(result);
            }
            Micro::Rol => {
                let result = self.shift_operand().rotate_left(self.p.carry());
                self.update_shift(result);
            }
            Micro::Ror => {
                let result = self.shift_operand().rotate_right(self.p.carry());
                self.update_shift(result);
            }

            // Address arithmetic
            Micro::AdlPlusX => {
                let (value, carry, _, _, _) = self.ad.low.adc(self.x.value(), false);
                self.ad.low.set_value(value);
                self.addr_carry = carry;
            }
            Micro::AdlPlusY => {
                let (value, carry, _, _, _) = self.ad.low.adc(self.y.value(), false);
                self.ad.low.set_value(value);
                self.addr_carry = carry;
            }
            Micro::AdlIncr => self.ad.low.incr(),
            Micro::AdhIncr => self.ad.high.incr(),
            Micro::AdhPlusCarry => {
                if self.addr_carry {
                    self.ad.high.incr();
                }
            }
            // Skip the high byte fixup cycle when the index stayed on page
            Micro::ChkCarry => {
                if !self.addr_carry {
                    self.cycle += 1;
                }
            }
        }
    }

    fn update_arith(&mut self, result: (u8, bool, bool, bool, bool)) {
        let (value, carry, overflow, negative, zero) = result;
        self.a.set_value(value);
        self.p.set_carry(carry);
        self.p.set_overflow(overflow);
        self.p.set_negative(negative);
        self.p.set_zero(zero);
    }

    fn update_logic(&mut self, result: (u8, bool, bool)) {
        let (value, negative, zero) = result;
        self.a.set_value(value);
        self.p.set_negative(negative);
        self.p.set_zero(zero);
    }

    // Same adder as Sbc with carry forced, result discarded, overflow untouched.
    fn compare(&mut self, reg: Register8) {
        let (_, carry, _, negative, zero) = reg.adc(!self.data.value(), true);
        self.p.set_carry(carry);
        self.p.set_negative(negative);
        self.p.set_zero(zero);
    }

    // Shifts work on A for the accumulator opcodes and on the data latch for
    // the memory ones.
    fn shift_operand(&self) -> Register8 {
        match self.ir.value() {
            0x0a | 0x2a | 0x4a | 0x6a => self.a,
            _ => self.data,
        }
    }

    fn update_shift(&mut self, result: (u8, bool, bool, bool)) {
        let (value, carry, negative, zero) = result;
        match self.ir.value() {
            0x0a | 0x2a | 0x4a | 0x6a => self.a.set_value(value),
            _ => self.data.set_value(value),
        }
        self.p.set_carry(carry);
        self.p.set_negative(negative);
        self.p.set_zero(zero);
    }
}
