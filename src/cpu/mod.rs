pub mod microcode;
pub mod opc;

use std::cell::RefCell;
use std::rc::Rc;

use crate::pins::Pins;
use crate::reg::{Register16, Register8};
use crate::status::Status;

use self::microcode::Micro;

// What the current instruction is servicing. Selects the vector address and
// gates the write line and the interrupt mask during BRK sequences.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Interrupt {
    Brk,
    Irq,
    Nmi,
    Reset,
}

pub struct Cpu {
    pub a: Register8,
    pub x: Register8,
    pub y: Register8,
    pub sp: Register8,
    pub pc: Register16,
    pub p: Status,

    // Instruction register, internal address register and data latch
    pub ir: Register8,
    pub ad: Register16,
    pub data: Register8,

    pub cycle: usize,
    pub interrupt: Interrupt,
    addr_carry: bool,

    pub clock: u64,

    pins: Rc<RefCell<Pins>>,
}

impl Cpu {
    pub fn new(pins: Rc<RefCell<Pins>>) -> Self {
        Self {
            a: Register8::new(),
            x: Register8::new(),
            y: Register8::new(),
            sp: Register8::new(),
            pc: Register16::new(),
            p: Status::new(),
            ir: Register8::new(),
            ad: Register16::new(),
            data: Register8::new(),
            cycle: 0,
            interrupt: Interrupt::Reset,
            addr_carry: false,
            clock: 0,
            pins,
        }
    }

    // One clock cycle. Drives the address bus, the read line and, on write
    // cycles, the data bus. The memory side must answer before the next call.
    pub fn tick(&mut self) {
        let pins = Rc::clone(&self.pins);
        let mut pins = pins.borrow_mut();

        if pins.ready.is_low() || pins.reset.is_low() {
            return; // Halted
        }

        if pins.read.is_high() {
            // End of read cycle, latch whatever memory drove
            self.data.set_value(pins.data.value());
        }

        if pins.sync.is_high() && self.interrupt != Interrupt::Reset {
            self.next_op(&mut pins);
        }

        pins.read.set(); // Each cycle defaults to a read

        let entry = opc::cycles(self.ir.value());
        let ops = entry.get(self.cycle).copied().unwrap_or(opc::FETCH);
        for &op in ops {
            self.perform(&mut pins, op);
        }

        if pins.read.is_low() {
            // Write cycle, drive the latch out
            pins.data.set_value(self.data.value());
        }

        self.trace(&pins);
        self.cycle += 1;
        self.clock += 1;

        // The startup sequence borrows the BRK entry. Once its final fetch
        // raises sync the reset is over and interrupts behave normally again.
        if pins.sync.is_high() && self.interrupt == Interrupt::Reset {
            self.interrupt = Interrupt::Brk;
        }
    }

    // Releases the reset line and lines the core up on the hardware startup
    // sequence, which runs the BRK entry with the writes suppressed. Seven
    // ticks later the opcode at the reset vector is on the bus.
    pub fn reset(&mut self) {
        let pins = Rc::clone(&self.pins);
        let mut pins = pins.borrow_mut();

        pins.reset.set();
        pins.read.set(); // Nothing is written out during startup
        pins.sync.clear();

        self.p.set_decimal(false);
        self.p.set_brk(true);
        self.ir.set_value(0x00);
        self.interrupt = Interrupt::Reset;
        self.cycle = 0;

        self.perform(&mut pins, Micro::PcToAddr);
        self.perform(&mut pins, Micro::PcIncr);
        self.trace(&pins);
    }

    fn next_op(&mut self, pins: &mut Pins) {
        pins.sync.clear();
        self.cycle = 0;
        self.ir.set_value(self.data.value());
        if self.ir.value() == 0x00 {
            self.p.set_brk(true);
        }
        self.interrupt = Interrupt::Brk;
        self.check_for_interrupt(pins);
    }

    fn check_for_interrupt(&mut self, pins: &mut Pins) {
        if pins.nmi.is_low() || (pins.irq.is_low() && !self.p.interrupt_disable()) {
            // Force a BRK and rewind PC so the preempted opcode is fetched
            // again on return. Two decrements instead of a conditional one,
            // the vector push sees the same value either way.
            self.ir.set_value(0x00);
            self.pc.decr();
            self.pc.decr();
            if pins.nmi.is_low() {
                self.interrupt = Interrupt::Nmi;
                pins.nmi.set(); // Edge serviced, stop it retriggering
                self.p.set_brk(false);
            } else {
                self.interrupt = Interrupt::Irq;
                self.p.set_brk(false);
            }
        }
    }

    fn check_nz(&mut self, value: u8) {
        self.p.change_zero_negative(value);
    }

    fn vector(&self) -> u16 {
        match self.interrupt {
            Interrupt::Nmi => 0xfffa,
            Interrupt::Reset => 0xfffc,
            Interrupt::Irq | Interrupt::Brk => 0xfffe,
        }
    }

    fn trace(&self, pins: &Pins) {
        trace!(
            "{:04x} {:02x} {} ir: {:02x} p: {} cycle: {} {} a: {:02x} x: {:02x} y: {:02x} sp: {:02x}",
            pins.address.value(),
            pins.data.value(),
            if pins.read.is_high() { "r" } else { "w" },
            self.ir.value(),
            self.p,
            self.cycle,
            if pins.sync.is_high() { "sync" } else { "    " },
            self.a.value(),
            self.x.value(),
            self.y.value(),
            self.sp.value()
        );
    }
}
