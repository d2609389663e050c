#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use sessenta::cpu::Cpu;
use sessenta::mem::Memory;
use sessenta::pins::Pins;

pub const NMI_VECTOR: u16 = 0xfffa;
pub const RESET_VECTOR: u16 = 0xfffc;
pub const IRQ_VECTOR: u16 = 0xfffe;

pub const NMI_ADDR: u16 = 0x1c02;
pub const RESET_ADDR: u16 = 0x08a0;
pub const IRQ_ADDR: u16 = 0x1780;

pub const STACK_TOP: u8 = 0xff;

pub fn lsb(value: u16) -> u8 { value as u8 }
pub fn msb(value: u16) -> u8 { (value >> 8) as u8 }

// A core wired to 64K of ram with the three vectors installed. After
// startup() the opcode at RESET_ADDR is on the bus, sp is STACK_TOP - 3 and
// every instruction takes exactly its official number of cycles.
pub struct System {
    pub pins: Rc<RefCell<Pins>>,
    pub cpu: Cpu,
    pub mem: Memory,
}

impl System {
    pub fn new() -> Self {
        let _ = env_logger::try_init();

        let pins = Rc::new(RefCell::new(Pins::new()));
        let mut cpu = Cpu::new(pins.clone());
        let mut mem = Memory::new(pins.clone());

        cpu.sp.set_value(STACK_TOP);

        mem.load(NMI_VECTOR, &[lsb(NMI_ADDR), msb(NMI_ADDR)]);
        mem.load(RESET_VECTOR, &[lsb(RESET_ADDR), msb(RESET_ADDR)]);
        mem.load(IRQ_VECTOR, &[lsb(IRQ_ADDR), msb(IRQ_ADDR)]);

        System { pins, cpu, mem }
    }

    // A full machine cycle: the core first, then memory answers.
    pub fn cycle(&mut self) {
        self.cpu.tick();
        self.mem.tick();
    }

    pub fn cycles(&mut self, count: usize) {
        for _ in 0..count {
            self.cycle();
        }
    }

    // Runs the seven cycle hardware startup sequence.
    pub fn startup(&mut self) {
        self.cpu.reset();
        self.cycles(7);
    }

    pub fn load_program(&mut self, program: &[u8]) {
        self.mem.load(RESET_ADDR, program);
    }

    pub fn address(&self) -> u16 {
        self.pins.borrow().address.value()
    }

    pub fn data(&self) -> u8 {
        self.pins.borrow().data.value()
    }
}
