extern crate sessenta;

use std::cell::RefCell;
use std::rc::Rc;

use sessenta::cpu::Cpu;
use sessenta::mem::Memory;
use sessenta::pins::Pins;

// Wires a core to 64K of ram, runs a small program and dumps the result.
// RUST_LOG=trace shows the bus activity cycle by cycle.
fn main() {
    env_logger::init();

    let pins = Rc::new(RefCell::new(Pins::new()));
    let mut cpu = Cpu::new(pins.clone());
    let mut mem = Memory::new(pins);

    let program = [
        0xa9, 0x1a, // lda #$1a
        0x69, 0x28, // adc #$28
        0x85, 0x00, // sta $00
        0x0a, //       asl a
        0x85, 0x01, // sta $01
        0x48, //       pha
        0x4c, 0x0a, 0x02, // spin: jmp spin
    ];
    mem.load(0x0200, &program);
    mem.load(0xfffc, &[0x00, 0x02]);

    cpu.reset();
    for _ in 0..64 {
        cpu.tick();
        mem.tick();
    }

    println!(
        "a: {:02x} x: {:02x} y: {:02x} sp: {:02x} pc: {:04x} p: {}",
        cpu.a.value(),
        cpu.x.value(),
        cpu.y.value(),
        cpu.sp.value(),
        cpu.pc.value(),
        cpu.p
    );
    println!("{:?}", mem);
}
