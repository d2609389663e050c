extern crate sessenta;

mod common;

use common::*;

mod asl {
    use super::*;

    #[test]
    fn accumulator() {
        let mut sys = System::new();
        sys.load_program(&[0xa9, 0x81, 0x0a]); // lda #$81, asl a
        sys.startup();

        sys.cycles(2 + 2);
        assert_eq!(sys.cpu.a.value(), 0x02);
        assert!(sys.cpu.p.carry(), "bit 7 falls into the carry");
        assert!(!sys.cpu.p.negative());
        assert!(!sys.cpu.p.zero());
    }

    #[test]
    fn zero_page_leaves_the_accumulator_alone() {
        let mut sys = System::new();
        sys.load_program(&[0xa9, 0x42, 0x06, 0x10]); // lda #$42, asl $10
        sys.mem.put_at(0x0010, 0x40);
        sys.startup();

        sys.cycles(2 + 5);
        assert_eq!(sys.mem.peek_at(0x0010), 0x80);
        assert_eq!(sys.cpu.a.value(), 0x42);
        assert!(sys.cpu.p.negative());
        assert!(!sys.cpu.p.carry());
    }

    #[test]
    fn absolute_x_always_takes_seven_cycles() {
        let mut sys = System::new();
        sys.load_program(&[0xa2, 0x01, 0x1e, 0x00, 0x13]); // ldx #$01, asl $1300,x
        sys.mem.put_at(0x1301, 0x81);
        sys.startup();

        sys.cycles(2 + 5);
        assert_eq!(sys.mem.peek_at(0x1301), 0x81, "unmodified value written back first");
        sys.cycle();
        assert_eq!(sys.mem.peek_at(0x1301), 0x02);
        assert!(sys.cpu.p.carry());

        sys.cycle();
        assert!(sys.pins.borrow().sync.is_high());
        assert_eq!(sys.address(), RESET_ADDR + 5);
    }
}

mod lsr {
    use super::*;

    #[test]
    fn accumulator() {
        let mut sys = System::new();
        sys.load_program(&[0xa9, 0x01, 0x4a]); // lda #$01, lsr a
        sys.startup();

        sys.cycles(2 + 2);
        assert_eq!(sys.cpu.a.value(), 0x00);
        assert!(sys.cpu.p.carry());
        assert!(sys.cpu.p.zero());
        assert!(!sys.cpu.p.negative(), "lsr never produces a negative");
    }

    #[test]
    fn absolute() {
        let mut sys = System::new();
        sys.load_program(&[0x4e, 0x34, 0x12]); // lsr $1234
        sys.mem.put_at(0x1234, 0x43);
        sys.startup();

        sys.cycles(6);
        assert_eq!(sys.mem.peek_at(0x1234), 0x21);
        assert!(sys.cpu.p.carry());
    }
}

mod rol {
    use super::*;

    #[test]
    fn accumulator_pulls_the_carry_in() {
        let mut sys = System::new();
        sys.load_program(&[0x38, 0xa9, 0x80, 0x2a]); // sec, lda #$80, rol a
        sys.startup();

        sys.cycles(2 + 2 + 2);
        assert_eq!(sys.cpu.a.value(), 0x01);
        assert!(sys.cpu.p.carry());
    }

    #[test]
    fn zero_page_x() {
        let mut sys = System::new();
        sys.load_program(&[0xa2, 0x02, 0x36, 0x40]); // ldx #$02, rol $40,x
        sys.mem.put_at(0x0042, 0x40);
        sys.startup();

        sys.cycles(2 + 6);
        assert_eq!(sys.mem.peek_at(0x0042), 0x80);
        assert!(sys.cpu.p.negative());
        assert!(!sys.cpu.p.carry());
    }
}

mod ror {
    use super::*;

    #[test]
    fn accumulator_carry_lands_in_bit_seven() {
        let mut sys = System::new();
        sys.load_program(&[0x38, 0xa9, 0x00, 0x6a]); // sec, lda #$00, ror a
        sys.startup();

        sys.cycles(2 + 2 + 2);
        assert_eq!(sys.cpu.a.value(), 0x80);
        assert!(!sys.cpu.p.carry());
        assert!(sys.cpu.p.negative());
    }

    #[test]
    fn zero_page() {
        let mut sys = System::new();
        sys.load_program(&[0x66, 0x10]); // ror $10
        sys.mem.put_at(0x0010, 0x03);
        sys.startup();

        sys.cycles(5);
        assert_eq!(sys.mem.peek_at(0x0010), 0x01);
        assert!(sys.cpu.p.carry());
    }
}
