extern crate sessenta;

mod common;

use common::*;

mod lda {
    use super::*;

    #[test]
    fn immediate() {
        let mut sys = System::new();
        sys.load_program(&[0xa9, 0x42]);
        sys.startup();

        sys.cycles(2);
        assert_eq!(sys.cpu.a.value(), 0x42);
        assert!(!sys.cpu.p.zero());
        assert!(!sys.cpu.p.negative());
    }

    #[test]
    fn zero_and_negative_flags() {
        let mut sys = System::new();
        sys.load_program(&[0xa9, 0x00, 0xa9, 0x80]);
        sys.startup();

        sys.cycles(2);
        assert!(sys.cpu.p.zero());
        assert!(!sys.cpu.p.negative());

        sys.cycles(2);
        assert!(!sys.cpu.p.zero());
        assert!(sys.cpu.p.negative());
    }

    #[test]
    fn zero_page() {
        let mut sys = System::new();
        sys.load_program(&[0xa5, 0x10]);
        sys.mem.put_at(0x0010, 0x42);
        sys.startup();

        sys.cycles(3);
        assert_eq!(sys.cpu.a.value(), 0x42);
    }

    #[test]
    fn zero_page_x() {
        let mut sys = System::new();
        sys.load_program(&[0xa2, 0x05, 0xb5, 0x40]); // ldx #$05, lda $40,x
        sys.mem.put_at(0x0045, 0x99);
        sys.startup();

        sys.cycles(2 + 4);
        assert_eq!(sys.cpu.a.value(), 0x99);
    }

    #[test]
    fn absolute() {
        let mut sys = System::new();
        sys.load_program(&[0xad, 0x34, 0x12]);
        sys.mem.put_at(0x1234, 0x42);
        sys.startup();

        sys.cycles(4);
        assert_eq!(sys.cpu.a.value(), 0x42);
    }

    #[test]
    fn absolute_y_with_page_cross() {
        let mut sys = System::new();
        sys.load_program(&[0xa0, 0x20, 0xb9, 0xf0, 0x12]); // ldy #$20, lda $12f0,y
        sys.mem.put_at(0x1310, 0x42);
        sys.startup();

        sys.cycles(2 + 5);
        assert_eq!(sys.cpu.a.value(), 0x42);
    }

    #[test]
    fn indexed_indirect() {
        let mut sys = System::new();
        sys.load_program(&[0xa2, 0x04, 0xa1, 0x20]); // ldx #$04, lda ($20,x)
        sys.mem.load(0x0024, &[0x74, 0x20]);
        sys.mem.put_at(0x2074, 0x42);
        sys.startup();

        sys.cycles(2 + 6);
        assert_eq!(sys.cpu.a.value(), 0x42);
    }

    #[test]
    fn indirect_indexed() {
        let mut sys = System::new();
        sys.load_program(&[0xa0, 0x10, 0xb1, 0x86]); // ldy #$10, lda ($86),y
        sys.mem.load(0x0086, &[0x28, 0x40]);
        sys.mem.put_at(0x4038, 0x42);
        sys.startup();

        sys.cycles(2 + 5);
        assert_eq!(sys.cpu.a.value(), 0x42);
    }
}

mod ldx {
    use super::*;

    #[test]
    fn immediate() {
        let mut sys = System::new();
        sys.load_program(&[0xa2, 0x42]);
        sys.startup();

        sys.cycles(2);
        assert_eq!(sys.cpu.x.value(), 0x42);
    }

    #[test]
    fn zero_page_y() {
        let mut sys = System::new();
        sys.load_program(&[0xa0, 0x03, 0xb6, 0x40]); // ldy #$03, ldx $40,y
        sys.mem.put_at(0x0043, 0x80);
        sys.startup();

        sys.cycles(2 + 4);
        assert_eq!(sys.cpu.x.value(), 0x80);
        assert!(sys.cpu.p.negative());
    }

    #[test]
    fn absolute_y() {
        let mut sys = System::new();
        sys.load_program(&[0xa0, 0x01, 0xbe, 0x00, 0x20]); // ldy #$01, ldx $2000,y
        sys.mem.put_at(0x2001, 0x42);
        sys.startup();

        sys.cycles(2 + 4);
        assert_eq!(sys.cpu.x.value(), 0x42);
    }
}

mod ldy {
    use super::*;

    #[test]
    fn immediate() {
        let mut sys = System::new();
        sys.load_program(&[0xa0, 0x00]);
        sys.startup();

        sys.cycles(2);
        assert_eq!(sys.cpu.y.value(), 0x00);
        assert!(sys.cpu.p.zero());
    }

    #[test]
    fn zero_page_x() {
        let mut sys = System::new();
        sys.load_program(&[0xa2, 0x02, 0xb4, 0x40]); // ldx #$02, ldy $40,x
        sys.mem.put_at(0x0042, 0x42);
        sys.startup();

        sys.cycles(2 + 4);
        assert_eq!(sys.cpu.y.value(), 0x42);
    }

    #[test]
    fn absolute_x() {
        let mut sys = System::new();
        sys.load_program(&[0xa2, 0x01, 0xbc, 0x00, 0x20]); // ldx #$01, ldy $2000,x
        sys.mem.put_at(0x2001, 0x42);
        sys.startup();

        sys.cycles(2 + 4);
        assert_eq!(sys.cpu.y.value(), 0x42);
    }
}
