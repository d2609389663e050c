//! The decode table. Each opcode maps to one line of micro operations per
//! machine cycle. The first line overlaps the operand fetch of the previous
//! cycle and the last line always fetches the next opcode, so a table entry
//! has exactly as many lines as the instruction has cycles. Entries for
//! instructions that can skip the page fixup cycle are sized for the slow
//! path and shortened at run time by ChkCarry.

use super::microcode::Micro::{self, *};

pub type Line = &'static [Micro];
pub type Entry = &'static [Line];

// What every instruction ends on, and what the engine falls back to when a
// cycle index runs past the end of an entry.
pub const FETCH: Line = &[PcToAddr, NextOp, PcIncr];

// Unimplemented opcodes burn one dead cycle and fall through to FETCH.
const UNDEFINED: Entry = &[&[]];

// Read instructions leave the operand in the data latch and apply the ALU
// micro op on the final line.

macro_rules! imm {
    ($op:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[$op, PcToAddr, NextOp, PcIncr],
        ]
    };
}

macro_rules! zp {
    ($op:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, AdToAddr],
            &[$op, PcToAddr, NextOp, PcIncr],
        ]
    };
}

macro_rules! zpi {
    ($op:ident, $idx:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, AdToAddr, $idx],
            &[AdToAddr],
            &[$op, PcToAddr, NextOp, PcIncr],
        ]
    };
}

macro_rules! abs {
    ($op:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, PcToAddr, PcIncr],
            &[DataToAdh, AdToAddr],
            &[$op, PcToAddr, NextOp, PcIncr],
        ]
    };
}

macro_rules! absi {
    ($op:ident, $idx:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, $idx, PcToAddr, PcIncr],
            &[DataToAdh, ChkCarry, AdToAddr],
            &[AdhIncr, AdToAddr],
            &[$op, PcToAddr, NextOp, PcIncr],
        ]
    };
}

macro_rules! izx {
    ($op:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, AdToAddr, AdlPlusX],
            &[AdToAddr, AdlIncr],
            &[AdToAddr, DataToAdl],
            &[DataToAdh, AdToAddr],
            &[$op, PcToAddr, NextOp, PcIncr],
        ]
    };
}

macro_rules! izy {
    ($op:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, AdToAddr, AdlIncr],
            &[AdToAddr, DataToAdl, AdlPlusY],
            &[DataToAdh, ChkCarry, AdToAddr],
            &[AdhIncr, AdToAddr],
            &[$op, PcToAddr, NextOp, PcIncr],
        ]
    };
}

// Store instructions move a register into the data latch and drop the read
// line on the write cycle. The indexed ones always pay the fixup cycle, the
// write waits for the corrected address.

macro_rules! st_zp {
    ($src:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, AdToAddr, $src, Write],
            FETCH,
        ]
    };
}

macro_rules! st_zpi {
    ($src:ident, $idx:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, AdToAddr, $idx],
            &[AdToAddr, $src, Write],
            FETCH,
        ]
    };
}

macro_rules! st_abs {
    ($src:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, PcToAddr, PcIncr],
            &[DataToAdh, AdToAddr, $src, Write],
            FETCH,
        ]
    };
}

macro_rules! st_absi {
    ($src:ident, $idx:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, $idx, PcToAddr, PcIncr],
            &[DataToAdh, AdToAddr],
            &[AdhPlusCarry, AdToAddr, $src, Write],
            FETCH,
        ]
    };
}

macro_rules! st_izx {
    ($src:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, AdToAddr, AdlPlusX],
            &[AdToAddr, AdlIncr],
            &[AdToAddr, DataToAdl],
            &[DataToAdh, AdToAddr, $src, Write],
            FETCH,
        ]
    };
}

macro_rules! st_izy {
    ($src:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, AdToAddr, AdlIncr],
            &[AdToAddr, DataToAdl, AdlPlusY],
            &[DataToAdh, AdToAddr],
            &[AdhPlusCarry, AdToAddr, $src, Write],
            FETCH,
        ]
    };
}

// Modify instructions write the unmodified value back while the ALU works,
// then write the result.

macro_rules! rmw_zp {
    ($op:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, AdToAddr],
            &[AdToAddr, Write],
            &[$op, AdToAddr, Write],
            FETCH,
        ]
    };
}

macro_rules! rmw_zpx {
    ($op:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, AdToAddr, AdlPlusX],
            &[AdToAddr],
            &[AdToAddr, Write],
            &[$op, AdToAddr, Write],
            FETCH,
        ]
    };
}

macro_rules! rmw_abs {
    ($op:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, PcToAddr, PcIncr],
            &[DataToAdh, AdToAddr],
            &[AdToAddr, Write],
            &[$op, AdToAddr, Write],
            FETCH,
        ]
    };
}

macro_rules! rmw_absx {
    ($op:ident) => {
        &[
            &[PcToAddr, PcIncr],
            &[DataToAdl, AdlPlusX, PcToAddr, PcIncr],
            &[DataToAdh, AdToAddr],
            &[AdhPlusCarry, AdToAddr],
            &[AdToAddr, Write],
            &[$op, AdToAddr, Write],
            FETCH,
        ]
    };
}

// Single byte instructions. The argument byte is read and discarded without
// moving PC past it.
macro_rules! imp {
    ($($op:ident),*) => {
        &[
            &[PcToAddr],
            &[$($op,)* PcToAddr, NextOp, PcIncr],
        ]
    };
}

const BRK: Entry = &[
    &[PcToAddr, PcIncr],                         // Padding byte, discarded
    &[SpToAddr, PchToData, Write, SpDecr],       // Push PCH
    &[SpToAddr, PclToData, Write, SpDecr],       // Push PCL
    &[SpToAddr, PToData, Write, SpDecr],         // Push P
    &[BrkSei, VecLowToAddr],                     // Mask IRQs, read vector low
    &[DataToPcl, VecHighToAddr],                 // Read vector high
    &[DataToPch, PcToAddr, NextOp, PcIncr],      // Jump through the vector
];

const RTI: Entry = &[
    &[PcToAddr, PcIncr],                         // Padding byte, discarded
    &[SpToAddr, SpIncr],                         // Dead stack read
    &[SpToAddr, SpIncr],                         // Read P
    &[DataToP, SpToAddr, SpIncr],                // Read PCL
    &[DataToPcl, SpToAddr],                      // Read PCH
    &[DataToPch, PcToAddr, NextOp, PcIncr],
];

const JSR: Entry = &[
    &[PcToAddr, PcIncr],                         // Read target low
    &[DataToAdl, SpToAddr],                      // Dead stack read
    &[SpToAddr, PchToData, Write, SpDecr],       // Push PCH
    &[SpToAddr, PclToData, Write, SpDecr],       // Push PCL
    &[PcToAddr],                                 // Read target high
    &[DataToAdh, AdToAddr, AddrToPc, NextOp, PcIncr],
];

const RTS: Entry = &[
    &[PcToAddr],                                 // Padding byte, discarded
    &[SpToAddr, SpIncr],                         // Dead stack read
    &[SpToAddr, SpIncr],                         // Read PCL
    &[DataToPcl, SpToAddr],                      // Read PCH
    &[DataToPch, PcToAddr, PcIncr],              // Step past the JSR operand
    FETCH,
];

const JMP_ABS: Entry = &[
    &[PcToAddr, PcIncr],                         // Read target low
    &[DataToAdl, PcToAddr],                      // Read target high
    &[DataToAdh, AdToAddr, AddrToPc, NextOp, PcIncr],
];

// The pointer high byte comes from the same page as the low byte, the
// increment never carries.
const JMP_IND: Entry = &[
    &[PcToAddr, PcIncr],                         // Read pointer low
    &[DataToAdl, PcToAddr, PcIncr],              // Read pointer high
    &[DataToAdh, AdToAddr, AdlIncr],             // Read target low
    &[DataToPcl, AdToAddr],                      // Read target high
    &[DataToPch, PcToAddr, NextOp, PcIncr],
];

const PHP: Entry = &[
    &[PcToAddr],
    &[SpToAddr, PToData, Write, SpDecr],
    FETCH,
];

const PHA: Entry = &[
    &[PcToAddr],
    &[SpToAddr, AToData, Write, SpDecr],
    FETCH,
];

const PLP: Entry = &[
    &[PcToAddr],
    &[SpToAddr, SpIncr],                         // Dead stack read
    &[SpToAddr],                                 // Read P
    &[DataToP, PcToAddr, NextOp, PcIncr],
];

const PLA: Entry = &[
    &[PcToAddr],
    &[SpToAddr, SpIncr],                         // Dead stack read
    &[SpToAddr],                                 // Read A
    &[DataToA, PcToAddr, NextOp, PcIncr],
];

pub fn cycles(opcode: u8) -> Entry {
    match opcode {
        // Opcode                                   Syntax        Cycles
        0x00 => BRK,                             // BRK           7
        0x01 => izx!(Ora),                       // ORA ($44,X)   6
        0x05 => zp!(Ora),                        // ORA $44       3
        0x06 => rmw_zp!(Asl),                    // ASL $44       5
        0x08 => PHP,                             // PHP           3
        0x09 => imm!(Ora),                       // ORA #$44      2
        0x0a => imp!(Asl),                       // ASL A         2
        0x0d => abs!(Ora),                       // ORA $4400     4
        0x0e => rmw_abs!(Asl),                   // ASL $4400     6
        0x11 => izy!(Ora),                       // ORA ($44),Y   5+
        0x15 => zpi!(Ora, AdlPlusX),             // ORA $44,X     4
        0x16 => rmw_zpx!(Asl),                   // ASL $44,X     6
        0x18 => imp!(Clc),                       // CLC           2
        0x19 => absi!(Ora, AdlPlusY),            // ORA $4400,Y   4+
        0x1d => absi!(Ora, AdlPlusX),            // ORA $4400,X   4+
        0x1e => rmw_absx!(Asl),                  // ASL $4400,X   7
        0x20 => JSR,                             // JSR $5597     6
        0x21 => izx!(And),                       // AND ($44,X)   6
        0x25 => zp!(And),                        // AND $44       3
        0x26 => rmw_zp!(Rol),                    // ROL $44       5
        0x28 => PLP,                             // PLP           4
        0x29 => imm!(And),                       // AND #$44      2
        0x2a => imp!(Rol),                       // ROL A         2
        0x2d => abs!(And),                       // AND $4400     4
        0x2e => rmw_abs!(Rol),                   // ROL $4400     6
        0x31 => izy!(And),                       // AND ($44),Y   5+
        0x35 => zpi!(And, AdlPlusX),             // AND $44,X     4
        0x36 => rmw_zpx!(Rol),                   // ROL $44,X     6
        0x38 => imp!(Sec),                       // SEC           2
        0x39 => absi!(And, AdlPlusY),            // AND $4400,Y   4+
        0x3d => absi!(And, AdlPlusX),            // AND $4400,X   4+
        0x3e => rmw_absx!(Rol),                  // ROL $4400,X   7
        0x40 => RTI,                             // RTI           6
        0x41 => izx!(Eor),                       // EOR ($44,X)   6
        0x45 => zp!(Eor),                        // EOR $44       3
        0x46 => rmw_zp!(Lsr),                    // LSR $44       5
        0x48 => PHA,                             // PHA           3
        0x49 => imm!(Eor),                       // EOR #$44      2
        0x4a => imp!(Lsr),                       // LSR A         2
        0x4c => JMP_ABS,                         // JMP $5597     3
        0x4d => abs!(Eor),                       // EOR $4400     4
        0x4e => rmw_abs!(Lsr),                   // LSR $4400     6
        0x51 => izy!(Eor),                       // EOR ($44),Y   5+
        0x55 => zpi!(Eor, AdlPlusX),             // EOR $44,X     4
        0x56 => rmw_zpx!(Lsr),                   // LSR $44,X     6
        0x58 => imp!(Cli),                       // CLI           2
        0x59 => absi!(Eor, AdlPlusY),            // EOR $4400,Y   4+
        0x5d => absi!(Eor, AdlPlusX),            // EOR $4400,X   4+
        0x5e => rmw_absx!(Lsr),                  // LSR $4400,X   7
        0x60 => RTS,                             // RTS           6
        0x61 => izx!(Adc),                       // ADC ($44,X)   6
        0x65 => zp!(Adc),                        // ADC $44       3
        0x66 => rmw_zp!(Ror),                    // ROR $44       5
        0x68 => PLA,                             // PLA           4
        0x69 => imm!(Adc),                       // ADC #$44      2
        0x6a => imp!(Ror),                       // ROR A         2
        0x6c => JMP_IND,                         // JMP ($5597)   5
        0x6d => abs!(Adc),                       // ADC $4400     4
        0x6e => rmw_abs!(Ror),                   // ROR $4400     6
        0x71 => izy!(Adc),                       // ADC ($44),Y   5+
        0x75 => zpi!(Adc, AdlPlusX),             // ADC $44,X     4
        0x76 => rmw_zpx!(Ror),                   // ROR $44,X     6
        0x78 => imp!(Sei),                       // SEI           2
        0x79 => absi!(Adc, AdlPlusY),            // ADC $4400,Y   4+
        0x7d => absi!(Adc, AdlPlusX),            // ADC $4400,X   4+
        0x7e => rmw_absx!(Ror),                  // ROR $4400,X   7
        0x81 => st_izx!(AToData),                // STA ($44,X)   6
        0x84 => st_zp!(YToData),                 // STY $44       3
        0x85 => st_zp!(AToData),                 // STA $44       3
        0x86 => st_zp!(XToData),                 // STX $44       3
        0x8a => imp!(XToData, DataToA),          // TXA           2
        0x8c => st_abs!(YToData),                // STY $4400     4
        0x8d => st_abs!(AToData),                // STA $4400     4
        0x8e => st_abs!(XToData),                // STX $4400     4
        0x91 => st_izy!(AToData),                // STA ($44),Y   6
        0x94 => st_zpi!(YToData, AdlPlusX),      // STY $44,X     4
        0x95 => st_zpi!(AToData, AdlPlusX),      // STA $44,X     4
        0x96 => st_zpi!(XToData, AdlPlusY),      // STX $44,Y     4
        0x98 => imp!(YToData, DataToA),          // TYA           2
        0x99 => st_absi!(AToData, AdlPlusY),     // STA $4400,Y   5
        0x9d => st_absi!(AToData, AdlPlusX),     // STA $4400,X   5
        0xa0 => imm!(DataToY),                   // LDY #$44      2
        0xa1 => izx!(DataToA),                   // LDA ($44,X)   6
        0xa2 => imm!(DataToX),                   // LDX #$44      2
        0xa4 => zp!(DataToY),                    // LDY $44       3
        0xa5 => zp!(DataToA),                    // LDA $44       3
        0xa6 => zp!(DataToX),                    // LDX $44       3
        0xa8 => imp!(AToData, DataToY),          // TAY           2
        0xa9 => imm!(DataToA),                   // LDA #$44      2
        0xaa => imp!(AToData, DataToX),          // TAX           2
        0xac => abs!(DataToY),                   // LDY $4400     4
        0xad => abs!(DataToA),                   // LDA $4400     4
        0xae => abs!(DataToX),                   // LDX $4400     4
        0xb1 => izy!(DataToA),                   // LDA ($44),Y   5+
        0xb4 => zpi!(DataToY, AdlPlusX),         // LDY $44,X     4
        0xb5 => zpi!(DataToA, AdlPlusX),         // LDA $44,X     4
        0xb6 => zpi!(DataToX, AdlPlusY),         // LDX $44,Y     4
        0xb8 => imp!(Clv),                       // CLV           2
        0xb9 => absi!(DataToA, AdlPlusY),        // LDA $4400,Y   4+
        0xbc => absi!(DataToY, AdlPlusX),        // LDY $4400,X   4+
        0xbd => absi!(DataToA, AdlPlusX),        // LDA $4400,X   4+
        0xbe => absi!(DataToX, AdlPlusY),        // LDX $4400,Y   4+
        0xc0 => imm!(Cpy),                       // CPY #$44      2
        0xc1 => izx!(Cmp),                       // CMP ($44,X)   6
        0xc4 => zp!(Cpy),                        // CPY $44       3
        0xc5 => zp!(Cmp),                        // CMP $44       3
        0xc9 => imm!(Cmp),                       // CMP #$44      2
        0xcc => abs!(Cpy),                       // CPY $4400     4
        0xcd => abs!(Cmp),                       // CMP $4400     4
        0xd1 => izy!(Cmp),                       // CMP ($44),Y   5+
        0xd5 => zpi!(Cmp, AdlPlusX),             // CMP $44,X     4
        0xd8 => imp!(Cld),                       // CLD           2
        0xd9 => absi!(Cmp, AdlPlusY),            // CMP $4400,Y   4+
        0xdd => absi!(Cmp, AdlPlusX),            // CMP $4400,X   4+
        0xe0 => imm!(Cpx),                       // CPX #$44      2
        0xe1 => izx!(Sbc),                       // SBC ($44,X)   6
        0xe4 => zp!(Cpx),                        // CPX $44       3
        0xe5 => zp!(Sbc),                        // SBC $44       3
        0xe9 => imm!(Sbc),                       // SBC #$44      2
        0xea => imp!(),                          // NOP           2
        0xec => abs!(Cpx),                       // CPX $4400     4
        0xed => abs!(Sbc),                       // SBC $4400     4
        0xf1 => izy!(Sbc),                       // SBC ($44),Y   5+
        0xf5 => zpi!(Sbc, AdlPlusX),             // SBC $44,X     4
        0xf8 => imp!(Sed),                       // SED           2
        0xf9 => absi!(Sbc, AdlPlusY),            // SBC $4400,Y   4+
        0xfd => absi!(Sbc, AdlPlusX),            // SBC $4400,X   4+
        _ => UNDEFINED,
    }
}
