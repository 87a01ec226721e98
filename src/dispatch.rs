use crate::opcode::Opcode;
use crate::operations::*;

/// Selects the handler for a given Opcode.
///
/// The family nibble resolves most opcodes directly; families 0x0, 0x8 and
/// 0xE case on the low nibble and family 0xF on the low byte, mirroring the
/// machine's two-level opcode space. Combinations with no registered
/// handler fall through to `noop`: real ROMs tolerate unknown opcodes, so
/// they are never an error.
pub fn from_op(op: &dyn Opcode) -> Operation {
    match op.family() {
        0x0 => match op.n() {
            0x0 => clr,
            0xE => rts,
            _ => noop,
        },
        0x1 => jump,
        0x2 => call,
        0x3 => ske,
        0x4 => skne,
        0x5 => skre,
        0x6 => load,
        0x7 => add,
        0x8 => match op.n() {
            0x0 => mv,
            0x1 => or,
            0x2 => and,
            0x3 => xor,
            0x4 => addr,
            0x5 => sub,
            0x6 => shr,
            0x7 => subn,
            0xE => shl,
            _ => noop,
        },
        0x9 => skrne,
        0xA => loadi,
        0xB => jumpi,
        0xC => rand,
        0xD => draw,
        0xE => match op.n() {
            0xE => skpr,
            0x1 => skup,
            _ => noop,
        },
        0xF => match op.kk() {
            0x07 => moved,
            0x0A => keyd,
            0x15 => loads,
            0x18 => ld,
            0x1E => addi,
            0x29 => ldspr,
            0x33 => bcd,
            0x55 => stor,
            0x65 => read,
            _ => noop,
        },
        _ => noop,
    }
}
