//! Per-primitive constants, mirroring the `EqFactory` / `LeFactory` layer of
//! the reference Python bindings this crate's ABI is modeled on.
use crate::dcf::Dcf;
use crate::dpf::Dpf;
use crate::prg::AesPrg;

/// Bytes per group element / domain value. Fixed at 4 (a 32-bit domain),
/// matching both primitives this crate exposes.
pub const N: usize = 4;
/// Tree depth: one level per bit of the domain.
pub const DEPTH: usize = N * 8;
/// Bytes per PRG seed / GGM tree node. Not used by the core beyond sizing
/// `Seed`, but exposed for parity with the reference factory layer's
/// `N`/`L` constants.
pub const L: usize = crate::seed::SEED_SIZE;

/// `op_id` for the Distributed Point Function (`Eq`, `1{x == alpha}`).
pub const OP_DPF: u8 = 0;
/// `op_id` for the Distributed Comparison Function (`Le`, `1{x <= alpha}`).
pub const OP_DCF: u8 = 1;

pub fn dpf() -> Dpf<AesPrg> {
    Dpf::new(AesPrg::new(), DEPTH)
}

pub fn dcf() -> Dcf<AesPrg> {
    Dcf::new(AesPrg::new(), DEPTH)
}

pub fn key_len(op_id: u8) -> Option<usize> {
    match op_id {
        OP_DPF => Some(crate::dpf::DpfKey::key_len(DEPTH)),
        OP_DCF => Some(crate::dcf::DcfKey::key_len(DEPTH)),
        _ => None,
    }
}
