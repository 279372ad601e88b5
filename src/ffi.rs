//! Stable, flat-buffer ABI matching §6 of the external interface: raw
//! pointers plus element counts, no error channel. A correct caller can't
//! trigger a runtime failure; an incorrect one (bad `op_id`, mismatched
//! buffer sizes) aborts rather than returning undefined results, per the
//! error-handling design: keys built from a failed RNG, or dispatched
//! through an unrecognised `op_id`, must never silently leak through.
use std::convert::TryFrom;
use std::slice;

use crate::batch;
use crate::constants;

fn op_id_u8(op_id: usize) -> u8 {
    u8::try_from(op_id).unwrap_or_else(|_| panic!("UnknownOp: op_id {} out of range", op_id))
}

/// # Safety
/// `keys_a` and `keys_b` must each point to `n * key_len(op_id)` initialised,
/// writable bytes.
#[no_mangle]
pub unsafe extern "C" fn keygen(
    keys_a: *mut u8,
    keys_b: *mut u8,
    n: usize,
    threads: usize,
    op_id: usize,
) {
    let op_id = op_id_u8(op_id);
    let key_len = constants::key_len(op_id)
        .unwrap_or_else(|| panic!("UnknownOp: op_id {}", op_id));

    let (out_a, out_b) =
        batch::keygen(op_id, n, threads).expect("RNGFailure or UnknownOp in keygen");

    let dst_a = slice::from_raw_parts_mut(keys_a, n * key_len);
    let dst_b = slice::from_raw_parts_mut(keys_b, n * key_len);
    dst_a.copy_from_slice(&out_a);
    dst_b.copy_from_slice(&out_b);
}

/// # Safety
/// `xs` must point to `n * N` readable bytes, `keys` to `n * key_len(op_id)`
/// readable bytes, and `results` to `n` writable `i64`s.
#[no_mangle]
pub unsafe extern "C" fn eval(
    party: usize,
    xs: *const u8,
    keys: *const u8,
    results: *mut i64,
    n: usize,
    threads: usize,
    op_id: usize,
) {
    let op_id = op_id_u8(op_id);
    let key_len = constants::key_len(op_id)
        .unwrap_or_else(|| panic!("UnknownOp: op_id {}", op_id));
    let party = u8::try_from(party).expect("party must be 0 or 1");

    let xs_slice = slice::from_raw_parts(xs, n * constants::N);
    let keys_slice = slice::from_raw_parts(keys, n * key_len);

    let out = batch::eval(party, op_id, xs_slice, keys_slice, n, threads)
        .expect("UnknownOp or SizeMismatch in eval");

    let dst = slice::from_raw_parts_mut(results, n);
    dst.copy_from_slice(&out);
}
