//! Batch/parallel driver: dispatches `n` independent keygens or evals across
//! a worker pool. `threads == 0` means "use all available cores"; any other
//! value pins the pool to exactly that many workers. Indices are partitioned
//! into disjoint contiguous ranges, so each worker only ever touches its own
//! slice of the output buffer -- no locks needed.
use rand::{thread_rng, Rng};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::constants::{self, N, OP_DCF, OP_DPF};
use crate::dcf::DcfKey;
use crate::dpf::DpfKey;
use crate::error::{FssError, Result};
use crate::group::GroupElement;

fn with_pool<T: Send>(threads: usize, work: impl FnOnce() -> T + Send) -> Result<T> {
    if threads == 0 {
        Ok(work())
    } else {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| FssError::ThreadPool(e.to_string()))?;
        Ok(pool.install(work))
    }
}

/// Generate `n` independent key pairs for the primitive selected by
/// `op_id`, each at a fresh random point drawn from the CSPRNG.
///
/// Returns `(keys_a, keys_b)`, each `n * key_len(op_id)` bytes.
pub fn keygen(op_id: u8, n: usize, threads: usize) -> Result<(Vec<u8>, Vec<u8>)> {
    let key_len = constants::key_len(op_id).ok_or(FssError::UnknownOp(op_id))?;
    let mut keys_a = vec![0u8; n * key_len];
    let mut keys_b = vec![0u8; n * key_len];

    with_pool(threads, || {
        keys_a
            .par_chunks_mut(key_len)
            .zip(keys_b.par_chunks_mut(key_len))
            .for_each(|(slot_a, slot_b)| {
                let alpha: u32 = thread_rng().gen();
                let (bytes_a, bytes_b) = match op_id {
                    OP_DPF => {
                        let (ka, kb) = constants::dpf().gen(alpha, GroupElement::one());
                        (ka.to_bytes(), kb.to_bytes())
                    }
                    OP_DCF => {
                        let (ka, kb) = constants::dcf().gen(alpha);
                        (ka.to_bytes(), kb.to_bytes())
                    }
                    _ => unreachable!("op_id validated above"),
                };
                slot_a.copy_from_slice(&bytes_a);
                slot_b.copy_from_slice(&bytes_b);
            });
    })?;

    Ok((keys_a, keys_b))
}

/// Evaluate `party`'s share of `n` independent function values at the
/// domain points in `xs` (`n * N` little-endian bytes), using the
/// corresponding rows of `keys` (`n * key_len(op_id)` bytes).
pub fn eval(party: u8, op_id: u8, xs: &[u8], keys: &[u8], n: usize, threads: usize) -> Result<Vec<i64>> {
    let key_len = constants::key_len(op_id).ok_or(FssError::UnknownOp(op_id))?;
    if xs.len() != n * N {
        return Err(FssError::BadKeyLength {
            actual: xs.len(),
            expected: n * N,
        });
    }
    if keys.len() != n * key_len {
        return Err(FssError::BadKeyLength {
            actual: keys.len(),
            expected: n * key_len,
        });
    }

    let mut results = vec![0i64; n];

    with_pool(threads, || {
        results
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, out)| {
                let x_bytes = &xs[i * N..(i + 1) * N];
                let mut buf = [0u8; N];
                buf.copy_from_slice(x_bytes);
                let x = u32::from_le_bytes(buf);

                let key_bytes = &keys[i * key_len..(i + 1) * key_len];
                let share = match op_id {
                    OP_DPF => {
                        let key = DpfKey::from_bytes(key_bytes, constants::DEPTH);
                        constants::dpf().eval(party, &key, x)
                    }
                    OP_DCF => {
                        let key = DcfKey::from_bytes(key_bytes, constants::DEPTH);
                        constants::dcf().eval(party, &key, x)
                    }
                    _ => unreachable!("op_id validated above"),
                };
                *out = share.as_i64();
            });
    })?;

    Ok(results)
}
