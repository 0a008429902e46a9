//! Portable scalar AES implementation: key expansion and forward-only
//! (encryption) block transform. Table-driven the same way the teacher's
//! `aes_core` is, generalized to an arbitrary `(nk, nr)` pair so the same
//! code drives AES-128/192/256 and the non-standard 512-bit extension.
//!
//! There is no decryption path here: GCM only ever runs the forward cipher,
//! for both encryption and decryption of the message (it's used as a
//! keystream generator under CTR mode), so InvSubBytes/InvShiftRows/
//! InvMixColumns have no caller and are not implemented.

use super::consts::{gmul8, rcon, S_BOX};

const NB: usize = 4;

/// Expand `key` into `16 * (nr + 1)` bytes of round-key material.
///
/// Mirrors the teacher's `expand_key`, but returns a heap buffer sized to
/// the caller's `(nk, nr)` instead of a fixed `[u8; 240]`, since the
/// 512-bit variant's schedule (368 bytes) doesn't fit the standard widths'
/// buffer.
pub(super) fn expand_key(key: &[u8], nk: usize, nr: usize) -> Vec<u8> {
    let mut expanded = vec![0u8; 16 * (nr + 1)];
    expanded[..nk * 4].copy_from_slice(&key[..nk * 4]);

    let mut temp = [0u8; 4];
    let mut i = nk;
    while i < NB * (nr + 1) {
        temp.copy_from_slice(&expanded[(i - 1) * 4..i * 4]);

        if i % nk == 0 {
            let first = temp[0];
            temp.rotate_left(1);
            let _ = first;
            for b in temp.iter_mut() {
                *b = S_BOX[*b as usize];
            }
            temp[0] ^= rcon(i / nk);
        } else if nk > 6 && i % nk == 4 {
            for b in temp.iter_mut() {
                *b = S_BOX[*b as usize];
            }
        }

        for j in 0..4 {
            expanded[i * 4 + j] = expanded[(i - nk) * 4 + j] ^ temp[j];
        }
        i += 1;
    }
    expanded
}

fn add_round_key(round: usize, state: &mut [[u8; 4]; 4], round_keys: &[u8]) {
    for i in 0..4 {
        for j in 0..4 {
            state[j][i] ^= round_keys[round * NB * 4 + i * NB + j];
        }
    }
}

fn sub_bytes(state: &mut [[u8; 4]; 4]) {
    for row in state.iter_mut() {
        for b in row.iter_mut() {
            *b = S_BOX[*b as usize];
        }
    }
}

fn shift_rows(state: &mut [[u8; 4]; 4]) {
    let temp = state[1][0];
    state[1][0] = state[1][1];
    state[1][1] = state[1][2];
    state[1][2] = state[1][3];
    state[1][3] = temp;

    let temp = state[2][0];
    state[2][0] = state[2][2];
    state[2][2] = temp;
    let temp = state[2][1];
    state[2][1] = state[2][3];
    state[2][3] = temp;

    let temp = state[3][0];
    state[3][0] = state[3][3];
    state[3][3] = state[3][2];
    state[3][2] = state[3][1];
    state[3][1] = temp;
}

fn mix_columns(state: &mut [[u8; 4]; 4]) {
    for i in 0..4 {
        let t = state[0][i];
        let tmp = state[0][i] ^ state[1][i] ^ state[2][i] ^ state[3][i];

        let mut tm = state[0][i] ^ state[1][i];
        tm = gmul8(tm, 2);
        state[0][i] ^= tm ^ tmp;

        tm = state[1][i] ^ state[2][i];
        tm = gmul8(tm, 2);
        state[1][i] ^= tm ^ tmp;

        tm = state[2][i] ^ state[3][i];
        tm = gmul8(tm, 2);
        state[2][i] ^= tm ^ tmp;

        tm = state[3][i] ^ t;
        tm = gmul8(tm, 2);
        state[3][i] ^= tm ^ tmp;
    }
}

fn block_to_state(block: &[u8; 16]) -> [[u8; 4]; 4] {
    let mut state = [[0u8; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            state[j][i] = block[i * 4 + j];
        }
    }
    state
}

fn state_to_block(state: &[[u8; 4]; 4]) -> [u8; 16] {
    let mut block = [0u8; 16];
    for i in 0..4 {
        for j in 0..4 {
            block[i * 4 + j] = state[j][i];
        }
    }
    block
}

/// Encrypt `block` in place using the forward cipher, `nr` rounds, driven by
/// `round_keys` (must hold at least `16 * (nr + 1)` bytes).
pub(super) fn encrypt_block(block: &mut [u8; 16], round_keys: &[u8], nr: usize) {
    let mut state = block_to_state(block);

    add_round_key(0, &mut state, round_keys);
    for round in 1..nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(round, &mut state, round_keys);
    }
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(nr, &mut state, round_keys);

    *block = state_to_block(&state);
}
