//! Precomputed knight jump table.

use crate::bitboard::Bitboard;

/// `(file, rank)` offsets of the eight knight jumps.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const fn compute_knight_attacks() -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut bits = 0u64;
        let mut d = 0;
        while d < KNIGHT_OFFSETS.len() {
            let f = file + KNIGHT_OFFSETS[d].0;
            let r = rank + KNIGHT_OFFSETS[d].1;
            if r >= 0 && r < 8 && f >= 0 && f < 8 {
                bits |= 1u64 << (r as usize * 8 + f as usize);
            }
            d += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

/// Knight jumps from every square. Jumps ignore occupancy, so the table is fixed.
pub(crate) static KNIGHT_ATTACKS: [Bitboard; 64] = compute_knight_attacks();
