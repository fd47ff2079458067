//! Fischer-random back-rank shuffle.
//!
//! Bishops are drawn from the even and odd file pools so they land on
//! opposite colours; queen and knights take random free files; rook, king,
//! rook fill the last three files with the king forced between the rooks.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::chess_types::PieceKind;

const EVEN_FILES: [usize; 4] = [0, 2, 4, 6];
const ODD_FILES: [usize; 4] = [1, 3, 5, 7];

/// Shuffled back rank, index 0 is the a-file.
pub fn shuffled_back_rank<R: Rng + ?Sized>(rng: &mut R) -> [PieceKind; 8] {
    let mut rank: [Option<PieceKind>; 8] = [None; 8];

    rank[EVEN_FILES[rng.random_range(0..EVEN_FILES.len())]] = Some(PieceKind::Bishop);
    rank[ODD_FILES[rng.random_range(0..ODD_FILES.len())]] = Some(PieceKind::Bishop);

    for kind in [PieceKind::Queen, PieceKind::Knight, PieceKind::Knight] {
        let free: Vec<usize> = (0..8).filter(|&i| rank[i].is_none()).collect();
        rank[free[rng.random_range(0..free.len())]] = Some(kind);
    }

    let free: Vec<usize> = (0..8).filter(|&i| rank[i].is_none()).collect();
    let mut last = [PieceKind::Rook, PieceKind::King, PieceKind::Rook];
    last.shuffle(rng);
    if last[0] == PieceKind::King {
        last.swap(0, 1);
    } else if last[2] == PieceKind::King {
        last.swap(2, 1);
    }
    for (slot, kind) in free.into_iter().zip(last) {
        rank[slot] = Some(kind);
    }

    rank.map(|kind| kind.unwrap_or(PieceKind::Pawn))
}

/// Starting notation with the shuffled rank mirrored for both seats.
pub fn fischer_random_fen<R: Rng + ?Sized>(rng: &mut R) -> String {
    let black: String = shuffled_back_rank(rng).iter().map(|k| k.letter()).collect();
    let white = black.to_ascii_uppercase();
    format!("{black}/pppppppp/8/8/8/8/PPPPPPPP/{white} w KQkq - 0 1")
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::game_state::chess_rules::STANDARD_BACK_RANK;

    fn positions(rank: &[PieceKind; 8], kind: PieceKind) -> Vec<usize> {
        (0..8).filter(|&i| rank[i] == kind).collect()
    }

    #[test]
    fn thousand_shuffles_keep_the_placement_rules() {
        let mut rng = StdRng::seed_from_u64(960);
        let mut expected: Vec<char> = STANDARD_BACK_RANK.chars().collect();
        expected.sort_unstable();

        for _ in 0..1000 {
            let rank = shuffled_back_rank(&mut rng);

            let mut letters: Vec<char> = rank.iter().map(|k| k.letter()).collect();
            letters.sort_unstable();
            assert_eq!(letters, expected);

            let bishops = positions(&rank, PieceKind::Bishop);
            assert_ne!(bishops[0] % 2, bishops[1] % 2, "bishops share a colour: {rank:?}");

            let rooks = positions(&rank, PieceKind::Rook);
            let king = positions(&rank, PieceKind::King)[0];
            assert!(rooks[0] < king && king < rooks[1], "king not between rooks: {rank:?}");
        }
    }

    #[test]
    fn fen_mirrors_the_rank_for_both_seats() {
        let mut rng = StdRng::seed_from_u64(7);
        let fen = fischer_random_fen(&mut rng);
        let rows: Vec<&str> = fen.split(' ').next().unwrap().split('/').collect();
        assert_eq!(rows[0].to_ascii_uppercase(), rows[7]);
        assert!(rows[0].chars().all(|c| c.is_ascii_lowercase()));
        assert!(fen.ends_with(" w KQkq - 0 1"));
    }
}
