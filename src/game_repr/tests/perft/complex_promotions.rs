use super::*;

const PROMOTIONS: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";

#[test]
fn test_perft_complex_promotions_depth_1() {
    let pos = fen(PROMOTIONS);
    assert_eq!(pos.perft(1), 6);
}

#[test]
fn test_perft_complex_promotions_depth_2() {
    let pos = fen(PROMOTIONS);
    assert_eq!(pos.perft(2), 264);
}

#[test]
fn test_perft_complex_promotions_depth_3() {
    let pos = fen(PROMOTIONS);
    assert_eq!(pos.perft_parallel(3), 9467);
}
