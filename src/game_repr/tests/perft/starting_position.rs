use super::*;

#[test]
fn test_perft_starting_position_depth_1() {
    let pos = Position::default();
    assert_eq!(pos.perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let pos = Position::default();
    assert_eq!(pos.perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let pos = Position::default();
    assert_eq!(pos.perft(3), 8902);
}

#[test]
fn test_perft_parallel_matches_serial() {
    let pos = Position::default();
    assert_eq!(pos.perft_parallel(3), pos.perft(3));
}

#[test]
fn test_divide_sums_to_perft() {
    let pos = Position::default();
    let divided = pos.divide(2);
    assert_eq!(divided.len(), 20);
    assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 400);
    assert!(divided.iter().any(|(mv, n)| mv == "e2e4" && *n == 20));
}

#[test]
#[ignore = "slow without optimizations"]
fn test_perft_starting_position_depth_4() {
    let pos = Position::default();
    assert_eq!(pos.perft_parallel(4), 197281);
}
