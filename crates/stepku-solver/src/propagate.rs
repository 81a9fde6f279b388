//! Naked-subset elimination, the solver's single propagation rule.

use stepku_core::{Board, Group};

/// Runs one elimination pass over all 27 groups.
///
/// For each group independently: count how many cells carry each distinct
/// candidate mask. Whenever a mask's popcount equals the number of cells
/// carrying exactly that mask, those cells form a *naked subset* — between
/// them they consume exactly those values — so the mask's bits are cleared
/// from every other unresolved cell in the group.
///
/// With one bit and one carrier this is the classical naked single; with two
/// identical pair cells it is a naked pair, and so on, which is why no
/// separate single-placement rule is needed for correctness.
///
/// Resolved cells are never touched (locked clues in particular), and counts
/// are taken from a snapshot made before the group's eliminations, so within
/// one group the rule acts on the state the group had when the pass reached
/// it.
///
/// Returns `true` iff some cell's candidate set actually shrank.
///
/// # Examples
///
/// ```
/// use stepku_core::{Board, Digit};
/// use stepku_solver::eliminate_naked_subsets;
///
/// let mut text = String::from("5");
/// text.push_str(&".".repeat(80));
/// let mut board = Board::from_line(&text)?;
///
/// assert!(eliminate_naked_subsets(&mut board));
/// // the clue's row lost 5 as a candidate
/// assert!(!board.cell(0, 1).candidates.contains(Digit::D5));
/// // a cell sharing no group with the clue did not
/// assert!(board.cell(8, 8).candidates.contains(Digit::D5));
/// # Ok::<(), stepku_core::InvalidPuzzleLength>(())
/// ```
pub fn eliminate_naked_subsets(board: &mut Board) -> bool {
    let mut changed = false;
    for group in &Group::ALL {
        let snapshot = board.group_masks(group);
        for &mask in &snapshot {
            let carriers = snapshot.iter().filter(|&&m| m == mask).count();
            if usize::from(mask.len()) != carriers {
                continue;
            }
            for &cell_index in group.members() {
                let cell = &mut board[usize::from(cell_index)];
                if cell.candidates.len() != 1
                    && cell.candidates != mask
                    && cell.candidates.remove_all(mask)
                {
                    changed = true;
                }
            }
        }
    }
    changed
}
