//! Scanline ownership. Worker ranks are 1-based, rank 0 being the
//! coordinator, and rows interleave across the pool so iteration-heavy
//! bands spread evenly instead of landing on one rank.

/// Rows owned by `rank`, in ascending order: `rank - 1`, then every
/// `worker_count`-th row after it. `rank` must be in
/// `1..=worker_count` and `worker_count` at least 1.
pub fn rows_for_rank(height_px: u32, worker_count: u32, rank: u32) -> impl Iterator<Item = u32> {
    ((rank - 1)..height_px).step_by(worker_count as usize)
}

/// The rank that [`rows_for_rank`] assigns `row` to.
pub fn owner_of_row(row: u32, worker_count: u32) -> u32 {
    row % worker_count + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_interleave_across_ranks() {
        assert_eq!(rows_for_rank(10, 3, 1).collect::<Vec<_>>(), vec![0, 3, 6, 9]);
        assert_eq!(rows_for_rank(10, 3, 2).collect::<Vec<_>>(), vec![1, 4, 7]);
        assert_eq!(rows_for_rank(10, 3, 3).collect::<Vec<_>>(), vec![2, 5, 8]);
    }

    #[test]
    fn a_single_worker_owns_every_row() {
        assert_eq!(rows_for_rank(4, 1, 1).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(owner_of_row(3, 1), 1);
    }

    #[test]
    fn every_row_has_exactly_one_owner() {
        for height in [0u32, 1, 5, 17, 64] {
            for workers in [1u32, 2, 3, 7, 16] {
                let mut owners = vec![0u32; height as usize];
                for rank in 1..=workers {
                    for row in rows_for_rank(height, workers, rank) {
                        assert_eq!(owner_of_row(row, workers), rank);
                        owners[row as usize] += 1;
                    }
                }
                assert!(owners.iter().all(|&count| count == 1));
            }
        }
    }

    #[test]
    fn ranks_walk_their_rows_in_ascending_order() {
        let rows: Vec<u32> = rows_for_rank(100, 7, 4).collect();
        let mut sorted = rows.clone();
        sorted.sort_unstable();
        assert_eq!(rows, sorted);
    }
}
