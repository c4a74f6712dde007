/// Number of directed off-diagonal cells in a `size x size` matrix.
pub fn max_directed_edges(size: usize) -> usize {
    if size == 0 {
        return 0;
    }

    return size.saturating_mul(size - 1);
}
