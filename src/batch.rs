use crate::token::Token;

/// `size` tokens with ids `offset..offset + size`, in order.
pub fn generate_batch(offset: usize, size: usize) -> Vec<Token> {
    (0..size).map(|j| Token::new((offset + j) as i64)).collect()
}

/// Start offset of every batch: `0, size, 2 * size, ...` while below `total`.
/// The last batch is not shortened, so a `total` that is not a multiple of
/// `size` overshoots. `size` must be non-zero.
pub fn batch_offsets(total: usize, size: usize) -> impl Iterator<Item = usize> {
    (0..total).step_by(size)
}
