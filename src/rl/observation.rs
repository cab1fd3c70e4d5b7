use burn::tensor::{Tensor, backend::Backend};

use crate::grid::Cell;

/// Encode a grid position as a network input
///
/// The position is presented to the network as its raw real-valued
/// coordinates, shape `[1, 2]` (a batch of one `[row, col]` pair).
pub fn position_tensor<B: Backend>(cell: Cell, device: &B::Device) -> Tensor<B, 2> {
    Tensor::from_floats([[cell.row as f32, cell.col as f32]], device)
}
