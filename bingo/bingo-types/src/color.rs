//! Block and circle colors, and grid cell classification.

use crate::coord::GridCoord;

/// Number of colors that own a slot in the per-color tables (black plus four paired colors).
pub const COLOR_COUNT: usize = 5;

/// The color of a block or a block circle.
///
/// `Black` is the singular color: exactly one black block exists and its
/// destination is chosen by the card number. The four remaining colors each
/// have two blocks and two circles.
///
/// # Example
///
/// ```
/// use bingo_types::Color;
///
/// assert_eq!(Color::Black.index(), Some(0));
/// assert_eq!(Color::Green.index(), Some(4));
/// assert_eq!(Color::None.index(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// No block.
    #[default]
    None,
    /// The single card-directed block.
    Black,
    /// Paired color, ordinal 1.
    Red,
    /// Paired color, ordinal 2.
    Yellow,
    /// Paired color, ordinal 3.
    Blue,
    /// Paired color, ordinal 4.
    Green,
}

impl Color {
    /// The four paired colors in increasing ordinal order.
    pub const PAIRED: [Self; 4] = [Self::Red, Self::Yellow, Self::Blue, Self::Green];

    /// Returns the table ordinal of this color, or `None` for the sentinel.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Black => Some(0),
            Self::Red => Some(1),
            Self::Yellow => Some(2),
            Self::Blue => Some(3),
            Self::Green => Some(4),
        }
    }

    /// Returns `true` if this color does not block a destination.
    ///
    /// An empty cell or the black placeholder can be delivered into without
    /// displacing a colored block first.
    #[must_use]
    pub const fn is_free_for_delivery(self) -> bool {
        matches!(self, Self::None | Self::Black)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Black => "black",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
        };
        f.write_str(name)
    }
}

/// A block sitting on a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    /// Cell the block occupies.
    pub position: GridCoord,
    /// Block color; `Color::None` means the cell is empty.
    pub color: Color,
}

impl Block {
    /// Creates a block fact.
    #[must_use]
    pub const fn new(position: GridCoord, color: Color) -> Self {
        Self { position, color }
    }

    /// Returns `true` if no block is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.color, Color::None)
    }
}

/// Classification of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeType {
    /// A plain cell with no circle.
    #[default]
    Plain,
    /// A circle with no block on it.
    Circle,
    /// A cross circle (even/even cell) carrying a block.
    CrossCircle,
    /// A numbered block circle carrying a block.
    BlockCircle,
}

impl NodeType {
    /// Returns `true` for the two block-on-circle variants.
    #[must_use]
    pub const fn carries_block_on_circle(self) -> bool {
        matches!(self, Self::CrossCircle | Self::BlockCircle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_covers_table() {
        assert_eq!(Color::Black.index(), Some(0));
        let last = Color::PAIRED.iter().filter_map(|c| c.index()).max();
        assert_eq!(last, Some(COLOR_COUNT - 1));
    }

    #[test]
    fn test_paired_order() {
        let indices: Vec<_> = Color::PAIRED.iter().filter_map(|c| c.index()).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_free_for_delivery() {
        assert!(Color::None.is_free_for_delivery());
        assert!(Color::Black.is_free_for_delivery());
        for color in Color::PAIRED {
            assert!(!color.is_free_for_delivery());
        }
    }

    #[test]
    fn test_block_empty() {
        let block = Block::new(GridCoord::new(2, 2), Color::None);
        assert!(block.is_empty());
        assert!(!Block::new(GridCoord::new(2, 2), Color::Blue).is_empty());
    }

    #[test]
    fn test_node_type() {
        assert!(NodeType::CrossCircle.carries_block_on_circle());
        assert!(NodeType::BlockCircle.carries_block_on_circle());
        assert!(!NodeType::Circle.carries_block_on_circle());
        assert!(!NodeType::Plain.carries_block_on_circle());
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::Yellow.to_string(), "yellow");
        assert_eq!(Color::None.to_string(), "none");
    }
}
