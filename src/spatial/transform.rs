//! The eight symmetry transforms of a square and their action on edges and pixels
//!
//! A transform is a combination of three toggles: transpose (swap the two
//! axes), mirror left/right and mirror top/bottom. Toggles are always applied
//! in that order, because transposing changes which edge occupies which slot
//! before a mirror acts on it.

use crate::spatial::tiles::Fingerprint;
use ndarray::Array2;
use std::fmt;

/// One of the four border slots of a square
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeSlot {
    /// Row 0, read left to right
    Top,
    /// Last column, read top to bottom
    Right,
    /// Last row, read left to right
    Bottom,
    /// Column 0, read top to bottom
    Left,
}

impl EdgeSlot {
    /// All slots in clockwise order starting at the top
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The slot facing this one across a seam
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}

impl fmt::Display for EdgeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// Border fingerprints of a tile in one orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edges {
    /// Top row fingerprint
    pub top: Fingerprint,
    /// Right column fingerprint
    pub right: Fingerprint,
    /// Bottom row fingerprint
    pub bottom: Fingerprint,
    /// Left column fingerprint
    pub left: Fingerprint,
}

impl Edges {
    /// Fingerprint occupying the given slot
    pub const fn get(&self, slot: EdgeSlot) -> Fingerprint {
        match slot {
            EdgeSlot::Top => self.top,
            EdgeSlot::Right => self.right,
            EdgeSlot::Bottom => self.bottom,
            EdgeSlot::Left => self.left,
        }
    }

    /// Fingerprints in `EdgeSlot::ALL` order
    pub const fn as_array(&self) -> [Fingerprint; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// Element of the dihedral group of the square, stored as a toggle mask
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transform(u8);

impl Transform {
    /// Swap rows and columns
    pub const TRANSPOSE: u8 = 1;
    /// Reverse every row
    pub const MIRROR_HORIZONTAL: u8 = 2;
    /// Reverse the row order
    pub const MIRROR_VERTICAL: u8 = 4;

    /// The natural orientation
    pub const IDENTITY: Self = Self(0);

    /// All eight transforms in enumeration order
    pub const ALL: [Self; 8] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Build a transform from its toggle mask, if the mask is in range
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 { Some(Self(index)) } else { None }
    }

    /// Build a transform from the three toggles
    pub const fn from_toggles(transpose: bool, mirror_horizontal: bool, mirror_vertical: bool) -> Self {
        let mut mask = 0;
        if transpose {
            mask |= Self::TRANSPOSE;
        }
        if mirror_horizontal {
            mask |= Self::MIRROR_HORIZONTAL;
        }
        if mirror_vertical {
            mask |= Self::MIRROR_VERTICAL;
        }
        Self(mask)
    }

    /// Position of this transform in `Transform::ALL`
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether the transpose toggle is set
    pub const fn transposes(self) -> bool {
        self.0 & Self::TRANSPOSE != 0
    }

    /// Whether the left/right mirror toggle is set
    pub const fn mirrors_horizontally(self) -> bool {
        self.0 & Self::MIRROR_HORIZONTAL != 0
    }

    /// Whether the top/bottom mirror toggle is set
    pub const fn mirrors_vertically(self) -> bool {
        self.0 & Self::MIRROR_VERTICAL != 0
    }

    /// Rearrange natural-orientation edges into this orientation
    ///
    /// `width` is the tile size in pixels, needed to reverse fingerprints
    /// when a mirror flips the reading direction of an edge.
    pub fn apply_edges(self, edges: Edges, width: u32) -> Edges {
        let mut e = edges;
        if self.transposes() {
            std::mem::swap(&mut e.top, &mut e.left);
            std::mem::swap(&mut e.bottom, &mut e.right);
        }
        if self.mirrors_horizontally() {
            e.top = e.top.reversed(width);
            e.bottom = e.bottom.reversed(width);
            std::mem::swap(&mut e.left, &mut e.right);
        }
        if self.mirrors_vertically() {
            e.left = e.left.reversed(width);
            e.right = e.right.reversed(width);
            std::mem::swap(&mut e.top, &mut e.bottom);
        }
        e
    }

    /// Coordinate in the untransformed square that lands at `(row, col)`
    ///
    /// Toggles are undone in reverse application order.
    pub const fn source_coord(self, row: usize, col: usize, size: usize) -> (usize, usize) {
        let mut r = row;
        let mut c = col;
        if self.mirrors_vertically() {
            r = size - 1 - r;
        }
        if self.mirrors_horizontally() {
            c = size - 1 - c;
        }
        if self.transposes() {
            (c, r)
        } else {
            (r, c)
        }
    }

    /// Produce a transformed copy of a square grid
    ///
    /// Non-square grids are returned with their shape preserved and cells
    /// outside the square filled with the default value.
    pub fn apply_grid<T: Clone + Default>(self, grid: &Array2<T>) -> Array2<T> {
        let (rows, cols) = grid.dim();
        let size = rows.min(cols);
        Array2::from_shape_fn((rows, cols), |(row, col)| {
            if row >= size || col >= size {
                return T::default();
            }
            let source = self.source_coord(row, col, size);
            grid.get(source).cloned().unwrap_or_default()
        })
    }

    /// The transform equivalent to applying `self` and then `next`
    pub fn then(self, next: Self) -> Self {
        const PROBE: usize = 3;
        let composed = |row: usize, col: usize| {
            let (r, c) = next.source_coord(row, col, PROBE);
            self.source_coord(r, c, PROBE)
        };
        // A 3x3 probe distinguishes all eight elements and the group is closed
        Self::ALL
            .into_iter()
            .find(|candidate| {
                (0..PROBE).all(|row| {
                    (0..PROBE).all(|col| candidate.source_coord(row, col, PROBE) == composed(row, col))
                })
            })
            .unwrap_or(Self::IDENTITY)
    }

    /// The transform undoing this one
    pub fn inverse(self) -> Self {
        Self::ALL
            .into_iter()
            .find(|candidate| self.then(*candidate) == Self::IDENTITY)
            .unwrap_or(Self::IDENTITY)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("identity");
        }
        let toggles = [
            (self.transposes(), "transpose"),
            (self.mirrors_horizontally(), "mirror-h"),
            (self.mirrors_vertically(), "mirror-v"),
        ];
        let names: Vec<&str> = toggles
            .iter()
            .filter(|(set, _)| *set)
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&names.join("+"))
    }
}
