//! Tests for stitching tile interiors into the composite

#[cfg(test)]
mod tests {
    use mosaic::algorithm::assembly::GridAssembler;
    use mosaic::algorithm::compositor::{composite, oriented_interior};
    use mosaic::algorithm::index::EdgeIndex;
    use mosaic::algorithm::topology::classify;
    use mosaic::io::parser::parse_tiles;
    use mosaic::spatial::generator::generate_puzzle;
    use mosaic::spatial::grid::{AssembledGrid, OrientedTile};
    use mosaic::spatial::tiles::{Tile, TileId};
    use mosaic::spatial::transform::Transform;
    use ndarray::{Array2, array};

    const FIXTURE: &str = include_str!("../../fixtures/three_by_three.txt");

    const ASSEMBLED: [&str; 12] = [
        "#.#.###...#.",
        ".#.##.##....",
        ".#........#.",
        "#.#.###.....",
        "##..#.###...",
        "...#.##.##..",
        "....###..#.#",
        "###...#..#..",
        "..##.....###",
        "###...####..",
        ".....#...#..",
        "#..#...##.#.",
    ];

    // Tests border stripping under a transform
    // Verified by keeping the last row of the tile
    #[test]
    fn test_oriented_interior() {
        let pixels = Array2::from_shape_fn((4, 4), |(row, col)| row == 1 && col == 2);
        let tile = Tile::new(TileId(1), pixels).unwrap();

        let upright = oriented_interior(&OrientedTile::new(&tile, Transform::IDENTITY));
        assert_eq!(upright, array![[false, true], [false, false]]);

        let transposed =
            oriented_interior(&OrientedTile::new(&tile, Transform::from_index(1).unwrap()));
        assert_eq!(transposed, array![[false, false], [true, false]]);
    }

    // Tests the stitched fixture image pixel for pixel
    // Verified by placing blocks at tile-size strides
    #[test]
    fn test_composite_fixture() {
        let tiles = parse_tiles(FIXTURE).unwrap();
        let index = EdgeIndex::build(&tiles).unwrap();
        let topology = classify(&tiles, &index).unwrap();
        let grid = GridAssembler::new(&tiles, &index)
            .assemble(&topology)
            .unwrap();
        let image = composite(&grid);

        assert_eq!(image.side(), 12);
        assert_eq!(image.count_ones(), 58);
        let expected: String = ASSEMBLED.iter().map(|row| format!("{row}\n")).collect();
        assert_eq!(image.to_string(), expected);
    }

    // Tests that a generated puzzle reproduces its source image up to symmetry
    // Verified by skipping the cell transform when copying interiors
    #[test]
    fn test_composite_generated() {
        let puzzle = generate_puzzle(5, 10, 17).unwrap();
        let index = EdgeIndex::build(&puzzle.tiles).unwrap();
        let topology = classify(&puzzle.tiles, &index).unwrap();
        let grid = GridAssembler::new(&puzzle.tiles, &index)
            .assemble(&topology)
            .unwrap();
        let image = composite(&grid);

        assert_eq!(image.side(), 5 * 8);
        assert!(
            Transform::ALL
                .iter()
                .any(|&t| puzzle.composite.transformed(t) == image)
        );
    }

    // Tests the composite of a single placed tile
    // Verified by sizing the image from the full tile width
    #[test]
    fn test_single_cell_composite() {
        let pixels = Array2::from_shape_fn((3, 3), |(row, col)| row == 1 && col == 1);
        let tile = Tile::new(TileId(2), pixels).unwrap();
        let grid =
            AssembledGrid::from_cells(1, vec![OrientedTile::new(&tile, Transform::IDENTITY)])
                .unwrap();
        let image = composite(&grid);
        assert_eq!(image.side(), 1);
        assert!(image.get(0, 0));
    }
}
