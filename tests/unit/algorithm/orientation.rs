//! Tests for orientation search

#[cfg(test)]
mod tests {
    use mosaic::MosaicError;
    use mosaic::algorithm::index::EdgeIndex;
    use mosaic::algorithm::orientation::OrientationResolver;
    use mosaic::io::parser::parse_tiles;
    use mosaic::spatial::tiles::{Fingerprint, Tile, TileId, TileSet};
    use mosaic::spatial::transform::{EdgeSlot, Transform};
    use ndarray::Array2;

    const FIXTURE: &str = include_str!("../../fixtures/three_by_three.txt");

    // Tests the first fitting transform is chosen for the anchor corner
    // Verified by searching transforms in reverse order
    #[test]
    fn test_orient_as_top_left() {
        let tiles = parse_tiles(FIXTURE).unwrap();
        let index = EdgeIndex::build(&tiles).unwrap();
        let resolver = OrientationResolver::new(&index);

        let corner = tiles.get(TileId(2873)).unwrap();
        let transform = resolver.orient_as_top_left(corner).unwrap();
        assert_eq!(transform, Transform::IDENTITY);

        let edges = corner.edges(transform);
        assert!(index.is_unmatched(edges.top));
        assert!(index.is_unmatched(edges.left));
    }

    // Tests that an interior tile cannot be a top-left corner
    // Verified by accepting a single unmatched edge
    #[test]
    fn test_orient_as_top_left_rejects_interior() {
        let tiles = parse_tiles(FIXTURE).unwrap();
        let index = EdgeIndex::build(&tiles).unwrap();
        let resolver = OrientationResolver::new(&index);

        let interior = tiles.get(TileId(3997)).unwrap();
        assert!(matches!(
            resolver.orient_as_top_left(interior),
            Err(MosaicError::OrientationAmbiguity { matches: 0, .. })
        ));
    }

    // Tests the unique transform matching a neighbour's seam
    // Verified by matching against the reversed fingerprint
    #[test]
    fn test_orient_to_match() {
        let tiles = parse_tiles(FIXTURE).unwrap();
        let index = EdgeIndex::build(&tiles).unwrap();
        let resolver = OrientationResolver::new(&index);

        let seam = tiles.get(TileId(2873)).unwrap().natural_edges().right;
        let neighbour = tiles.get(TileId(3253)).unwrap();
        let transform = resolver
            .orient_to_match(neighbour, EdgeSlot::Left, seam)
            .unwrap();
        assert_eq!(transform, Transform::from_index(7).unwrap());
        assert_eq!(neighbour.edges(transform).left, seam);
    }

    // Tests ambiguity and absence are both rejected
    // Verified by returning the first matching transform
    #[test]
    fn test_orient_to_match_requires_uniqueness() {
        let blank = Tile::new(TileId(8), Array2::from_elem((4, 4), false)).unwrap();
        let tiles = TileSet::new(vec![blank.clone()]).unwrap();
        let index = EdgeIndex::build(&tiles).unwrap();
        let resolver = OrientationResolver::new(&index);

        match resolver.orient_to_match(&blank, EdgeSlot::Top, Fingerprint::new(0)) {
            Err(MosaicError::OrientationAmbiguity { tile, matches, .. }) => {
                assert_eq!(tile, TileId(8));
                assert_eq!(matches, 8);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
        assert!(matches!(
            resolver.orient_to_match(&blank, EdgeSlot::Top, Fingerprint::new(1)),
            Err(MosaicError::OrientationAmbiguity { matches: 0, .. })
        ));
    }
}
