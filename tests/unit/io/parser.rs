//! Tests for puzzle and motif text decoding

#[cfg(test)]
mod tests {
    use mosaic::MosaicError;
    use mosaic::io::parser::{load_motif, load_tiles, parse_tiles};
    use mosaic::spatial::tiles::{Tile, TileId};
    use std::fs;
    use tempfile::TempDir;

    const FIXTURE: &str = include_str!("../../fixtures/three_by_three.txt");

    // Tests decoding of the fixture
    // Verified by reading rows bottom to top
    #[test]
    fn test_parse_fixture() {
        let tiles = parse_tiles(FIXTURE).unwrap();
        assert_eq!(tiles.len(), 9);
        assert_eq!(tiles.tile_size(), 6);

        let first = tiles.tiles().first().unwrap();
        assert_eq!(first.id(), TileId(3821));
        // "##.###"
        assert!(first.pixels()[[0, 0]]);
        assert!(!first.pixels()[[0, 2]]);
        // ".#...#"
        assert!(first.pixels()[[5, 5]]);
    }

    // Tests tolerance of CRLF endings and extra blank lines
    // Verified by trimming only spaces from row ends
    #[test]
    fn test_parse_crlf_and_blank_lines() {
        let text = "\r\n\r\nTile 11:\r\n#..\r\n.#.\r\n..#\r\n\r\n\r\nTile 12:\r\n...\r\n...\r\n...\r\n";
        let tiles = parse_tiles(text).unwrap();
        let ids: Vec<TileId> = tiles.iter().map(Tile::id).collect();
        assert_eq!(ids, vec![TileId(11), TileId(12)]);
        assert!(tiles.get(TileId(11)).unwrap().pixels()[[2, 2]]);
    }

    // Tests line numbers on malformed input
    // Verified by counting lines from zero
    #[test]
    fn test_parse_errors() {
        let bad_glyph = "Tile 1:\n#.#\n.x.\n#.#\n";
        assert!(matches!(
            parse_tiles(bad_glyph),
            Err(MosaicError::Parse { line: 3, .. })
        ));

        let bad_header = "Tile one:\n#.#\n...\n#.#\n";
        assert!(matches!(
            parse_tiles(bad_header),
            Err(MosaicError::Parse { line: 1, .. })
        ));

        let missing_colon = "\nTile 4\n#.#\n...\n#.#\n";
        assert!(matches!(
            parse_tiles(missing_colon),
            Err(MosaicError::Parse { line: 2, .. })
        ));

        let ragged = "Tile 2:\n#.#\n..\n#.#\n";
        assert!(matches!(
            parse_tiles(ragged),
            Err(MosaicError::Parse { line: 1, .. })
        ));

        let not_square = "Tile 3:\n#.#.\n....\n#.#.\n";
        assert!(matches!(parse_tiles(not_square), Err(MosaicError::Parse { .. })));
    }

    // Tests that a zero tile id is refused
    // Verified by accepting any id that parses as a number
    #[test]
    fn test_parse_zero_id() {
        let zero = "Tile 1:\n#.#\n...\n#.#\n\nTile 0:\n#.#\n...\n#.#\n";
        assert!(matches!(
            parse_tiles(zero),
            Err(MosaicError::Parse { line: 6, .. })
        ));
        assert!(parse_tiles("Tile 7:\n#.#\n...\n#.#\n").is_ok());
    }

    // Tests rejections raised after decoding
    // Verified by accepting empty input as an empty set
    #[test]
    fn test_parse_invalid_sets() {
        assert!(matches!(
            parse_tiles(""),
            Err(MosaicError::InvalidTile { tile: None, .. })
        ));
        assert!(matches!(
            parse_tiles("Tile 5:\n#.\n.#\n"),
            Err(MosaicError::InvalidTile { tile: Some(TileId(5)), .. })
        ));
        assert!(matches!(
            parse_tiles("Tile 6:\n...\n...\n...\n\nTile 6:\n...\n...\n...\n"),
            Err(MosaicError::InvalidTile { tile: Some(TileId(6)), .. })
        ));
    }

    // Tests file loading for puzzles and motifs
    // Verified by discarding the path from file system errors
    #[test]
    fn test_load_files() {
        let temp_dir = TempDir::new().unwrap();
        let puzzle_path = temp_dir.path().join("puzzle.txt");
        let motif_path = temp_dir.path().join("motif.txt");
        fs::write(&puzzle_path, FIXTURE).unwrap();
        fs::write(&motif_path, "#..#\n####\n.#..\n").unwrap();

        assert_eq!(load_tiles(&puzzle_path).unwrap().len(), 9);
        assert_eq!(load_motif(&motif_path).unwrap().len(), 7);

        let missing = temp_dir.path().join("missing.txt");
        match load_tiles(&missing) {
            Err(MosaicError::FileSystem { path, operation, .. }) => {
                assert_eq!(path, missing);
                assert_eq!(operation, "read");
            }
            other => panic!("expected file system error, got {other:?}"),
        }
    }
}
