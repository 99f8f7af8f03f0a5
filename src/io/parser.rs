//! Puzzle text decoding
//!
//! A puzzle is a sequence of blocks, each a `Tile <id>:` header followed by
//! the rows of a square pixel grid drawn with `#` and `.`, separated by blank
//! lines.

use crate::algorithm::scanner::Motif;
use crate::io::configuration::{GLYPH_OFF, GLYPH_ON, TILE_HEADER_PREFIX};
use crate::io::error::{MosaicError, Result, parse_error};
use crate::spatial::tiles::{Tile, TileId, TileSet};
use ndarray::Array2;
use std::path::Path;

fn parse_header(line: &str) -> Option<TileId> {
    line.trim_end()
        .strip_prefix(TILE_HEADER_PREFIX)?
        .strip_suffix(':')?
        .trim()
        .parse()
        .ok()
        .filter(|&id| id != 0)
        .map(TileId)
}

fn parse_row(line_number: usize, line: &str) -> Result<Vec<bool>> {
    line.trim_end()
        .chars()
        .map(|glyph| match glyph {
            GLYPH_ON => Ok(true),
            GLYPH_OFF => Ok(false),
            other => Err(parse_error(
                line_number,
                &format!("unexpected glyph `{other}`"),
            )),
        })
        .collect()
}

/// Decode every tile in a puzzle text
///
/// # Errors
///
/// Returns an error if a header or pixel row is malformed, a tile is not
/// square, or the tiles do not form a valid set
pub fn parse_tiles(text: &str) -> Result<TileSet> {
    let mut tiles = Vec::new();
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .peekable();

    loop {
        while lines.next_if(|(_, line)| line.trim().is_empty()).is_some() {}
        let Some((header_line, header)) = lines.next() else {
            break;
        };
        let id = parse_header(header).ok_or_else(|| {
            parse_error(
                header_line,
                &format!(
                    "expected `{TILE_HEADER_PREFIX}<id>:` with a non-zero id, found `{header}`"
                ),
            )
        })?;

        let mut rows = Vec::new();
        while let Some((line_number, line)) = lines.next_if(|(_, line)| !line.trim().is_empty()) {
            rows.push(parse_row(line_number, line)?);
        }

        let size = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(parse_error(
                header_line,
                &format!(
                    "tile {id} has {size} rows but a row of width {}, tiles must be square",
                    row.len()
                ),
            ));
        }
        let pixels = Array2::from_shape_vec((size, size), rows.into_iter().flatten().collect())
            .map_err(|e| parse_error(header_line, &e))?;
        tiles.push(Tile::new(id, pixels)?);
    }

    tracing::debug!(tiles = tiles.len(), "puzzle parsed");
    TileSet::new(tiles)
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source: e,
    })
}

/// Read and decode a puzzle file
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_tiles(path: &Path) -> Result<TileSet> {
    parse_tiles(&read_text(path)?)
}

/// Read and decode a motif file
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no required pixels
pub fn load_motif(path: &Path) -> Result<Motif> {
    Motif::from_pattern(&read_text(path)?)
}
