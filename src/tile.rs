use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// The number of [tiles](Tile) in the [standard distribution](standard_tiles).
/// 98 letter tiles and 2 blank tiles.
pub const STANDARD_TILES_LEN: usize = 100;

/// The letters, copies, and point values of the [standard distribution](standard_tiles).
const STANDARD_LETTERS: [(char, usize, u16); 26] = [
    ('A', 9, 1),
    ('B', 2, 3),
    ('C', 2, 3),
    ('D', 4, 2),
    ('E', 12, 1),
    ('F', 2, 4),
    ('G', 3, 2),
    ('H', 2, 4),
    ('I', 9, 1),
    ('J', 1, 8),
    ('K', 1, 5),
    ('L', 4, 1),
    ('M', 2, 3),
    ('N', 6, 1),
    ('O', 8, 1),
    ('P', 2, 3),
    ('Q', 1, 10),
    ('R', 6, 1),
    ('S', 4, 1),
    ('T', 6, 1),
    ('U', 4, 1),
    ('V', 2, 4),
    ('W', 2, 4),
    ('X', 1, 8),
    ('Y', 2, 4),
    ('Z', 1, 10),
];
/// The number of blank [tiles](Tile) in the [standard distribution](standard_tiles).
const STANDARD_BLANKS: usize = 2;

/// Describes what kind of [`Tile`] is held or played.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive)]
pub enum TileKind {
    /// `0`. A tile printed with a letter.
    Letter = 0,
    /// `1`. A tile without a letter that is worth no points.
    Blank = 1,
}

impl TileKind {
    /// The number of [`TileKind`] variants. 2 kinds.
    pub const KINDS_LEN: usize = 2;

    /// # Returns
    ///
    /// An array of all [`TileKind`] variants in order.
    #[inline]
    pub fn kinds() -> [TileKind; TileKind::KINDS_LEN] {
        [TileKind::Letter, TileKind::Blank]
    }
}

impl Distribution<TileKind> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TileKind {
        TileKind::kinds()[rng.gen_range(0..TileKind::KINDS_LEN)]
    }
}

/// Describes an immutable tile in a game. Tiles are compared by value, so two tiles
/// with the same kind, points, and letter are interchangeable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Tile {
    kind: TileKind,
    points: u16,
    letter: Option<char>,
}

impl Tile {
    /// # Returns
    ///
    /// A [`TileKind::Letter`] tile printed with `letter` and worth `points`.
    #[inline]
    pub fn letter(letter: char, points: u16) -> Tile {
        Tile {
            kind: TileKind::Letter,
            points,
            letter: Some(letter),
        }
    }

    /// # Returns
    ///
    /// A [`TileKind::Blank`] tile worth `0` points.
    #[inline]
    pub fn blank() -> Tile {
        Tile {
            kind: TileKind::Blank,
            points: 0,
            letter: None,
        }
    }

    /// The kind of the tile.
    #[inline]
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// The number of points the tile is worth.
    #[inline]
    pub fn points(&self) -> u16 {
        self.points
    }

    /// The printed letter, or [None] for blank tiles.
    #[inline]
    pub fn display_letter(&self) -> Option<char> {
        self.letter
    }
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        match rng.gen::<TileKind>() {
            TileKind::Letter => {
                let letter = char::from(rng.gen_range(b'A'..=b'Z'));
                Tile::letter(letter, rng.gen_range(1..=10))
            }
            TileKind::Blank => Tile::blank(),
        }
    }
}

/// # Returns
///
/// A vector of the [standard distribution](STANDARD_TILES_LEN) of [tiles](Tile) in
/// alphabetical order followed by blanks. Shuffle before drawing.
pub fn standard_tiles() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(STANDARD_TILES_LEN);
    for (letter, copies, points) in STANDARD_LETTERS {
        tiles.extend(std::iter::repeat(Tile::letter(letter, points)).take(copies));
    }
    tiles.extend(std::iter::repeat(Tile::blank()).take(STANDARD_BLANKS));
    tiles
}
