//! Published artworks and the newest-first collection that holds them.

use chrono::{DateTime, Local, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::grid::{DensityGrid, GRID_HEIGHT, GRID_WIDTH};

/// Identifier of the seeded default artwork.
pub const SEED_ARTWORK_ID: &str = "seed-1";

/// How far before "now" the seeded artwork is stamped, in milliseconds.
const SEED_AGE_MS: i64 = 10_000_000;

/// Fixed seed for the default artwork's texture.
const SEED_TEXTURE: u64 = 0x5eed_0001;

/// An immutable published grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: String,
    pub grid: DensityGrid,
    /// Creation time in epoch milliseconds
    pub created_at: i64,
}

impl Artwork {
    pub fn new(id: impl Into<String>, grid: DensityGrid, created_at: i64) -> Self {
        Self {
            id: id.into(),
            grid,
            created_at,
        }
    }

    /// First eight characters of the id, uppercased.
    pub fn short_id(&self) -> String {
        self.id.chars().take(8).collect::<String>().to_uppercase()
    }

    /// Id up to the first `-`, uppercased.
    pub fn record_label(&self) -> String {
        self.id
            .split('-')
            .next()
            .unwrap_or_default()
            .to_uppercase()
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.created_at).single()
    }

    pub fn created_at_local(&self) -> Option<DateTime<Local>> {
        self.created_at_utc().map(|t| t.with_timezone(&Local))
    }
}

/// Current time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Ordered artworks, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkCollection {
    items: Vec<Artwork>,
}

impl ArtworkCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(items: Vec<Artwork>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Artwork> {
        self.items.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Artwork> {
        self.items.iter().find(|a| a.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|a| a.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Insert as the newest entry.
    pub fn prepend(&mut self, artwork: Artwork) {
        self.items.insert(0, artwork);
    }

    /// 1-based number counted from the oldest entry.
    pub fn specimen_number(&self, index: usize) -> usize {
        self.items.len().saturating_sub(index)
    }
}

impl<'a> IntoIterator for &'a ArtworkCollection {
    type Item = &'a Artwork;
    type IntoIter = std::slice::Iter<'a, Artwork>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Radial-gradient grid used for the seeded default artwork.
///
/// Inside radius 10 the density is 5..=9, inside radius 15 it is 1..=3.
pub fn seed_grid() -> DensityGrid {
    let mut rng = StdRng::seed_from_u64(SEED_TEXTURE);
    let mut grid = DensityGrid::new(GRID_WIDTH, GRID_HEIGHT);
    let cx = GRID_WIDTH as f64 / 2.0;
    let cy = GRID_HEIGHT as f64 / 2.0;

    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            let density = if dist < 10.0 {
                rng.gen_range(5..=9)
            } else if dist < 15.0 {
                rng.gen_range(1..=3)
            } else {
                0
            };
            grid.set(x as i32, y as i32, density);
        }
    }

    grid
}

/// Collection holding only the seeded default artwork.
pub fn seed_collection() -> ArtworkCollection {
    let seed = Artwork::new(SEED_ARTWORK_ID, seed_grid(), now_millis() - SEED_AGE_MS);
    ArtworkCollection::from_vec(vec![seed])
}
