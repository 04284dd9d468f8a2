/// A rectangle of the drawing buffer, `start` inclusive and `end` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub x_start: u32,
    pub x_end: u32,
    pub y_start: u32,
    pub y_end: u32,
}

impl Tile {
    pub fn width(&self) -> usize {
        (self.x_end - self.x_start) as usize
    }
    pub fn height(&self) -> usize {
        (self.y_end - self.y_start) as usize
    }
    pub fn len(&self) -> usize {
        self.width() * self.height()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.x_start..self.x_end).contains(&x) && (self.y_start..self.y_end).contains(&y)
    }

    /// Row major index of pixel (x, y) in a buffer covering this tile
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        (y - self.y_start) as usize * self.width() + (x - self.x_start) as usize
    }
}

pub struct TileIter {
    tile: Tile,
    index: usize,
}

impl Iterator for TileIter {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.tile.len() {
            return None;
        }
        let x = (self.index % self.tile.width()) as u32;
        let y = (self.index / self.tile.width()) as u32;
        self.index += 1;
        Some((self.tile.x_start + x, self.tile.y_start + y))
    }
}

impl IntoIterator for Tile {
    type Item = (u32, u32);

    type IntoIter = TileIter;

    fn into_iter(self) -> Self::IntoIter {
        TileIter {
            tile: self,
            index: 0,
        }
    }
}

/// Cuts a `width`x`height` buffer in square tiles, the last row and column may be smaller
#[derive(Debug, Clone, Copy)]
pub struct Tiler {
    pub width: u32,
    pub height: u32,
    pub tile_size: u32,
}

impl Tiler {
    /// (columns, rows)
    pub fn tile_dimensions(&self) -> (usize, usize) {
        (
            self.width.div_ceil(self.tile_size) as usize,
            self.height.div_ceil(self.tile_size) as usize,
        )
    }

    pub fn tile_count(&self) -> usize {
        let (c, r) = self.tile_dimensions();
        c * r
    }

    pub fn tile(&self, idx: usize) -> Option<Tile> {
        if idx >= self.tile_count() {
            return None;
        }
        let (col_count, _) = self.tile_dimensions();
        let x = (idx % col_count) as u32;
        let y = (idx / col_count) as u32;

        Some(Tile {
            x_start: x * self.tile_size,
            x_end: u32::min(self.width, (x + 1) * self.tile_size),
            y_start: y * self.tile_size,
            y_end: u32::min(self.height, (y + 1) * self.tile_size),
        })
    }
}

impl IntoIterator for Tiler {
    type Item = Tile;

    type IntoIter = TileIterator;

    fn into_iter(self) -> Self::IntoIter {
        TileIterator {
            tiler: self,
            next: 0,
        }
    }
}

pub struct TileIterator {
    tiler: Tiler,
    next: usize,
}

impl Iterator for TileIterator {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        let tile = self.tiler.tile(self.next)?;
        self.next += 1;
        Some(tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tiler.tile_count().saturating_sub(self.next);
        (len, Some(len))
    }
}

impl ExactSizeIterator for TileIterator {}
