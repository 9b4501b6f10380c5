//! Spatial index over the carousel track.
//!
//! Lays items out left to right in track coordinates and stores their boxes
//! in an R-tree, so pointer positions resolve to items in O(log n).

use rstar::{RTree, RTreeObject, AABB};

/// Bounding box of one item on the track.
#[derive(Debug, Clone, Copy)]
pub struct ItemBounds {
    pub index: usize,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl ItemBounds {
    pub fn new(index: usize, position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            index,
            min_x: position.0,
            min_y: position.1,
            max_x: position.0 + size.0,
            max_y: position.1 + size.1,
        }
    }

    /// Half-open on the right edge so adjacent items never both match.
    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y <= self.max_y
    }

    pub fn center_x(&self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }
}

impl RTreeObject for ItemBounds {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for ItemBounds {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

/// R-tree of item boxes along the track.
pub struct TrackIndex {
    tree: RTree<ItemBounds>,
    bounds: Vec<ItemBounds>,
}

impl TrackIndex {
    /// Lay out items of the given sizes left to right, `gap` pixels apart.
    pub fn layout<I>(sizes: I, gap: f32) -> Self
    where
        I: IntoIterator<Item = (f32, f32)>,
    {
        let mut x = 0.0;
        let bounds: Vec<ItemBounds> = sizes
            .into_iter()
            .enumerate()
            .map(|(index, (width, height))| {
                let entry = ItemBounds::new(index, (x, 0.0), (width, height));
                x += width + gap;
                entry
            })
            .collect();

        Self {
            tree: RTree::bulk_load(bounds.clone()),
            bounds,
        }
    }

    /// Item containing the point (track coordinates), if any.
    pub fn query_point(&self, x: f32, y: f32) -> Option<usize> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.index)
            .min()
    }

    /// All items intersecting a horizontal span (track coordinates).
    pub fn query_span(&self, min_x: f32, max_x: f32) -> Vec<usize> {
        let envelope = AABB::from_corners([min_x, f32::MIN], [max_x, f32::MAX]);

        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.index)
            .collect();
        hits.sort_unstable();
        hits
    }

    pub fn bounds(&self, index: usize) -> Option<&ItemBounds> {
        self.bounds.get(index)
    }

    /// Right edge of the last item.
    pub fn extent(&self) -> f32 {
        self.bounds.last().map(|b| b.max_x).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}
