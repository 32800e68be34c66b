//! Topology normalization of collected features.
//!
//! Features that overlap or touch are grouped into one [`Island`]. Grouping is
//! decided on the raw feature coordinates with the exact shape distance, and
//! every island keeps its member rings untouched so that clearances are
//! measured on the input geometry rather than on the snapped overlay output.

use crate::error::ScanError;
use crate::polygon::{region_distance, union_all, Region};
use crate::source::Feature;

/// A connected group of copper features.
#[derive(Debug, Clone, PartialEq)]
pub struct Island {
    members: Vec<Region<f64>>,
    outline: Vec<Region<f64>>,
}

impl Island {
    /// Builds an island from features already known to be connected.
    ///
    /// # Errors
    ///
    /// [`ScanError::Geometry`] when the members cannot be merged into an outline.
    pub fn from_members(members: Vec<Region<f64>>) -> Result<Self, ScanError> {
        let outline = if members.len() > 1 {
            union_all(&members)?
        } else {
            members.clone()
        };
        Ok(Self { members, outline })
    }

    /// The raw features that make up this island.
    #[inline]
    pub fn members(&self) -> &[Region<f64>] {
        &self.members
    }

    /// Merged boundary of the island.
    ///
    /// Produced by the overlay, so its coordinates are snapped and only fit
    /// for display and area estimates.
    #[inline]
    pub fn outline(&self) -> &[Region<f64>] {
        &self.outline
    }

    pub fn area(&self) -> f64 {
        self.outline.iter().map(Region::area).sum()
    }

    /// Nearest-point distance to another island over the raw member rings.
    pub fn distance_to(&self, other: &Island) -> f64 {
        let mut best = f64::INFINITY;
        for a in &self.members {
            for b in &other.members {
                let d = region_distance(a, b);
                if d < best {
                    best = d;
                    if best <= 0.0 {
                        return best;
                    }
                }
            }
        }
        best
    }
}

impl From<Region<f64>> for Island {
    fn from(region: Region<f64>) -> Self {
        Self {
            members: vec![region.clone()],
            outline: vec![region],
        }
    }
}

/// Disjoint copper islands ready for the pairwise scan.
///
/// Produced once per run by [`normalize`] and immutable afterwards. No two
/// islands overlap or share an edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedSet {
    islands: Vec<Island>,
}

impl NormalizedSet {
    #[inline]
    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.islands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }

    /// Number of unordered pairs the scan will visit.
    #[inline]
    pub fn pair_count(&self) -> usize {
        super::scanner::pair_count(self.islands.len())
    }

    pub fn into_islands(self) -> Vec<Island> {
        self.islands
    }
}

impl From<Vec<Region<f64>>> for NormalizedSet {
    /// Wraps regions that are already known to be disjoint, one island each.
    fn from(regions: Vec<Region<f64>>) -> Self {
        Self {
            islands: regions.into_iter().map(Island::from).collect(),
        }
    }
}

/// Disjoint-set forest over feature indices.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Root of the set containing `x`, compressing the path on the way.
    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
    }
}

/// Merges overlapping and touching features into disjoint islands.
///
/// Two features belong to the same island when their shapes share at least
/// one point, transitively. Features with no area are dropped. Islands are
/// ordered by their first feature. No features gives an empty set.
///
/// # Errors
///
/// [`ScanError::Geometry`] when a feature has a non-finite coordinate or an
/// island outline cannot be built.
pub fn normalize(features: &[Feature]) -> Result<NormalizedSet, ScanError> {
    if let Some(bad) = features.iter().find(|f| !f.region.is_finite()) {
        return Err(ScanError::Geometry(format!(
            "feature from aperture {} has a non-finite coordinate",
            bad.aperture
        )));
    }

    let regions: Vec<&Region<f64>> = features
        .iter()
        .map(|f| &f.region)
        .filter(|r| r.area() > 0.0)
        .collect();
    let boxes: Vec<_> = regions.iter().map(|r| r.bounding_box()).collect();

    let n = regions.len();
    let mut forest = UnionFind::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            let touching_boxes = match (boxes[i], boxes[j]) {
                (Some(a), Some(b)) => a.intersects(b),
                _ => false,
            };
            if touching_boxes && region_distance(regions[i], regions[j]) <= 0.0 {
                forest.union(i, j);
            }
        }
    }

    let mut slot_of_root = vec![usize::MAX; n];
    let mut groups: Vec<Vec<Region<f64>>> = Vec::new();
    for (i, region) in regions.iter().enumerate() {
        let root = forest.find(i);
        if slot_of_root[root] == usize::MAX {
            slot_of_root[root] = groups.len();
            groups.push(Vec::new());
        }
        groups[slot_of_root[root]].push((*region).clone());
    }

    let islands = groups
        .into_iter()
        .map(Island::from_members)
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "normalized {} features into {} islands",
        features.len(),
        islands.len()
    );

    Ok(NormalizedSet { islands })
}
