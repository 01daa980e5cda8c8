//! Distribution of decorations along the stem.
//!
//! Nodes are evenly spaced over a progress range and their size follows a taper: it
//! rises from the start of the range to a configurable midpoint, then falls off towards
//! the end of the range, shaped by an easing function.

use std::f32::consts::PI;

use crate::geom::utils::remap;
use crate::geom::Easing;
use crate::math::Point;
use crate::stem::ParametricSample;

/// Size multiplier of the smallest nodes, before easing.
pub const MIN_SIZE_MULTIPLIER: f32 = 0.5;

/// How much room is kept for the flower head at the tip of the stem, in petal sizes.
pub const FLOWER_OVERLAP: f32 = 1.5;

/// Stroke width of the berry outlines.
pub const BERRY_LINE_WIDTH: f32 = 1.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum NodeKind {
    Branch,
    #[cfg_attr(feature = "serialization", serde(alias = "leave"))]
    Leaf,
    Berry,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum Side {
    Left,
    Right,
}

/// A position along the stem and the size multiplier of the nodes attached there.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeSample {
    pub progress: f32,
    pub size_multiplier: f32,
}

/// How nodes are distributed, independently of their kind.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Distribution {
    pub count: u32,
    pub progress_from: f32,
    pub progress_to: f32,
    /// Position of the largest nodes, relative to the progress range.
    pub size_mod_pos: f32,
    pub ease: Easing,
}

/// Size multiplier of a node at `progress`.
///
/// `midpoint` is in absolute progress, within `[progress_from, progress_to]`. The
/// multiplier is `ease(1)` at the midpoint and `ease(MIN_SIZE_MULTIPLIER)` at both ends
/// of the range. An empty range yields `1`.
pub fn size_multiplier(
    progress: f32,
    midpoint: f32,
    progress_from: f32,
    progress_to: f32,
    ease: Easing,
) -> f32 {
    if progress_to - progress_from == 0.0 {
        return 1.0;
    }

    if progress < midpoint {
        ease.ease(remap(
            progress,
            progress_from,
            midpoint,
            MIN_SIZE_MULTIPLIER,
            1.0,
        ))
    } else {
        ease.ease(remap(
            progress,
            midpoint,
            progress_to,
            1.0,
            MIN_SIZE_MULTIPLIER,
        ))
    }
}

impl Distribution {
    /// Computes the progress and size multiplier of every node position, in ascending
    /// progress order.
    ///
    /// - no positions when `count` is zero,
    /// - a single full size position at `progress_from` when `count` is one,
    /// - otherwise `count + 1` evenly spaced positions, the first at `progress_from` and
    ///   the last at `progress_to`.
    pub fn samples(&self) -> Vec<NodeSample> {
        match self.count {
            0 => Vec::new(),
            1 => vec![NodeSample {
                progress: self.progress_from,
                size_multiplier: 1.0,
            }],
            count => {
                let (from, to) = (self.progress_from, self.progress_to);
                let span = to - from;
                let midpoint = from + span * self.size_mod_pos;
                (0..=count)
                    .map(|i| {
                        // Exact endpoints, and no drift when the range is empty.
                        let progress = if i == count {
                            to
                        } else {
                            from + span * (i as f32 / count as f32)
                        };
                        NodeSample {
                            progress,
                            size_multiplier: size_multiplier(
                                progress,
                                midpoint,
                                self.progress_from,
                                self.progress_to,
                                self.ease,
                            ),
                        }
                    })
                    .collect()
            }
        }
    }
}

/// Reduces the end of the progress range so that nodes keep clear of the flower head.
///
/// `petal_size` is relative to the plant height. The result never goes below
/// `progress_from`.
pub fn avoid_flower(progress_from: f32, progress_to: f32, petal_size: f32) -> f32 {
    let bound = progress_to.min(1.0 - petal_size * FLOWER_OVERLAP);
    if bound < progress_from {
        log::warn!(
            "Petals of size {} leave no room for nodes after {}, clamping the node range.",
            petal_size,
            progress_from
        );
        return progress_from;
    }

    bound
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct BranchPlacement {
    pub progress: f32,
    pub size: f32,
    /// Rotation relative to the stem normal, in radians.
    pub angle: f32,
    pub side: Side,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LeafPlacement {
    pub progress: f32,
    pub size: f32,
    pub angle: f32,
    pub side: Side,
    pub thickness: f32,
    pub shape: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct BerryPlacement {
    pub progress: f32,
    /// Radius of the berry.
    pub size: f32,
    pub angle: f32,
    pub side: Side,
    pub line_width: f32,
}

/// One decoration attached to the stem.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum NodePlacement {
    Branch(BranchPlacement),
    Leaf(LeafPlacement),
    Berry(BerryPlacement),
}

impl NodePlacement {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodePlacement::Branch(..) => NodeKind::Branch,
            NodePlacement::Leaf(..) => NodeKind::Leaf,
            NodePlacement::Berry(..) => NodeKind::Berry,
        }
    }

    pub fn progress(&self) -> f32 {
        match self {
            NodePlacement::Branch(b) => b.progress,
            NodePlacement::Leaf(l) => l.progress,
            NodePlacement::Berry(b) => b.progress,
        }
    }

    pub fn size(&self) -> f32 {
        match self {
            NodePlacement::Branch(b) => b.size,
            NodePlacement::Leaf(l) => l.size,
            NodePlacement::Berry(b) => b.size,
        }
    }

    pub fn side(&self) -> Side {
        match self {
            NodePlacement::Branch(b) => b.side,
            NodePlacement::Leaf(l) => l.side,
            NodePlacement::Berry(b) => b.side,
        }
    }

    /// Absolute rotation of the decoration at a stem sample, in radians.
    ///
    /// Branches and berries are rotated by `normal + angle`. Leaves are mirrored: the
    /// right leaf points along `normal + angle` and the left one along
    /// `normal - π - angle`.
    pub fn orientation(&self, sample: &ParametricSample) -> f32 {
        match self {
            NodePlacement::Branch(b) => sample.normal_angle + b.angle,
            NodePlacement::Leaf(l) => match l.side {
                Side::Right => sample.normal_angle + l.angle,
                Side::Left => sample.normal_angle - PI - l.angle,
            },
            NodePlacement::Berry(b) => sample.normal_angle + b.angle,
        }
    }
}

/// Center of a berry, pushed along the stem normal so that its outline touches the stem.
pub fn berry_center(berry: &BerryPlacement, sample: &ParametricSample) -> Point {
    sample.position + sample.normal * (berry.size + berry.line_width * 0.5)
}

/// Parameters shared by every node of a plant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeLayout {
    pub kind: NodeKind,
    pub distribution: Distribution,
    /// Size of a full size node, in surface units.
    pub root_size: f32,
    pub angle: f32,
    /// Leaf thickness relative to the leaf size.
    pub leaf_thickness: f32,
    pub leaf_shape: f32,
}

/// Computes the placements of every node, in ascending progress order.
///
/// Branches and leaves come in left/right pairs sharing their progress and size, the
/// right one first. Berries are single and grow on the left.
pub fn place_nodes(layout: &NodeLayout) -> Vec<NodePlacement> {
    let mut placements = Vec::new();

    for sample in layout.distribution.samples() {
        let progress = sample.progress;
        let size = layout.root_size * sample.size_multiplier;

        match layout.kind {
            NodeKind::Branch => {
                for &side in &[Side::Right, Side::Left] {
                    placements.push(NodePlacement::Branch(BranchPlacement {
                        progress,
                        size,
                        angle: 0.0,
                        side,
                    }));
                }
            }
            NodeKind::Leaf => {
                for &side in &[Side::Right, Side::Left] {
                    placements.push(NodePlacement::Leaf(LeafPlacement {
                        progress,
                        size,
                        angle: layout.angle,
                        side,
                        thickness: size * layout.leaf_thickness,
                        shape: layout.leaf_shape,
                    }));
                }
            }
            NodeKind::Berry => {
                placements.push(NodePlacement::Berry(BerryPlacement {
                    progress,
                    size,
                    angle: 0.0,
                    side: Side::Left,
                    line_width: BERRY_LINE_WIDTH,
                }));
            }
        }

        log::trace!("{:?} nodes at {} size {}", layout.kind, progress, size);
    }

    placements
}

#[cfg(test)]
fn distribution(count: u32, from: f32, to: f32) -> Distribution {
    Distribution {
        count,
        progress_from: from,
        progress_to: to,
        size_mod_pos: 0.5,
        ease: Easing::QuadIn,
    }
}

#[cfg(test)]
fn layout(kind: NodeKind, distribution: Distribution) -> NodeLayout {
    NodeLayout {
        kind,
        distribution,
        root_size: 20.0,
        angle: 0.3,
        leaf_thickness: 0.41,
        leaf_shape: 0.5,
    }
}

#[test]
fn no_nodes() {
    assert!(distribution(0, 0.0, 1.0).samples().is_empty());
    assert!(place_nodes(&layout(NodeKind::Leaf, distribution(0, 0.0, 1.0))).is_empty());
}

#[test]
fn single_node_at_progress_from() {
    let samples = distribution(1, 0.25, 0.75).samples();
    assert_eq!(
        samples,
        vec![NodeSample {
            progress: 0.25,
            size_multiplier: 1.0
        }]
    );
}

#[test]
fn evenly_spaced_samples() {
    for count in 2..20 {
        let samples = distribution(count, 0.1, 0.8).samples();
        assert_eq!(samples.len(), count as usize + 1);
        assert_eq!(samples[0].progress, 0.1);
        assert_eq!(samples[count as usize].progress, 0.8);

        let step = 0.7 / count as f32;
        for pair in samples.windows(2) {
            assert!((pair[1].progress - pair[0].progress - step).abs() < 1e-5);
        }
    }
}

#[test]
fn taper_peaks_at_midpoint() {
    for &ease in &Easing::ALL {
        let samples = Distribution {
            count: 4,
            progress_from: 0.2,
            progress_to: 0.6,
            size_mod_pos: 0.5,
            ease,
        }
        .samples();

        // The third sample sits exactly on the midpoint.
        assert!((samples[2].size_multiplier - ease.ease(1.0f32)).abs() < 1e-5, "{:?}", ease);
        let at_min = ease.ease(MIN_SIZE_MULTIPLIER);
        assert!((samples[0].size_multiplier - at_min).abs() < 1e-5, "{:?}", ease);
        assert!((samples[4].size_multiplier - at_min).abs() < 1e-5, "{:?}", ease);
    }
}

#[test]
fn multipliers_are_bounded() {
    for &ease in Easing::ALL.iter().filter(|e| e.is_monotonic()) {
        let lower = ease.ease(MIN_SIZE_MULTIPLIER).min(1.0);
        for &mid in &[0.0, 0.3, 0.5, 1.0] {
            let samples = Distribution {
                count: 10,
                progress_from: 0.0,
                progress_to: 1.0,
                size_mod_pos: mid,
                ease,
            }
            .samples();
            for s in &samples {
                assert!(s.size_multiplier >= lower - 1e-5, "{:?} {:?}", ease, s);
                assert!(s.size_multiplier <= 1.0 + 1e-5, "{:?} {:?}", ease, s);
            }
        }
    }
}

#[test]
fn empty_range_is_full_size() {
    let samples = distribution(5, 0.4, 0.4).samples();
    assert_eq!(samples.len(), 6);
    for s in &samples {
        assert_eq!(s.progress, 0.4);
        assert_eq!(s.size_multiplier, 1.0);
    }
}

#[test]
fn flower_avoidance() {
    assert!((avoid_flower(0.0, 1.0, 0.16) - 0.76).abs() < 1e-6);
    // Already clear of the flower.
    assert_eq!(avoid_flower(0.0, 0.5, 0.16), 0.5);
    // Huge petals collapse the range onto its start.
    assert_eq!(avoid_flower(0.3, 1.0, 0.6), 0.3);
}

#[test]
fn mirrored_leaves() {
    let sample = ParametricSample {
        progress: 0.5,
        position: crate::math::point(0.0, 0.0),
        normal: crate::math::vector(0.0, 1.0),
        normal_angle: PI / 2.0,
    };

    let placements = place_nodes(&layout(NodeKind::Leaf, distribution(3, 0.0, 1.0)));
    assert_eq!(placements.len(), 8);

    for pair in placements.chunks(2) {
        let (right, left) = match (pair[0], pair[1]) {
            (NodePlacement::Leaf(r), NodePlacement::Leaf(l)) => (r, l),
            other => panic!("{:?}", other),
        };
        assert_eq!(right.side, Side::Right);
        assert_eq!(left.side, Side::Left);
        assert_eq!(right.progress, left.progress);
        assert_eq!(right.size, left.size);
        assert_eq!(right.thickness, left.thickness);
        assert!((right.thickness - right.size * 0.41).abs() < 1e-6);

        let sum = pair[0].orientation(&sample) + pair[1].orientation(&sample);
        assert!((sum - (2.0 * sample.normal_angle - PI)).abs() < 1e-5);
    }
}

#[test]
fn mirrored_branches() {
    let placements = place_nodes(&layout(NodeKind::Branch, distribution(2, 0.0, 1.0)));
    assert_eq!(placements.len(), 6);
    for pair in placements.chunks(2) {
        assert_eq!(pair[0].kind(), NodeKind::Branch);
        assert_eq!(pair[0].side(), Side::Right);
        assert_eq!(pair[1].side(), Side::Left);
        assert_eq!(pair[0].progress(), pair[1].progress());
        assert_eq!(pair[0].size(), pair[1].size());
    }

    // Full size at the midpoint.
    assert_eq!(placements[2].size(), 20.0);
}

#[test]
fn berries_are_single_and_offset() {
    let placements = place_nodes(&layout(NodeKind::Berry, distribution(4, 0.0, 1.0)));
    assert_eq!(placements.len(), 5);
    assert!(placements.iter().all(|p| p.side() == Side::Left));

    let berry = match placements[0] {
        NodePlacement::Berry(b) => b,
        other => panic!("{:?}", other),
    };
    let sample = ParametricSample {
        progress: 0.0,
        position: crate::math::point(10.0, 10.0),
        normal: crate::math::vector(1.0, 0.0),
        normal_angle: 0.0,
    };
    let center = berry_center(&berry, &sample);
    assert_eq!(center.y, 10.0);
    assert!((center.x - (10.0 + berry.size + 0.5)).abs() < 1e-5);
}

#[test]
fn berries_follow_the_normal() {
    let berry = BerryPlacement {
        progress: 0.5,
        size: 4.0,
        angle: 0.0,
        side: Side::Left,
        line_width: 1.0,
    };
    let sample = ParametricSample {
        progress: 0.5,
        position: crate::math::point(0.0, 0.0),
        normal: crate::math::vector(0.6, -0.8),
        normal_angle: (-0.8f32).atan2(0.6),
    };

    for &side in &[Side::Left, Side::Right] {
        let center = berry_center(&BerryPlacement { side, ..berry }, &sample);
        // Offset by size + line_width / 2 = 4.5 along the normal.
        assert!((center.x - 2.7).abs() < 1e-5, "{:?}", center);
        assert!((center.y + 3.6).abs() < 1e-5, "{:?}", center);
    }
}

#[test]
fn samples_stay_within_the_range() {
    let ranges = [(0.4, 0.4), (0.1, 0.7), (0.0, 1.0), (0.3, 0.30001), (0.76, 0.76)];
    for &(from, to) in &ranges {
        for count in 2..30 {
            let samples = distribution(count, from, to).samples();
            assert_eq!(samples[0].progress, from);
            assert_eq!(samples[count as usize].progress, to);
            for s in &samples {
                assert!(s.progress >= from && s.progress <= to, "{} {} {:?}", from, to, s);
            }
        }
    }
}
