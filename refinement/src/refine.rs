//! I provide the implementation of the color-refinement algorithm
//! (iterative neighbor-signature partition refinement).

use std::collections::BTreeMap;

use log::debug;
use tinct_api::graph::Graph;

use crate::coloring::Coloring;
use crate::RefinementError;

/// Compute the coarsest stable coloring of `g`
/// reachable from the uniform coloring.
///
/// The result is canonical up to color relabeling:
/// isomorphic graphs, refined independently,
/// reach structurally identical partitions.
/// Terminates in at most |V| rounds.
pub fn refine<G: Graph>(g: &G) -> Result<Coloring<G::Vertex>, RefinementError<G::Error>> {
    let snap = Snapshot::new(g)?;
    let colors = run(&snap, vec![0; snap.verts.len()]);
    Ok(snap.into_coloring(colors))
}

/// Compute the coarsest stable coloring of `g`
/// reachable from the initial coloring `init`.
///
/// Vertices of `g` missing from `init` are treated as sharing
/// one spare color, distinct from every color used by `init`.
/// Color ids of the result are re-issued from signature content,
/// so they will generally differ from those of `init`
/// even where no class was split.
pub fn refine_from<G: Graph>(
    g: &G,
    init: &Coloring<G::Vertex>,
) -> Result<Coloring<G::Vertex>, RefinementError<G::Error>> {
    let snap = Snapshot::new(g)?;
    let colors = run(&snap, snap.import(init));
    Ok(snap.into_coloring(colors))
}

/// Check the stability invariant of `coloring` on `g`:
/// any two vertices with the same color must have identical multisets
/// of neighbor colors (in- and out-neighbors separately, if `g` is
/// directed).
pub fn is_stable<G: Graph>(
    g: &G,
    coloring: &Coloring<G::Vertex>,
) -> Result<bool, RefinementError<G::Error>> {
    let snap = Snapshot::new(g)?;
    let colors = snap.import(coloring);
    let groups = signatures(&snap, &colors);
    let current: std::collections::BTreeSet<usize> = colors.iter().copied().collect();
    Ok(groups.len() == current.len())
}

/// An indexed adjacency view of a graph,
/// materialized once so that the refinement rounds run infallibly.
struct Snapshot<V> {
    verts: Vec<V>, // sorted
    inn: Vec<Vec<usize>>,
    out: Vec<Vec<usize>>,
}

impl<V: Clone + Ord> Snapshot<V> {
    fn new<G: Graph<Vertex = V>>(g: &G) -> Result<Self, RefinementError<G::Error>> {
        let mut verts: Vec<V> = g.vertices().collect::<Result<_, _>>()?;
        verts.sort_unstable();
        verts.dedup();
        let index = |v: &V| verts.binary_search(v).expect("endpoint is a vertex");
        let mut inn = vec![Vec::new(); verts.len()];
        let mut out = vec![Vec::new(); verts.len()];
        let directed = g.is_directed();
        for e in g.edges() {
            let e = e?;
            let s = index(&g.edge_source(&e)?);
            let t = index(&g.edge_target(&e)?);
            out[s].push(t);
            inn[t].push(s);
            if !directed && s != t {
                out[t].push(s);
                inn[s].push(t);
            }
        }
        Ok(Snapshot { verts, inn, out })
    }

    /// Project a vertex-keyed coloring onto the index space,
    /// giving uncolored vertices one spare color.
    fn import(&self, coloring: &Coloring<V>) -> Vec<usize> {
        let spare = coloring.iter().map(|(_, c)| c + 1).max().unwrap_or(0);
        self.verts
            .iter()
            .map(|v| coloring.color_of(v).unwrap_or(spare))
            .collect()
    }

    fn into_coloring(self, colors: Vec<usize>) -> Coloring<V> {
        self.verts.into_iter().zip(colors).collect()
    }
}

/// The signature of a vertex under the current coloring:
/// its own color, plus the sorted multisets of its in- and
/// out-neighbors' colors.
type Signature = (usize, Vec<usize>, Vec<usize>);

fn signatures<V: Clone + Ord>(
    snap: &Snapshot<V>,
    colors: &[usize],
) -> BTreeMap<Signature, Vec<usize>> {
    let mut groups: BTreeMap<Signature, Vec<usize>> = BTreeMap::new();
    for v in 0..snap.verts.len() {
        let mut ins: Vec<usize> = snap.inn[v].iter().map(|&u| colors[u]).collect();
        let mut outs: Vec<usize> = snap.out[v].iter().map(|&u| colors[u]).collect();
        ins.sort_unstable();
        outs.sort_unstable();
        groups.entry((colors[v], ins, outs)).or_default().push(v);
    }
    groups
}

fn run<V: Clone + Ord>(snap: &Snapshot<V>, mut colors: Vec<usize>) -> Vec<usize> {
    let n = snap.verts.len();
    let mut class_count = colors
        .iter()
        .copied()
        .collect::<std::collections::BTreeSet<usize>>()
        .len();
    let mut round = 0;
    while class_count < n {
        let groups = signatures(snap, &colors);
        // new ids are issued in ascending signature order,
        // so they depend on signature content only
        for (new_color, members) in groups.values().enumerate() {
            for &v in members {
                colors[v] = new_color;
            }
        }
        round += 1;
        debug!("refinement round {}: {} classes", round, groups.len());
        if groups.len() == class_count {
            break;
        }
        class_count = groups.len();
    }
    colors
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_setup;
    use test_case::test_case;
    use tinct_api::graph::EdgeListGraph;

    fn colors_of<V: Clone + Ord>(c: &Coloring<V>, vs: &[V]) -> Vec<usize> {
        vs.iter().map(|v| c.color_of(v).unwrap()).collect()
    }

    #[test]
    fn tree_with_symmetric_pairs() {
        test_setup();
        // ._._|_._. with a two-leaf branch below the fork
        let g = EdgeListGraph::undirected(
            1..=8,
            vec![(1, 2), (2, 3), (3, 4), (4, 5), (3, 6), (6, 7), (6, 8)],
        )
        .unwrap();
        let c = refine(&g).unwrap();
        assert_eq!(c.color_of(&1), c.color_of(&5));
        assert_eq!(c.color_of(&2), c.color_of(&4));
        assert_eq!(c.color_of(&7), c.color_of(&8));
        assert_ne!(c.color_of(&1), c.color_of(&7));
        assert_ne!(c.color_of(&1), c.color_of(&2));
        assert_ne!(c.color_of(&2), c.color_of(&3));
        assert_ne!(c.color_of(&3), c.color_of(&6));
        assert!(is_stable(&g, &c).unwrap());
    }

    #[test]
    fn regular_graph_stays_uniform() {
        test_setup();
        // disjoint union of two triangles: 2-regular, never splits
        let g = EdgeListGraph::undirected(
            1..=6,
            vec![(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4)],
        )
        .unwrap();
        let c = refine(&g).unwrap();
        assert_eq!(c.class_count(), 1);
        for v in 2..=6 {
            assert_eq!(c.color_of(&1), c.color_of(&v));
        }
        assert!(!c.is_discrete());
        assert!(is_stable(&g, &c).unwrap());
    }

    #[test]
    fn path_five_vertices() {
        test_setup();
        let g = EdgeListGraph::undirected(1..=5, vec![(1, 2), (2, 3), (3, 4), (4, 5)]).unwrap();
        let c = refine(&g).unwrap();
        assert_eq!(c.class_count(), 3);
        let classes = c.classes();
        let mut sizes: Vec<Vec<u32>> = classes.into_values().collect();
        sizes.sort();
        assert_eq!(sizes, vec![vec![1, 5], vec![2, 4], vec![3]]);
    }

    #[test]
    fn near_rigid_graph() {
        test_setup();
        // 11 vertices; only 9 and 10 end up sharing a color
        let g = EdgeListGraph::undirected(
            1..=11,
            vec![
                (1, 2),
                (2, 3),
                (2, 4),
                (2, 6),
                (2, 11),
                (3, 4),
                (4, 6),
                (5, 6),
                (6, 7),
                (7, 8),
                (8, 9),
                (8, 10),
                (8, 11),
                (9, 10),
                (9, 11),
                (10, 11),
            ],
        )
        .unwrap();
        let c = refine(&g).unwrap();
        for i in 1..11u32 {
            for j in (i + 1)..=11 {
                if (i, j) == (9, 10) {
                    assert_eq!(c.color_of(&i), c.color_of(&j));
                } else {
                    assert_ne!(c.color_of(&i), c.color_of(&j), "{} vs {}", i, j);
                }
            }
        }
        assert_eq!(c.class_count(), 10);
    }

    #[test]
    fn directed_edges_split_by_orientation() {
        test_setup();
        // a->b->c: all three vertices differ (source, middle, sink)
        let g = EdgeListGraph::directed(1..=3, vec![(1, 2), (2, 3)]).unwrap();
        let c = refine(&g).unwrap();
        assert!(c.is_discrete());
        // undirected view of the same edges: ends match
        let g = EdgeListGraph::undirected(1..=3, vec![(1, 2), (2, 3)]).unwrap();
        let c = refine(&g).unwrap();
        assert_eq!(c.color_of(&1), c.color_of(&3));
        assert_eq!(c.class_count(), 2);
    }

    #[test]
    fn directed_cycle_is_regular() {
        test_setup();
        let g = EdgeListGraph::directed(1..=4, vec![(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
        let c = refine(&g).unwrap();
        assert_eq!(c.class_count(), 1);
    }

    #[test]
    fn refining_a_stable_coloring_does_not_split() {
        test_setup();
        let g = EdgeListGraph::undirected(1..=5, vec![(1, 2), (2, 3), (3, 4), (4, 5)]).unwrap();
        let stable = refine(&g).unwrap();
        let again = refine_from(&g, &stable).unwrap();
        assert_eq!(again.class_count(), stable.class_count());
        assert_eq!(again.classes().into_values().collect::<Vec<_>>().len(), 3);
        assert!(is_stable(&g, &again).unwrap());
    }

    #[test]
    fn initial_coloring_is_refined_not_coarsened() {
        test_setup();
        // a 4-cycle is regular, but seeding one vertex apart
        // forces a full split
        let g = EdgeListGraph::undirected(1..=4, vec![(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
        assert_eq!(refine(&g).unwrap().class_count(), 1);
        let seed: Coloring<u32> = vec![(1, 1), (2, 0), (3, 0), (4, 0)].into_iter().collect();
        let c = refine_from(&g, &seed).unwrap();
        // 1 alone, its two neighbors {2, 4} together, 3 alone
        assert_eq!(c.class_count(), 3);
        assert_eq!(c.color_of(&2), c.color_of(&4));
        assert_ne!(c.color_of(&1), c.color_of(&3));
    }

    #[test_case(5, &[(1, 2), (2, 3), (3, 4), (4, 5)] => 3; "path")]
    #[test_case(6, &[(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4)] => 1; "two triangles")]
    #[test_case(5, &[] => 1; "edgeless")]
    #[test_case(5, &[(1, 2), (3, 4)] => 2; "matching plus isolated vertex")]
    #[test_case(4, &[(1, 2), (1, 3), (1, 4)] => 2; "star")]
    fn stable_class_count(n: u32, edges: &[(u32, u32)]) -> usize {
        test_setup();
        let g = EdgeListGraph::undirected(1..=n, edges.to_vec()).unwrap();
        refine(&g).unwrap().class_count()
    }

    #[test]
    fn empty_graph() {
        test_setup();
        let g = EdgeListGraph::<u32>::undirected(std::iter::empty(), std::iter::empty()).unwrap();
        let c = refine(&g).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn isomorphic_labelings_reach_identical_partitions() {
        test_setup();
        // the same path, labeled two ways; class sizes must agree
        let g1 = EdgeListGraph::undirected(1..=5, vec![(1, 2), (2, 3), (3, 4), (4, 5)]).unwrap();
        let g2 = EdgeListGraph::undirected(1..=5, vec![(3, 1), (1, 5), (5, 2), (2, 4)]).unwrap();
        let c1 = refine(&g1).unwrap();
        let c2 = refine(&g2).unwrap();
        let sizes = |c: &Coloring<u32>| {
            let mut s: Vec<usize> = c.classes().values().map(Vec::len).collect();
            s.sort();
            s
        };
        assert_eq!(sizes(&c1), sizes(&c2));
        assert_eq!(c1.class_count(), c2.class_count());
    }
}
