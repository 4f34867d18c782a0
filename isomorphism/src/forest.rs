//! I provide canonical matching of two forests:
//! an explicit vertex pairing built from rooted canonical codes,
//! so that the produced mapping preserves edges by construction
//! (raw class-order pairing does not, when a color class spans
//! several components).

use log::trace;

use crate::union::Side;

/// Build an edge-preserving vertex pairing between two forests,
/// as index pairs into the two sides' vertex orderings.
///
/// # Precondition
/// Both sides must be forests with equal stable colorings
/// (hence isomorphic); this is established by the decision procedure
/// before this function is called.
pub(crate) fn match_forests<V1, V2>(
    s1: &Side<V1>,
    s2: &Side<V2>,
    directed: bool,
) -> Vec<(usize, usize)>
where
    V1: Clone + Ord,
    V2: Clone + Ord,
{
    let f1 = ForestView::new(s1.verts.len(), &s1.ends, directed);
    let f2 = ForestView::new(s2.verts.len(), &s2.ends, directed);
    let mut comps1 = f1.canonical_components();
    let mut comps2 = f2.canonical_components();
    comps1.sort();
    comps2.sort();
    debug_assert_eq!(comps1.len(), comps2.len());
    let mut pairs = Vec::with_capacity(s1.verts.len());
    for ((code1, r1), (code2, r2)) in comps1.iter().zip(&comps2) {
        trace!("matching components rooted at {} / {}", r1, r2);
        debug_assert_eq!(code1, code2);
        pair_rooted(&f1, *r1, &f2, *r2, &mut pairs);
    }
    pairs
}

/// Undirected-adjacency view of one side,
/// with each neighbor carrying the orientation of the connecting edge
/// (`>` away from the vertex, `<` towards it, `-` undirected).
struct ForestView {
    neigh: Vec<Vec<(usize, char)>>,
}

impl ForestView {
    fn new(n: usize, ends: &[(usize, usize)], directed: bool) -> Self {
        let mut neigh = vec![Vec::new(); n];
        for &(s, t) in ends {
            if directed {
                neigh[s].push((t, '>'));
                neigh[t].push((s, '<'));
            } else {
                neigh[s].push((t, '-'));
                if t != s {
                    neigh[t].push((s, '-'));
                }
            }
        }
        ForestView { neigh }
    }

    /// One `(code, root)` entry per connected component,
    /// rooted at a canonical center.
    fn canonical_components(&self) -> Vec<(String, usize)> {
        let n = self.neigh.len();
        let mut seen = vec![false; n];
        let mut comps = Vec::new();
        for start in 0..n {
            if seen[start] {
                continue;
            }
            let mut comp = vec![start];
            seen[start] = true;
            let mut i = 0;
            while i < comp.len() {
                for &(u, _) in &self.neigh[comp[i]] {
                    if !seen[u] {
                        seen[u] = true;
                        comp.push(u);
                    }
                }
                i += 1;
            }
            let root = self.center(&comp);
            comps.push((self.code(root, None), root));
        }
        comps
    }

    /// The canonical center of a tree component:
    /// peel leaves until one or two vertices remain;
    /// of two, keep the one with the smaller rooted code.
    fn center(&self, comp: &[usize]) -> usize {
        let mut degree: std::collections::HashMap<usize, usize> = comp
            .iter()
            .map(|&v| (v, self.neigh[v].len()))
            .collect();
        let mut remaining: Vec<usize> = comp.to_vec();
        while remaining.len() > 2 {
            let leaves: Vec<usize> = remaining
                .iter()
                .copied()
                .filter(|v| degree[v] <= 1)
                .collect();
            remaining.retain(|v| degree[v] > 1);
            for v in leaves {
                for &(u, _) in &self.neigh[v] {
                    if let Some(d) = degree.get_mut(&u) {
                        *d -= 1;
                    }
                }
                degree.remove(&v);
            }
        }
        match remaining[..] {
            [c] => c,
            [a, b] => {
                if self.code(a, None) <= self.code(b, None) {
                    a
                } else {
                    b
                }
            }
            _ => unreachable!("a tree component has one or two centers"),
        }
    }

    /// Canonical rooted code: sorted, direction-tagged child codes
    /// wrapped in parentheses.
    fn code(&self, v: usize, parent: Option<usize>) -> String {
        let mut subs: Vec<String> = self
            .neigh[v]
            .iter()
            .filter(|(u, _)| Some(*u) != parent)
            .map(|&(u, d)| {
                let mut s = String::new();
                s.push(d);
                s.push_str(&self.code(u, Some(v)));
                s
            })
            .collect();
        subs.sort_unstable();
        format!("({})", subs.concat())
    }
}

/// Pair two rooted trees with equal codes, top-down:
/// children with equal direction-tagged codes are zipped in sorted
/// code order.
fn pair_rooted(f1: &ForestView, r1: usize, f2: &ForestView, r2: usize, out: &mut Vec<(usize, usize)>) {
    let mut stack = vec![(r1, None::<usize>, r2, None::<usize>)];
    while let Some((v1, p1, v2, p2)) = stack.pop() {
        out.push((v1, v2));
        let mut kids1 = tagged_children(f1, v1, p1);
        let mut kids2 = tagged_children(f2, v2, p2);
        kids1.sort_unstable();
        kids2.sort_unstable();
        debug_assert_eq!(kids1.len(), kids2.len());
        for ((code1, u1), (code2, u2)) in kids1.into_iter().zip(kids2) {
            debug_assert_eq!(code1, code2);
            stack.push((u1, Some(v1), u2, Some(v2)));
        }
    }
}

fn tagged_children(f: &ForestView, v: usize, parent: Option<usize>) -> Vec<(String, usize)> {
    f.neigh[v]
        .iter()
        .filter(|(u, _)| Some(*u) != parent)
        .map(|&(u, d)| {
            let mut s = String::new();
            s.push(d);
            s.push_str(&f.code(u, Some(v)));
            (s, u)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn view(n: usize, ends: &[(usize, usize)], directed: bool) -> ForestView {
        ForestView::new(n, ends, directed)
    }

    #[test]
    fn path_center_and_code() {
        // 0-1-2-3-4
        let f = view(5, &[(0, 1), (1, 2), (2, 3), (3, 4)], false);
        let comps = f.canonical_components();
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].1, 2);
        assert_eq!(comps[0].0, "(-(-())-(-()))");
    }

    #[test]
    fn codes_are_labeling_invariant() {
        // the same 5-path under two labelings
        let f1 = view(5, &[(0, 1), (1, 2), (2, 3), (3, 4)], false);
        let f2 = view(5, &[(2, 0), (0, 4), (4, 1), (1, 3)], false);
        assert_eq!(f1.canonical_components()[0].0, f2.canonical_components()[0].0);
    }

    #[test]
    fn direction_tags_distinguish_orientations() {
        // 0->1->2 vs 0->1<-2
        let f1 = view(3, &[(0, 1), (1, 2)], true);
        let f2 = view(3, &[(0, 1), (2, 1)], true);
        assert_ne!(f1.canonical_components()[0].0, f2.canonical_components()[0].0);
    }

    #[test]
    fn matching_covers_all_vertices_once() {
        let s: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 3), (3, 4)];
        let f = view(5, s, false);
        let comps = f.canonical_components();
        let mut pairs = Vec::new();
        pair_rooted(&f, comps[0].1, &f, comps[0].1, &mut pairs);
        let mut firsts: Vec<usize> = pairs.iter().map(|p| p.0).collect();
        firsts.sort_unstable();
        assert_eq!(firsts, vec![0, 1, 2, 3, 4]);
    }
}
