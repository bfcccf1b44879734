//! WebRing - member cycle backed by petgraph.
//!
//! Members are stored as graph nodes in list order, with one directed edge
//! from each member to the next. `next` follows the outgoing edge and
//! `previous` the incoming one, so both wrap around at the ends.

use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use rand::Rng;

use super::site::MemberSite;

/// The webring.
pub struct WebRing {
    graph: StableGraph<MemberSite, ()>,
}

impl WebRing {
    /// Build a ring from members in display order.
    ///
    /// A single member links to itself; an empty ring has no links.
    pub fn new(sites: Vec<MemberSite>) -> Self {
        let count = sites.len();
        let mut graph = StableGraph::with_capacity(count, count);
        let indices: Vec<NodeIndex> = sites.into_iter().map(|site| graph.add_node(site)).collect();

        for (i, &from) in indices.iter().enumerate() {
            let to = indices[(i + 1) % count];
            graph.add_edge(from, to, ());
        }

        Self { graph }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Member at `position`.
    pub fn get(&self, position: usize) -> Option<&MemberSite> {
        self.graph.node_weight(NodeIndex::new(position))
    }

    /// Position of the member whose website matches `url`.
    pub fn position_of(&self, url: &str) -> Option<usize> {
        self.graph
            .node_indices()
            .find(|&index| self.graph[index].matches_url(url))
            .map(|index| index.index())
    }

    /// Position of the member after `position`, wrapping to the first.
    pub fn next(&self, position: usize) -> Option<usize> {
        self.neighbor(position, Direction::Outgoing)
    }

    /// Position of the member before `position`, wrapping to the last.
    pub fn previous(&self, position: usize) -> Option<usize> {
        self.neighbor(position, Direction::Incoming)
    }

    /// Uniformly chosen member position.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some(rng.gen_range(0..self.len()))
    }

    fn neighbor(&self, position: usize, direction: Direction) -> Option<usize> {
        let index = NodeIndex::new(position);
        if !self.graph.contains_node(index) {
            return None;
        }
        self.graph
            .neighbors_directed(index, direction)
            .next()
            .map(|neighbor| neighbor.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ring(names: &[&str]) -> WebRing {
        WebRing::new(
            names
                .iter()
                .map(|name| MemberSite {
                    name: name.to_string(),
                    year: None,
                    website: format!("https://{name}.dev"),
                    internships: vec![],
                })
                .collect(),
        )
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let ring = ring(&["ada", "bob", "cy"]);
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.next(0), Some(1));
        assert_eq!(ring.next(2), Some(0));
        assert_eq!(ring.previous(0), Some(2));
        assert_eq!(ring.previous(1), Some(0));
    }

    #[test]
    fn test_single_member_links_to_itself() {
        let ring = ring(&["solo"]);
        assert_eq!(ring.next(0), Some(0));
        assert_eq!(ring.previous(0), Some(0));
    }

    #[test]
    fn test_empty_ring() {
        let ring = ring(&[]);
        assert!(ring.is_empty());
        assert_eq!(ring.next(0), None);
        assert_eq!(ring.previous(0), None);
        assert_eq!(ring.random(&mut StdRng::seed_from_u64(1)), None);
        assert!(ring.get(0).is_none());
    }

    #[test]
    fn test_out_of_range_position() {
        let ring = ring(&["ada", "bob"]);
        assert_eq!(ring.next(5), None);
    }

    #[test]
    fn test_position_of() {
        let ring = ring(&["ada", "bob", "cy"]);
        assert_eq!(ring.position_of("http://bob.dev/"), Some(1));
        assert_eq!(ring.position_of("https://nobody.dev"), None);
        assert_eq!(ring.get(2).map(|s| s.name.as_str()), Some("cy"));
    }

    #[test]
    fn test_random_in_range() {
        let ring = ring(&["ada", "bob", "cy", "dee"]);
        let mut rng = StdRng::seed_from_u64(8);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let position = ring.random(&mut rng).unwrap();
            seen[position] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
