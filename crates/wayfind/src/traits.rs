use std::convert::Infallible;
use std::hash::Hash;

/// Minimal search interface: neighbor enumeration over an implicit graph.
pub trait Pather {
    /// Location in the caller's graph. Only equality and hashing are used.
    type Node: Eq + Hash + Clone;
    /// Failure raised by the caller's graph; aborts the current search.
    type Error;

    /// Append the neighbors of `node` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, node: &Self::Node, buf: &mut Vec<Self::Node>) -> Result<(), Self::Error>;
}

/// Full A* pather: heuristic plus the per-edge cost hook.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    /// Should be non-negative; it must never overestimate for the returned
    /// path to be optimal.
    fn estimate(&self, from: &Self::Node, to: &Self::Node) -> Result<f32, Self::Error>;

    /// Cost of stepping from `from` to its neighbor `to`. Must be >= 0.
    ///
    /// Returning `0.0` makes every node inherit its predecessor's cost
    /// unchanged, so ordering is driven by the heuristic alone. Returning
    /// `1.0` gives unit-cost edges.
    fn cost(&self, from: &Self::Node, to: &Self::Node) -> Result<f32, Self::Error>;
}

impl<P: Pather + ?Sized> Pather for &P {
    type Node = P::Node;
    type Error = P::Error;

    fn neighbors(&self, node: &Self::Node, buf: &mut Vec<Self::Node>) -> Result<(), Self::Error> {
        (**self).neighbors(node, buf)
    }
}

impl<P: AstarPather + ?Sized> AstarPather for &P {
    fn estimate(&self, from: &Self::Node, to: &Self::Node) -> Result<f32, Self::Error> {
        (**self).estimate(from, to)
    }

    fn cost(&self, from: &Self::Node, to: &Self::Node) -> Result<f32, Self::Error> {
        (**self).cost(from, to)
    }
}

/// Infallible pather assembled from closures.
///
/// ```
/// use wayfind::{FnPather, PathFinder};
///
/// let pather = FnPather::new(
///     |n: &i32, buf: &mut Vec<i32>| buf.extend([n - 1, n + 1]),
///     |a: &i32, b: &i32| (a - b).abs() as f32,
///     |_: &i32, _: &i32| 1.0,
/// );
/// let path = PathFinder::new(pather).find_path(0, 3).unwrap();
/// assert_eq!(path, Some(vec![0, 1, 2, 3]));
/// ```
pub struct FnPather<N, FN, FH, FC> {
    neighbors: FN,
    heuristic: FH,
    cost: FC,
    _node: std::marker::PhantomData<fn(&N)>,
}

impl<N, FN, FH, FC> FnPather<N, FN, FH, FC>
where
    N: Eq + Hash + Clone,
    FN: Fn(&N, &mut Vec<N>),
    FH: Fn(&N, &N) -> f32,
    FC: Fn(&N, &N) -> f32,
{
    pub fn new(neighbors: FN, heuristic: FH, cost: FC) -> Self {
        Self {
            neighbors,
            heuristic,
            cost,
            _node: std::marker::PhantomData,
        }
    }
}

impl<N, FN, FH, FC> Pather for FnPather<N, FN, FH, FC>
where
    N: Eq + Hash + Clone,
    FN: Fn(&N, &mut Vec<N>),
{
    type Node = N;
    type Error = Infallible;

    fn neighbors(&self, node: &N, buf: &mut Vec<N>) -> Result<(), Infallible> {
        (self.neighbors)(node, buf);
        Ok(())
    }
}

impl<N, FN, FH, FC> AstarPather for FnPather<N, FN, FH, FC>
where
    N: Eq + Hash + Clone,
    FN: Fn(&N, &mut Vec<N>),
    FH: Fn(&N, &N) -> f32,
    FC: Fn(&N, &N) -> f32,
{
    fn estimate(&self, from: &N, to: &N) -> Result<f32, Infallible> {
        Ok((self.heuristic)(from, to))
    }

    fn cost(&self, from: &N, to: &N) -> Result<f32, Infallible> {
        Ok((self.cost)(from, to))
    }
}
