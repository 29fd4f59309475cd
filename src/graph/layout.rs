//! Force-directed layout for the dependency network.
//!
//! A Fruchterman-Reingold simulation: every pair of nodes repels, every
//! edge attracts its endpoints, and a weak pull towards the centre keeps
//! disconnected components on screen. Each tick's displacement is damped
//! and clamped to `max_step`.

use super::network::NetworkGraph;

/// A point in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

/// Simulation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceLayoutState {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    pub dt: f64,
    pub epsilon: f64,
    pub damping: f64,
    /// Upper bound on a node's movement per tick.
    pub max_step: f64,
    /// Scales the ideal edge length derived from the canvas area.
    pub k_scale: f64,
    pub c_attract: f64,
    pub c_repulse: f64,
    /// Strength of the pull towards the canvas centre.
    pub c_gravity: f64,
}

impl Default for ForceLayoutState {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            dt: 0.05,
            epsilon: 1e-3,
            damping: 0.3,
            max_step: 10.0,
            k_scale: 1.0,
            c_attract: 1.0,
            c_repulse: 1.0,
            c_gravity: 0.1,
        }
    }
}

/// Layout state for one graph.
///
/// Positions are kept in the same order as [`NetworkGraph::nodes`].
#[derive(Debug, Clone)]
pub struct ForceLayout {
    state: ForceLayoutState,
    ids: Vec<String>,
    edges: Vec<(usize, usize)>,
    positions: Vec<Point>,
    // Reusable displacement buffer to avoid per-tick allocations
    scratch_disp: Vec<Point>,
}

impl ForceLayout {
    /// Creates a layout with default parameters.
    pub fn new(graph: &NetworkGraph) -> Self {
        Self::with_state(graph, ForceLayoutState::default())
    }

    /// Creates a layout, placing nodes evenly on a circle around the centre.
    pub fn with_state(graph: &NetworkGraph, state: ForceLayoutState) -> Self {
        let ids: Vec<String> = graph.nodes().iter().map(|n| n.id.clone()).collect();
        let n = ids.len();
        let center = Point::new(state.width / 2.0, state.height / 2.0);
        let radius = state.width.min(state.height) / 3.0;

        let positions = (0..n)
            .map(|i| {
                let angle = 2.0 * std::f64::consts::PI * i as f64 / n.max(1) as f64;
                center + Point::new(angle.cos(), angle.sin()) * radius
            })
            .collect();

        Self {
            state,
            ids,
            edges: graph.edge_endpoints(),
            positions,
            scratch_disp: vec![Point::default(); n],
        }
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) {
        let n = self.positions.len();
        if n == 0 {
            return;
        }
        let Some(k) = self.ideal_length() else {
            return;
        };

        self.scratch_disp.clear();
        self.scratch_disp.resize(n, Point::default());

        self.compute_repulsion(k);
        self.compute_attraction(k);
        self.compute_gravity(k);
        self.apply_displacements();
    }

    /// Advances the simulation by `ticks` ticks.
    pub fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.step();
        }
    }

    fn ideal_length(&self) -> Option<f64> {
        let n = self.positions.len() as f64;
        let area = (self.state.width * self.state.height).max(1.0);
        let k = (area / n).sqrt() * self.state.k_scale;
        k.is_finite().then_some(k)
    }

    fn compute_repulsion(&mut self, k: f64) {
        let positions = &self.positions;
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let delta = positions[i] - positions[j];
                let distance = delta.length().max(self.state.epsilon);
                let force = self.state.c_repulse * (k * k) / distance;
                let dir = delta * (1.0 / distance);
                self.scratch_disp[i] += dir * force;
                self.scratch_disp[j] -= dir * force;
            }
        }
    }

    fn compute_attraction(&mut self, k: f64) {
        for &(from, to) in &self.edges {
            if from == to {
                continue;
            }
            let delta = self.positions[to] - self.positions[from];
            let distance = delta.length().max(self.state.epsilon);
            let force = self.state.c_attract * (distance * distance) / k;
            let pull = delta * (force / distance);
            self.scratch_disp[from] += pull;
            self.scratch_disp[to] -= pull;
        }
    }

    fn compute_gravity(&mut self, k: f64) {
        let center = Point::new(self.state.width / 2.0, self.state.height / 2.0);
        for (i, &pos) in self.positions.iter().enumerate() {
            let delta = center - pos;
            self.scratch_disp[i] += delta * (self.state.c_gravity * k / 100.0);
        }
    }

    fn apply_displacements(&mut self) {
        for (pos, disp) in self.positions.iter_mut().zip(&self.scratch_disp) {
            let mut step = *disp * (self.state.dt * self.state.damping);
            let len = step.length();
            if len > self.state.max_step {
                step = step * (self.state.max_step / len);
            }
            let next = *pos + step;
            if next.x.is_finite() && next.y.is_finite() {
                *pos = next;
            }
        }
    }

    /// Current position of the first node with this id.
    pub fn position(&self, id: &str) -> Option<Point> {
        self.ids
            .iter()
            .position(|candidate| candidate == id)
            .map(|i| self.positions[i])
    }

    /// `(id, position)` pairs in node order.
    pub fn positions(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.ids
            .iter()
            .map(String::as_str)
            .zip(self.positions.iter().copied())
    }

    /// Edge segments as `(from, to)` positions.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        self.edges
            .iter()
            .map(|&(from, to)| (self.positions[from], self.positions[to]))
            .collect()
    }

    /// Bounding box `(min, max)`, or `None` for an empty layout.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.positions.first()?;
        Some(self.positions.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
