use std::collections::VecDeque;

pub const DEFAULT_TRAJECTORY_CAPACITY: usize = 200;

/// Bounded path of recent ideal positions, used only for drawing.
#[derive(Debug, Clone)]
pub struct Trajectory {
    points: VecDeque<[f64; 3]>,
    capacity: usize,
}

impl Trajectory {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, position: [f64; 3]) {
        self.points.push_back(position);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64; 3]> {
        self.points.iter()
    }
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::new(DEFAULT_TRAJECTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trajectory_is_bounded() {
        let mut trajectory = Trajectory::default();
        for i in 0..250 {
            trajectory.push([i as f64, 0.0, 0.0]);
        }
        assert_eq!(trajectory.len(), DEFAULT_TRAJECTORY_CAPACITY);
        assert_eq!(trajectory.iter().next(), Some(&[50.0, 0.0, 0.0]));
    }

    #[test]
    fn test_trajectory_clear() {
        let mut trajectory = Trajectory::new(5);
        trajectory.push([1.0, 2.0, 3.0]);
        trajectory.clear();
        assert!(trajectory.is_empty());
    }
}
