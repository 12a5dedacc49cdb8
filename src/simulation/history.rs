use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::types::ImuSample;

/// 可选的历史长度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum HistoryCapacity {
    Points30,
    Points50,
    Points100,
    Points200,
}

impl HistoryCapacity {
    pub const ALL: [HistoryCapacity; 4] = [
        HistoryCapacity::Points30,
        HistoryCapacity::Points50,
        HistoryCapacity::Points100,
        HistoryCapacity::Points200,
    ];

    pub fn points(&self) -> usize {
        match self {
            HistoryCapacity::Points30 => 30,
            HistoryCapacity::Points50 => 50,
            HistoryCapacity::Points100 => 100,
            HistoryCapacity::Points200 => 200,
        }
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        HistoryCapacity::Points50
    }
}

impl TryFrom<usize> for HistoryCapacity {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.points() == value)
            .ok_or_else(|| format!("history capacity must be one of 30, 50, 100, 200 (got {})", value))
    }
}

impl From<HistoryCapacity> for usize {
    fn from(value: HistoryCapacity) -> Self {
        value.points()
    }
}

impl fmt::Display for HistoryCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

/// Bounded FIFO of recent samples, oldest evicted first.
#[derive(Debug, Clone)]
pub struct SampleHistory {
    samples: VecDeque<ImuSample>,
    capacity: HistoryCapacity,
}

impl SampleHistory {
    pub fn new(capacity: HistoryCapacity) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.points()),
            capacity,
        }
    }

    pub fn push(&mut self, sample: ImuSample) {
        self.samples.push_back(sample);
        self.evict();
    }

    pub fn capacity(&self) -> HistoryCapacity {
        self.capacity
    }

    /// 缩小容量时立即丢弃最旧的数据
    pub fn set_capacity(&mut self, capacity: HistoryCapacity) {
        self.capacity = capacity;
        self.evict();
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImuSample> {
        self.samples.iter()
    }

    /// 单通道的 (time, value) 点列，供绘图使用
    pub fn series(&self, channel: impl Fn(&ImuSample) -> f64) -> Vec<[f64; 2]> {
        self.iter().map(|s| [s.time, channel(s)]).collect()
    }

    fn evict(&mut self) {
        while self.samples.len() > self.capacity.points() {
            self.samples.pop_front();
        }
    }
}
