//! Bounded rolling history buffers feeding the monitoring charts.

use std::collections::VecDeque;

use crate::types::MetricSnapshot;

pub fn push_capped<T>(dq: &mut VecDeque<T>, v: T, cap: usize) {
    if dq.len() == cap {
        dq.pop_front();
    }
    dq.push_back(v);
}

pub const DEFAULT_CAPACITY: usize = 30;

/// One sample across all channels, appended as a unit.
#[derive(Debug, Clone)]
pub struct Sample {
    pub cpu: f64,
    pub ram: f64,
    pub temp: f64,
    pub label: String,
}

impl Sample {
    /// Build a sample from a snapshot plus a wall-clock label.
    /// A missing temperature reading charts as 0.
    pub fn from_snapshot(m: &MetricSnapshot, label: String) -> Self {
        Self {
            cpu: m.cpu_percent,
            ram: m.ram_percent,
            temp: m.cpu_temp.unwrap_or(0.0),
            label,
        }
    }

    pub fn now_label() -> String {
        chrono::Local::now().format("%H:%M:%S").to_string()
    }
}

/// Four parallel FIFO series (cpu %, ram %, temp °C, time labels) sharing one
/// capacity. A push appends to all four and evicts the oldest from all four
/// in the same call, so readers never see the series at different lengths.
pub struct SeriesBuffer {
    cap: usize,
    cpu: VecDeque<f64>,
    ram: VecDeque<f64>,
    temp: VecDeque<f64>,
    labels: VecDeque<String>,
}

impl SeriesBuffer {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            cpu: VecDeque::with_capacity(cap),
            ram: VecDeque::with_capacity(cap),
            temp: VecDeque::with_capacity(cap),
            labels: VecDeque::with_capacity(cap),
        }
    }

    pub fn push(&mut self, s: Sample) {
        push_capped(&mut self.cpu, s.cpu, self.cap);
        push_capped(&mut self.ram, s.ram, self.cap);
        push_capped(&mut self.temp, s.temp, self.cap);
        push_capped(&mut self.labels, s.label, self.cap);
    }

    pub fn len(&self) -> usize {
        self.cpu.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn cpu(&self) -> &VecDeque<f64> {
        &self.cpu
    }

    pub fn ram(&self) -> &VecDeque<f64> {
        &self.ram
    }

    pub fn temp(&self) -> &VecDeque<f64> {
        &self.temp
    }

    pub fn labels(&self) -> &VecDeque<String> {
        &self.labels
    }
}

impl Default for SeriesBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
